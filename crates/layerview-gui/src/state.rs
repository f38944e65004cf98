use std::path::PathBuf;

/// Textures currently on screen.
#[derive(Default)]
pub struct ViewportState {
    pub heatmap: Option<egui::TextureHandle>,
    pub colorbar: Option<egui::TextureHandle>,
    /// Heatmap size in cells, `[cols, rows]`.
    pub grid_size: [usize; 2],
}

/// Value under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverCell {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
    pub hover: Option<HoverCell>,
    pub last_export: Option<PathBuf>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
