use std::path::PathBuf;
use std::sync::mpsc;

use layerview_core::aggregate::{AggregatedFrame, LayerAggregator};
use layerview_core::colormap::Colormap;
use layerview_core::config::ViewerConfig;
use layerview_core::io::export::save_heatmap;
use layerview_core::selection::LayerSelection;
use tracing::{info, warn};

use crate::convert::{colorbar_image, frame_to_color_image};
use crate::panels;
use crate::state::{UIState, ViewportState};

pub struct LayerViewApp {
    pub aggregator: LayerAggregator,
    pub selection: LayerSelection,
    pub frame: AggregatedFrame,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    /// Paths picked in the export dialog, which runs on its own thread.
    pub export_tx: mpsc::Sender<PathBuf>,
    export_rx: mpsc::Receiver<PathBuf>,
    pub show_about: bool,
}

impl LayerViewApp {
    pub fn new(
        ctx: &egui::Context,
        aggregator: LayerAggregator,
        selection: LayerSelection,
        config: ViewerConfig,
    ) -> Self {
        let (export_tx, export_rx) = mpsc::channel();
        let frame = aggregator.aggregate(&selection);
        let (rows, cols, layers) = aggregator.volume().shape();

        let mut app = Self {
            aggregator,
            selection,
            frame,
            config,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            export_tx,
            export_rx,
            show_about: false,
        };
        app.ui_state
            .add_log(format!("Loaded {rows}x{cols} volume with {layers} layers"));
        app.update_colorbar_texture(ctx);
        app.update_heatmap_texture(ctx);
        app
    }

    /// Checkbox handler: flip one layer and redraw.
    pub fn toggle_layer(&mut self, ctx: &egui::Context, index: usize) {
        match self.aggregator.toggle(&mut self.selection, index) {
            Ok(frame) => {
                self.frame = frame;
                self.update_heatmap_texture(ctx);
            }
            Err(e) => {
                warn!("Layer toggle rejected: {e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    /// Enable or disable every layer at once.
    pub fn set_all_layers(&mut self, ctx: &egui::Context, enabled: bool) {
        self.selection = LayerSelection::with_default(self.aggregator.layers(), enabled);
        self.frame = self.aggregator.aggregate(&self.selection);
        self.update_heatmap_texture(ctx);
    }

    pub fn set_colormap(&mut self, ctx: &egui::Context, colormap: Colormap) {
        self.config.colormap = colormap;
        self.update_colorbar_texture(ctx);
        self.update_heatmap_texture(ctx);
    }

    fn update_heatmap_texture(&mut self, ctx: &egui::Context) {
        self.viewport.grid_size = [self.frame.cols(), self.frame.rows()];
        if self.frame.data.is_empty() {
            self.viewport.heatmap = None;
            return;
        }
        let image = frame_to_color_image(&self.frame, &self.config.colormap);
        self.viewport.heatmap = Some(ctx.load_texture("heatmap", image, egui::TextureOptions::NEAREST));
    }

    fn update_colorbar_texture(&mut self, ctx: &egui::Context) {
        let image = colorbar_image(&self.config.colormap);
        self.viewport.colorbar =
            Some(ctx.load_texture("colorbar", image, egui::TextureOptions::LINEAR));
    }

    /// Save the frame currently on screen to paths chosen in the export dialog.
    fn poll_exports(&mut self) {
        while let Ok(path) = self.export_rx.try_recv() {
            match save_heatmap(&self.frame, &self.config.colormap, &self.config.render, &path) {
                Ok(()) => {
                    info!(path = %path.display(), "Exported heatmap");
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                    self.ui_state.last_export = Some(path);
                }
                Err(e) => {
                    warn!(path = %path.display(), "Export failed: {e}");
                    self.ui_state.add_log(format!("ERROR: {e}"));
                }
            }
        }
    }
}

impl eframe::App for LayerViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_exports();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::layers::show(ctx, self);
        panels::colorbar::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("LayerView");
                        ui.label("3D Array Heatmap Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
