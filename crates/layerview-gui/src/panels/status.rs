use crate::app::LayerViewApp;

const LOG_LINES: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut LayerViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES as f32 + spacing * (LOG_LINES - 1) as f32;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            let [cols, rows] = app.viewport.grid_size;
            ui.label(format!("{cols}x{rows}"));
            ui.separator();
            ui.label(format!(
                "Layers: {}/{}",
                app.selection.enabled_count(),
                app.aggregator.layers()
            ));
            ui.separator();
            ui.label(format!(
                "Range: [{}, {}]",
                app.frame.range.min, app.frame.range.max
            ));
            if let Some(hover) = app.ui_state.hover {
                ui.separator();
                ui.label(format!(
                    "({}, {}) = {}",
                    hover.row, hover.col, hover.value
                ));
            }
            if let Some(ref path) = app.ui_state.last_export {
                ui.separator();
                ui.label(format!("Last export: {}", path.display()));
            }
        });

        ui.add_space(2.0);
    });
}
