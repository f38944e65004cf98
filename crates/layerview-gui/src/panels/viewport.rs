use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::app::LayerViewApp;
use crate::convert::plot_to_cell;
use crate::state::HoverCell;

pub fn show(ctx: &egui::Context, app: &mut LayerViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(texture_id) = app.viewport.heatmap.as_ref().map(|t| t.id()) else {
            app.ui_state.hover = None;
            show_placeholder(ui);
            return;
        };

        let [cols, rows] = app.viewport.grid_size;
        let center = PlotPoint::new(cols as f64 / 2.0, rows as f64 / 2.0);
        let size = egui::vec2(cols as f32, rows as f32);

        let response = Plot::new("heatmap")
            .data_aspect(1.0)
            .allow_boxed_zoom(false)
            .show_grid(false)
            .show(ui, |plot_ui| {
                plot_ui.image(PlotImage::new("aggregated", texture_id, center, size));
                plot_ui.pointer_coordinate()
            });

        app.ui_state.hover = response
            .inner
            .and_then(|p| plot_to_cell(p.x, p.y, cols, rows))
            .map(|(row, col)| HoverCell {
                row,
                col,
                value: app.frame.data[[row, col]],
            });
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Volume has no cells to display")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
