use crate::app::LayerViewApp;

const PANEL_WIDTH: f32 = 90.0;
const BAR_WIDTH: f32 = 18.0;
const TICKS: usize = 5;

/// Color scale legend for the current display range.
pub fn show(ctx: &egui::Context, app: &mut LayerViewApp) {
    egui::SidePanel::right("colorbar")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            let Some(texture_id) = app.viewport.colorbar.as_ref().map(|t| t.id()) else {
                return;
            };

            ui.add_space(8.0);
            let height = (ui.available_height() - 16.0).max(BAR_WIDTH);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(PANEL_WIDTH - 16.0, height),
                egui::Sense::hover(),
            );
            let bar = egui::Rect::from_min_size(rect.min, egui::vec2(BAR_WIDTH, height));

            let painter = ui.painter();
            painter.image(
                texture_id,
                bar,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            let range = app.frame.range;
            let text_color = ui.visuals().text_color();
            let font = egui::FontId::proportional(12.0);
            let ticks = if range.is_degenerate() { 1 } else { TICKS };
            for i in 0..ticks {
                // Top tick is the maximum.
                let t = if ticks == 1 { 0.0 } else { i as f64 / (ticks - 1) as f64 };
                let value = range.max - t * range.span();
                let y = if ticks == 1 {
                    bar.bottom()
                } else {
                    bar.top() + t as f32 * bar.height()
                };
                painter.line_segment(
                    [egui::pos2(bar.right(), y), egui::pos2(bar.right() + 4.0, y)],
                    egui::Stroke::new(1.0, text_color),
                );
                painter.text(
                    egui::pos2(bar.right() + 6.0, y),
                    egui::Align2::LEFT_CENTER,
                    format_tick(value),
                    font.clone(),
                    text_color,
                );
            }
        });
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
