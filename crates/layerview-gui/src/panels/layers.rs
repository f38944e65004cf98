use layerview_core::colormap::{Colormap, Palette};
use layerview_core::selection::layer_label;

use crate::app::LayerViewApp;

const PANEL_WIDTH: f32 = 180.0;

pub fn show(ctx: &egui::Context, app: &mut LayerViewApp) {
    egui::SidePanel::left("layers")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let status = format!(
                    "{}/{}",
                    app.selection.enabled_count(),
                    app.aggregator.layers()
                );
                super::section_header(ui, "Layers", Some(&status));
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    if ui.small_button("All").clicked() {
                        app.set_all_layers(ctx, true);
                    }
                    if ui.small_button("None").clicked() {
                        app.set_all_layers(ctx, false);
                    }
                });
                ui.add_space(4.0);

                for index in 0..app.aggregator.layers() {
                    let label = layer_label(index, &app.config.layer_names);
                    let mut checked = app.selection.is_enabled(index);
                    if ui.checkbox(&mut checked, label).changed() {
                        app.toggle_layer(ctx, index);
                    }
                }

                ui.separator();
                colormap_section(ui, ctx, app);
            });
        });
}

fn colormap_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut LayerViewApp) {
    super::section_header(ui, "Colormap", None);
    ui.add_space(4.0);

    let mut palette = app.config.colormap.palette;
    let changed = egui::ComboBox::from_id_salt("palette")
        .selected_text(palette.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in Palette::ALL {
                if ui
                    .selectable_value(&mut palette, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    if changed.inner == Some(true) {
        app.set_colormap(ctx, colormap_for(palette));
    }
}

/// Greens keeps its chopped range; the other palettes use their full range.
fn colormap_for(palette: Palette) -> Colormap {
    match palette {
        Palette::Greens => Colormap::chopped_greens(),
        other => Colormap::new(other),
    }
}
