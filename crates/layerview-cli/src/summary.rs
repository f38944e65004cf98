use console::Style;
use layerview_core::aggregate::AggregatedFrame;
use layerview_core::config::ViewerConfig;
use layerview_core::selection::{layer_label, LayerSelection};
use layerview_core::volume::Volume;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    enabled: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            enabled: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_frame_summary(
    config: &ViewerConfig,
    volume: &Volume,
    selection: &LayerSelection,
    frame: &AggregatedFrame,
) {
    let s = Styles::new();
    let (rows, cols, layers) = volume.shape();

    println!();
    println!("  {}", s.title.apply_to("3D Array Heatmap"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Shape"),
        s.value.apply_to(format!("{rows} x {cols} x {layers}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Samples"),
        s.value.apply_to(config.volume.kind)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Colormap"),
        s.value.apply_to(config.colormap)
    );
    println!();

    println!("  {}", s.header.apply_to("Layers"));
    for i in 0..layers {
        let label = layer_label(i, &config.layer_names);
        if selection.is_enabled(i) {
            println!("    {} {}", s.enabled.apply_to("[x]"), label);
        } else {
            println!("    {} {}", s.disabled.apply_to("[ ]"), s.disabled.apply_to(label));
        }
    }
    println!();

    println!("  {}", s.header.apply_to("Aggregated Frame"));
    let width = frame
        .data
        .iter()
        .map(|v| format_cell(*v).len())
        .max()
        .unwrap_or(1);
    for row in frame.data.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|v| format!("{:>width$}", format_cell(*v)))
            .collect();
        println!("    {}", cells.join(" "));
    }
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!("[{}, {}]", format_cell(frame.range.min), format_cell(frame.range.max)))
    );
    if frame.range.is_degenerate() {
        println!("  {:<14}{}", "", s.disabled.apply_to("zero-width color scale"));
    }
    println!();
}

/// Integers print without a fractional part.
fn format_cell(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.3}")
    }
}
