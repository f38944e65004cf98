/// Default number of rows and columns of the generated sample volume.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Default number of layers of the generated sample volume.
pub const DEFAULT_LAYER_COUNT: usize = 10;

/// Lower bound (inclusive) of generated integer samples.
pub const DEFAULT_SAMPLE_LOW: i64 = 0;

/// Upper bound (exclusive) of generated integer samples.
pub const DEFAULT_SAMPLE_HIGH: i64 = 6;

/// Short names shown next to the first layers' toggles.
pub const DEFAULT_LAYER_NAMES: [&str; 5] = ["-1", "0", "1", "2", "3"];

/// Base filename used for exported heatmaps.
pub const DEFAULT_OUTPUT_BASE: &str = "heatmap";

/// Timestamp format appended to exported filenames.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File extension of exported heatmaps.
pub const EXPORT_EXTENSION: &str = "jpeg";

/// Side length in pixels of one grid cell in a rendered heatmap.
pub const DEFAULT_CELL_SIZE: u32 = 48;

/// Width in pixels of the colorbar strip in a rendered heatmap.
pub const DEFAULT_COLORBAR_WIDTH: u32 = 24;

/// Gap in pixels between the heatmap and its colorbar.
pub const DEFAULT_COLORBAR_GAP: u32 = 12;

/// Largest width or height in pixels of a rendered heatmap.
pub const MAX_EXPORT_DIM: u32 = 2048;

/// Lower end of the Greens palette used by the default colormap.
pub const CHOPPED_GREENS_LOW: f32 = 0.3;

/// Upper end of the Greens palette used by the default colormap.
pub const CHOPPED_GREENS_HIGH: f32 = 0.8;
