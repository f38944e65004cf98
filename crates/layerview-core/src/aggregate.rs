use std::ops::Add;

use ndarray::{Array2, ArrayView3, Axis};
use num_traits::Zero;
use tracing::debug;

use crate::error::{LayerViewError, Result};
use crate::selection::LayerSelection;
use crate::volume::Volume;

/// Element-wise sum of the enabled layers of `volume`.
///
/// Returns the all-zero `(rows, cols)` grid when nothing is enabled.
/// Layers past the end of `selection` count as disabled.
pub fn sum_layers<A>(volume: ArrayView3<'_, A>, selection: &LayerSelection) -> Array2<A>
where
    A: Clone + Zero + Add<Output = A>,
{
    let (rows, cols, layers) = volume.dim();
    let mut sum = Array2::<A>::zeros((rows, cols));
    for index in (0..layers).filter(|&i| selection.is_enabled(i)) {
        let layer = volume.index_axis(Axis(2), index);
        sum.zip_mut_with(&layer, |acc, v| *acc = acc.clone() + v.clone());
    }
    sum
}

/// Value range used to scale colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min and max over `frame`; `(0, 0)` for a frame with no cells.
    pub fn of(frame: &Array2<f64>) -> Self {
        if frame.is_empty() {
            return Self::default();
        }
        let (min, max) = frame
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min.is_finite() && max.is_finite() {
            Self { min, max }
        } else {
            Self::default()
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.is_nan() || span <= 0.0
    }

    /// Map `value` into `[0, 1]`. A zero-width range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

/// The summed grid currently on display, with its color range.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedFrame {
    pub data: Array2<f64>,
    pub range: DisplayRange,
}

impl AggregatedFrame {
    pub fn new(data: Array2<f64>) -> Self {
        let range = DisplayRange::of(&data);
        Self { data, range }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }
}

/// Owns the volume of a viewing session and turns selections into frames.
#[derive(Clone, Debug)]
pub struct LayerAggregator {
    volume: Volume,
}

impl LayerAggregator {
    pub fn new(volume: Volume) -> Self {
        Self { volume }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn layers(&self) -> usize {
        self.volume.layers()
    }

    /// One enabled flag per layer.
    pub fn default_selection(&self) -> LayerSelection {
        LayerSelection::all_enabled(self.layers())
    }

    pub fn aggregate(&self, selection: &LayerSelection) -> AggregatedFrame {
        let frame = AggregatedFrame::new(sum_layers(self.volume.view(), selection));
        debug!(
            enabled = selection.enabled_count(),
            min = frame.range.min,
            max = frame.range.max,
            "Aggregated layers"
        );
        frame
    }

    /// Flip layer `index` in `selection` and recompute.
    ///
    /// The selection is left untouched when `index` is not a layer of the volume.
    pub fn toggle(&self, selection: &mut LayerSelection, index: usize) -> Result<AggregatedFrame> {
        let total = self.layers();
        if index >= total {
            return Err(LayerViewError::LayerIndexOutOfRange { index, total });
        }
        selection.toggle(index)?;
        Ok(self.aggregate(selection))
    }
}
