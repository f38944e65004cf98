use ndarray::{stack, Array2, Array3, ArrayView2, ArrayView3, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_GRID_SIZE, DEFAULT_LAYER_COUNT, DEFAULT_SAMPLE_HIGH, DEFAULT_SAMPLE_LOW};
use crate::error::{LayerViewError, Result};

/// A stack of equally sized 2-D layers.
/// Indexed `[row, col, layer]`; the shape never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume {
    data: Array3<f64>,
}

impl Volume {
    pub fn from_array(data: Array3<f64>) -> Self {
        Self { data }
    }

    /// Stack 2-D layers along the third axis.
    pub fn from_layers(layers: &[Array2<f64>]) -> Result<Self> {
        let first = layers.first().ok_or(LayerViewError::EmptyVolume)?;
        let (rows, cols) = first.dim();
        for layer in layers {
            let (h, w) = layer.dim();
            if (h, w) != (rows, cols) {
                return Err(LayerViewError::InvalidDimensions {
                    width: w as u32,
                    height: h as u32,
                    expected_width: cols as u32,
                    expected_height: rows as u32,
                });
            }
        }

        let views: Vec<ArrayView2<f64>> = layers.iter().map(|l| l.view()).collect();
        let data = stack(Axis(2), &views).map_err(|_| LayerViewError::EmptyVolume)?;
        Ok(Self { data })
    }

    /// Fill a volume of the given shape with random samples.
    pub fn random<R: Rng + ?Sized>(spec: &VolumeSpec, rng: &mut R) -> Self {
        let shape = (spec.rows, spec.cols, spec.layers);
        let data = match spec.kind {
            SampleKind::Integers { low, high } if high > low => {
                Array3::from_shape_fn(shape, |_| rng.random_range(low..high) as f64)
            }
            SampleKind::Integers { low, .. } => Array3::from_elem(shape, low as f64),
            SampleKind::Floats => Array3::from_shape_fn(shape, |_| rng.random::<f64>()),
        };
        Self { data }
    }

    /// Generate the sample volume described by `spec`, seeded when a seed is set.
    pub fn generate(spec: &VolumeSpec) -> Self {
        debug!(
            rows = spec.rows,
            cols = spec.cols,
            layers = spec.layers,
            seed = ?spec.seed,
            "Generating sample volume"
        );
        match spec.seed {
            Some(seed) => Self::random(spec, &mut StdRng::seed_from_u64(seed)),
            None => Self::random(spec, &mut rand::rng()),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    pub fn layers(&self) -> usize {
        self.data.dim().2
    }

    /// (rows, cols, layers)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// The 2-D slice of layer `index`.
    ///
    /// Panics if `index >= self.layers()`.
    pub fn layer(&self, index: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(2), index)
    }

    pub fn view(&self) -> ArrayView3<'_, f64> {
        self.data.view()
    }
}

/// How sample values are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SampleKind {
    /// Uniform integers in `[low, high)`.
    Integers { low: i64, high: i64 },
    /// Uniform floats in `[0, 1)`.
    Floats,
}

impl Default for SampleKind {
    fn default() -> Self {
        Self::Integers {
            low: DEFAULT_SAMPLE_LOW,
            high: DEFAULT_SAMPLE_HIGH,
        }
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integers { low, high } => write!(f, "Integers [{low}, {high})"),
            Self::Floats => write!(f, "Floats [0, 1)"),
        }
    }
}

/// Shape and sampling parameters for a generated volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSpec {
    pub rows: usize,
    pub cols: usize,
    pub layers: usize,
    pub seed: Option<u64>,
    pub kind: SampleKind,
}

impl Default for VolumeSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            layers: DEFAULT_LAYER_COUNT,
            seed: None,
            kind: SampleKind::default(),
        }
    }
}
