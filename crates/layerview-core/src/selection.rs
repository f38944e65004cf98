use crate::error::{LayerViewError, Result};

/// Per-layer enabled flags, one entry per volume layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerSelection {
    enabled: Vec<bool>,
}

impl LayerSelection {
    pub fn all_enabled(layers: usize) -> Self {
        Self::with_default(layers, true)
    }

    pub fn with_default(layers: usize, enabled: bool) -> Self {
        Self {
            enabled: vec![enabled; layers],
        }
    }

    /// Enable exactly `indices`; every other layer starts disabled.
    pub fn from_indices(layers: usize, indices: &[usize]) -> Result<Self> {
        let mut selection = Self::with_default(layers, false);
        for &index in indices {
            selection.set(index, true)?;
        }
        Ok(selection)
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Out-of-range layers read as disabled.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, enabled: bool) -> Result<()> {
        let total = self.enabled.len();
        let slot = self
            .enabled
            .get_mut(index)
            .ok_or(LayerViewError::LayerIndexOutOfRange { index, total })?;
        *slot = enabled;
        Ok(())
    }

    /// Flip one layer, returning its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let next = !self.is_enabled(index);
        self.set(index, next)?;
        Ok(next)
    }

    pub fn enabled_indices(&self) -> Vec<usize> {
        self.enabled
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|&&on| on).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.enabled
    }
}

/// Checkbox label for layer `index`: `"Layer 3: 1"` when a short name
/// exists for it, otherwise `"Layer 7"`.
pub fn layer_label<S: AsRef<str>>(index: usize, names: &[S]) -> String {
    match names.get(index) {
        Some(name) => format!("Layer {}: {}", index + 1, name.as_ref()),
        None => format!("Layer {}", index + 1),
    }
}
