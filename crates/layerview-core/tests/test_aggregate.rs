mod common;

use approx::assert_abs_diff_eq;
use ndarray::{array, Array2, Array3};

use common::{two_by_two, volume_from_layers};
use layerview_core::aggregate::{DisplayRange, LayerAggregator};
use layerview_core::error::LayerViewError;
use layerview_core::selection::LayerSelection;
use layerview_core::volume::{SampleKind, Volume, VolumeSpec};

#[test]
fn test_all_layers_enabled() {
    let agg = LayerAggregator::new(two_by_two());
    let frame = agg.aggregate(&LayerSelection::all_enabled(2));

    assert_eq!(frame.data, array![[6.0, 8.0], [10.0, 12.0]]);
    assert_eq!(frame.range, DisplayRange::new(6.0, 12.0));
}

#[test]
fn test_no_layers_enabled_is_zero() {
    let agg = LayerAggregator::new(two_by_two());
    let frame = agg.aggregate(&LayerSelection::with_default(2, false));

    assert_eq!(frame.data, Array2::<f64>::zeros((2, 2)));
    assert_eq!(frame.range, DisplayRange::new(0.0, 0.0));
    assert!(frame.range.is_degenerate());
}

#[test]
fn test_partial_selection_single_cell() {
    let agg = LayerAggregator::new(volume_from_layers(&[&[&[2.0]], &[&[3.0]], &[&[5.0]]]));
    let selection = LayerSelection::from_indices(3, &[0, 2]).unwrap();
    let frame = agg.aggregate(&selection);

    assert_eq!(frame.data, array![[7.0]]);
    assert_eq!(frame.range.min, 7.0);
    assert_eq!(frame.range.max, 7.0);
}

#[test]
fn test_matches_manual_sum_on_random_volume() {
    let spec = VolumeSpec {
        seed: Some(7),
        ..VolumeSpec::default()
    };
    let volume = Volume::generate(&spec);
    let agg = LayerAggregator::new(volume.clone());
    let selection = LayerSelection::from_indices(spec.layers, &[1, 4, 9]).unwrap();

    let expected = &volume.layer(1) + &volume.layer(4) + &volume.layer(9);
    assert_eq!(agg.aggregate(&selection).data, expected);
}

#[test]
fn test_aggregate_is_idempotent() {
    let volume = Volume::generate(&VolumeSpec {
        kind: SampleKind::Floats,
        seed: Some(11),
        ..VolumeSpec::default()
    });
    let agg = LayerAggregator::new(volume);
    let selection = LayerSelection::from_indices(10, &[0, 3, 5]).unwrap();

    assert_eq!(agg.aggregate(&selection), agg.aggregate(&selection));
}

#[test]
fn test_toggle_off_and_on_restores_frame() {
    let agg = LayerAggregator::new(Volume::generate(&VolumeSpec {
        seed: Some(3),
        ..VolumeSpec::default()
    }));
    let mut selection = agg.default_selection();
    let before = agg.aggregate(&selection);

    let off = agg.toggle(&mut selection, 4).unwrap();
    assert!(!selection.is_enabled(4));
    assert_eq!(off.data, &before.data - &agg.volume().layer(4));

    let on = agg.toggle(&mut selection, 4).unwrap();
    assert!(selection.is_enabled(4));
    assert_eq!(on, before);
}

#[test]
fn test_toggle_out_of_range_leaves_selection() {
    let agg = LayerAggregator::new(two_by_two());
    let mut selection = agg.default_selection();

    let err = agg.toggle(&mut selection, 2).unwrap_err();
    assert!(matches!(
        err,
        LayerViewError::LayerIndexOutOfRange { index: 2, total: 2 }
    ));
    assert_eq!(selection, LayerSelection::all_enabled(2));
}

#[test]
fn test_empty_grid_has_zero_range() {
    let agg = LayerAggregator::new(Volume::from_array(Array3::zeros((0, 4, 3))));
    let frame = agg.aggregate(&agg.default_selection());

    assert_eq!(frame.data.dim(), (0, 4));
    assert_eq!(frame.range, DisplayRange::default());
}

#[test]
fn test_volume_without_layers_aggregates_to_zero() {
    let agg = LayerAggregator::new(Volume::from_array(Array3::zeros((3, 2, 0))));
    let frame = agg.aggregate(&agg.default_selection());

    assert_eq!(frame.data, Array2::<f64>::zeros((3, 2)));
    assert_eq!(frame.range, DisplayRange::default());
}

#[test]
fn test_float_range_covers_frame() {
    let volume = Volume::generate(&VolumeSpec {
        kind: SampleKind::Floats,
        seed: Some(21),
        ..VolumeSpec::default()
    });
    let agg = LayerAggregator::new(volume);
    let frame = agg.aggregate(&agg.default_selection());

    let max = frame.data.iter().copied().fold(f64::MIN, f64::max);
    let min = frame.data.iter().copied().fold(f64::MAX, f64::min);
    assert_abs_diff_eq!(frame.range.max, max);
    assert_abs_diff_eq!(frame.range.min, min);
    assert_abs_diff_eq!(frame.range.normalize(min), 0.0);
    assert_abs_diff_eq!(frame.range.normalize(max), 1.0, epsilon = 1e-12);
}
