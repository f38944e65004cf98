use layerview_core::consts::DEFAULT_LAYER_NAMES;
use layerview_core::error::LayerViewError;
use layerview_core::selection::{layer_label, LayerSelection};

#[test]
fn test_all_enabled_by_default() {
    let s = LayerSelection::all_enabled(4);
    assert_eq!(s.len(), 4);
    assert_eq!(s.enabled_indices(), vec![0, 1, 2, 3]);
    assert_eq!(s.enabled_count(), 4);
}

#[test]
fn test_toggle_flips_state() {
    let mut s = LayerSelection::all_enabled(3);
    assert_eq!(s.toggle(1).unwrap(), false);
    assert_eq!(s.as_slice(), &[true, false, true]);
    assert_eq!(s.toggle(1).unwrap(), true);
    assert_eq!(s.as_slice(), &[true, true, true]);
}

#[test]
fn test_from_indices_rejects_out_of_range() {
    let err = LayerSelection::from_indices(3, &[0, 3]).unwrap_err();
    assert!(matches!(
        err,
        LayerViewError::LayerIndexOutOfRange { index: 3, total: 3 }
    ));
}

#[test]
fn test_out_of_range_reads_disabled() {
    let s = LayerSelection::all_enabled(2);
    assert!(!s.is_enabled(2));
    assert!(!s.is_enabled(usize::MAX));
}

#[test]
fn test_empty_selection() {
    let s = LayerSelection::all_enabled(0);
    assert!(s.is_empty());
    assert!(s.enabled_indices().is_empty());
}

#[test]
fn test_layer_label_with_short_name() {
    assert_eq!(layer_label(0, &DEFAULT_LAYER_NAMES), "Layer 1: -1");
    assert_eq!(layer_label(4, &DEFAULT_LAYER_NAMES), "Layer 5: 3");
}

#[test]
fn test_layer_label_generic() {
    assert_eq!(layer_label(5, &DEFAULT_LAYER_NAMES), "Layer 6");
    let none: [&str; 0] = [];
    assert_eq!(layer_label(0, &none), "Layer 1");
}
