//! Tests for lot rendering and per-bay characters.

use super::*;

use crate::builder::LotBuilder;

#[test]
fn test_render_empty_lot() {
    let lot = LotBuilder::new().with_square_size(4).build();
    assert_eq!(lot.render(), "UUUU\nUUUU\nUUUU\nUUUU");
}

#[test]
fn test_render_exit_on_reversed_row() {
    let lot = LotBuilder::new()
        .with_square_size(3)
        .with_pedestrian_exit(5)
        .build();
    assert_eq!(lot.render(), "UUU\n=UU\nUUU");
}

#[test]
fn test_render_free_disabled_bay() {
    let lot = LotBuilder::new()
        .with_square_size(2)
        .with_disabled_bay(2)
        .build();
    assert_eq!(lot.render(), "UU\nU@");
}

#[test]
fn test_render_parked_vehicle() {
    let mut lot = LotBuilder::new()
        .with_square_size(2)
        .with_disabled_bay(2)
        .build();
    assert_eq!(lot.park('C'), Some(0));
    assert_eq!(lot.render(), "CU\nU@");
}

#[test]
fn test_render_occupied_disabled_bay_shows_vehicle() {
    let mut lot = LotBuilder::new()
        .with_square_size(2)
        .with_disabled_bay(2)
        .build();
    assert_eq!(lot.park(DISABLED_VEHICLE), Some(2));
    assert_eq!(lot.render(), "UU\nUD");
}

#[test]
fn test_render_rows_alternate_direction() {
    let mut lot = LotBuilder::new().with_square_size(3).build();
    for vehicle in ['A', 'B', 'C', 'E'] {
        lot.park(vehicle);
    }
    // Bay 3 is the first bay of row 1, drawn at its right end.
    assert_eq!(lot.render(), "ABC\nUUE\nUUU");
    assert_eq!(lot.render_row(1), "UUE");
}

#[test]
fn test_render_exit_takes_precedence_over_disabled() {
    let lot = LotBuilder::new()
        .with_square_size(2)
        .with_pedestrian_exit(1)
        .with_disabled_bay(1)
        .build();
    assert_eq!(lot.bay_char(1), EXIT_CHAR);
    assert_eq!(lot.render(), "U=\nUU");
}

#[test]
fn test_render_after_unpark() {
    let mut lot = LotBuilder::new()
        .with_square_size(2)
        .with_disabled_bay(3)
        .build();
    let bay = lot.park(DISABLED_VEHICLE).expect("free disabled bay");
    assert_eq!(lot.render(), "UU\nDU");
    assert!(lot.unpark(bay));
    assert_eq!(lot.render(), "UU\n@U");
}

#[test]
fn test_render_zero_size() {
    let lot = Lot::new(0, vec![], vec![]);
    assert_eq!(lot.render(), "");
}

#[test]
fn test_display_matches_render() {
    let mut lot = LotBuilder::new()
        .with_square_size(3)
        .with_pedestrian_exit(5)
        .with_disabled_bay(0)
        .build();
    lot.park('M');
    assert_eq!(format!("{lot}"), lot.render());
}

#[test]
fn test_bay_char_priority() {
    let mut lot = LotBuilder::new()
        .with_square_size(2)
        .with_pedestrian_exit(0)
        .with_disabled_bay(1)
        .build();
    assert_eq!(lot.bay_char(0), EXIT_CHAR);
    assert_eq!(lot.bay_char(1), FREE_DISABLED_BAY_CHAR);
    assert_eq!(lot.bay_char(2), FREE_BAY_CHAR);

    // Bay 1 sits next to exit 0, so it fills first.
    assert_eq!(lot.park('C'), Some(1));
    assert_eq!(lot.bay_char(1), 'C');
}
