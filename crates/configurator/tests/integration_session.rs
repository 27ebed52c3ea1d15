//! Integration tests for the headless session.
//!
//! End-to-end flows through selection, placement, wall variants, pricing,
//! removal and history.

use configurator_lib::session::Session;
use configurator_lib::state::Selection;
use configurator_lib::view::Highlight;
use shared::{ConfiguratorError, Face, FaceVariant, UnitId};

fn attach(s: &mut Session, anchor: UnitId, face: Face) -> UnitId {
    s.pointer_hit(anchor, Some(face)).unwrap();
    s.pointer_hit(anchor, Some(face)).unwrap();
    s.add_unit().unwrap()
}

#[test]
fn test_adjacent_positions_from_origin() {
    let mut s = Session::new();
    let front = attach(&mut s, 1, Face::Front);
    let right = attach(&mut s, 1, Face::Right);
    let roof = attach(&mut s, 1, Face::Roof);

    assert_eq!(s.assembly().get_unit(front).unwrap().position, [0.0, 0.0, 2.5]);
    assert_eq!(s.assembly().get_unit(right).unwrap().position, [6.0, 0.0, 0.0]);
    assert_eq!(s.assembly().get_unit(roof).unwrap().position, [0.0, 2.5, 0.0]);
    assert!(s.validator().validate_all().is_empty());
}

#[test]
fn test_added_unit_keeps_selection_on_anchor_face() {
    let mut s = Session::new();
    let id = attach(&mut s, 1, Face::Back);
    assert_eq!(id, 2);
    assert!(s.selection_state().is_face_selected(1, Face::Back));
    assert_eq!(s.assembly().get_unit(id).unwrap().position, [0.0, 0.0, -2.5]);
}

#[test]
fn test_price_with_window_and_door() {
    let mut s = Session::new();
    let second = attach(&mut s, 1, Face::Right);

    s.select_face(1, Face::Front).unwrap();
    s.set_wall_variant(Face::Front, FaceVariant::Window).unwrap();
    s.select_face(second, Face::Left).unwrap();
    s.set_wall_variant(Face::Left, FaceVariant::Door).unwrap();

    assert_eq!(s.total_price(), 2 * 100_000 + 15_000 + 20_000);
    let breakdown = s.price_breakdown();
    assert_eq!(breakdown.modifications_total, 35_000);
    assert_eq!(breakdown.unit_count, 2);
}

#[test]
fn test_roof_refuses_window_and_door() {
    let mut s = Session::new();
    s.select_face(1, Face::Roof).unwrap();
    for variant in [FaceVariant::Window, FaceVariant::Door] {
        let err = s.set_wall_variant(Face::Roof, variant).unwrap_err();
        assert_eq!(
            err,
            ConfiguratorError::InvalidFaceForVariant {
                face: Face::Roof,
                variant
            }
        );
    }
    assert!(s.assembly().walls().is_empty());
    assert_eq!(s.total_price(), 100_000);
    assert!(!s.assembly().can_undo());
}

#[test]
fn test_pointer_two_step_selection() {
    let mut s = Session::new();
    s.pointer_hit(1, Some(Face::Front)).unwrap();
    assert_eq!(s.selection(), Selection::UnitOnly { unit: 1 });
    s.pointer_hit(1, Some(Face::Front)).unwrap();
    assert_eq!(
        s.selection(),
        Selection::UnitAndFace {
            unit: 1,
            face: Face::Front
        }
    );
    s.background_click();
    assert_eq!(s.selection(), Selection::None);
}

#[test]
fn test_hit_on_frame_keeps_unit_selection() {
    let mut s = Session::new();
    s.pointer_hit(1, None).unwrap();
    s.pointer_hit(1, None).unwrap();
    assert_eq!(s.selection(), Selection::UnitOnly { unit: 1 });
}

#[test]
fn test_removal_drops_walls_and_selection() {
    let mut s = Session::new();
    let second = attach(&mut s, 1, Face::Front);
    s.select_face(second, Face::Back).unwrap();
    s.set_wall_variant(Face::Back, FaceVariant::Window).unwrap();

    assert_eq!(s.remove_unit(), Some(second));
    assert!(!s.assembly().contains(second));
    assert!(s.assembly().walls().unit_walls(second).is_none());
    assert_eq!(s.selection(), Selection::None);
    assert_eq!(s.total_price(), 100_000);
}

#[test]
fn test_explicit_base_does_not_change_price() {
    let mut s = Session::new();
    let before = s.total_price();
    s.select_face(1, Face::Left).unwrap();
    s.set_wall_variant(Face::Left, FaceVariant::Base).unwrap();
    assert_eq!(s.wall_variant(1, Face::Left), FaceVariant::Base);
    assert_eq!(s.wall_variant(1, Face::Right), FaceVariant::Base);
    assert_eq!(s.total_price(), before);
}

#[test]
fn test_variant_requires_matching_face_selection() {
    let mut s = Session::new();
    s.select_unit(1).unwrap();
    assert_eq!(
        s.set_wall_variant(Face::Front, FaceVariant::Door),
        Err(ConfiguratorError::NoFaceSelected)
    );
    s.select_face(1, Face::Back).unwrap();
    assert_eq!(
        s.set_wall_variant(Face::Front, FaceVariant::Door),
        Err(ConfiguratorError::NoFaceSelected)
    );
    assert_eq!(s.wall_variant(1, Face::Front), FaceVariant::Base);
}

#[test]
fn test_undo_redo_across_operations() {
    let mut s = Session::new();
    let second = attach(&mut s, 1, Face::Right);
    s.set_wall_variant(Face::Right, FaceVariant::Door).unwrap();
    assert_eq!(s.total_price(), 220_000);

    assert!(s.undo());
    assert_eq!(s.total_price(), 200_000);
    assert!(s.undo());
    assert_eq!(s.unit_count(), 1);
    assert!(!s.assembly().contains(second));

    assert!(s.redo());
    assert!(s.redo());
    assert_eq!(s.total_price(), 220_000);
    assert!(!s.redo());

    let third = attach(&mut s, 1, Face::Front);
    assert_ne!(third, second);
}

#[test]
fn test_views_follow_selection_and_variants() {
    let mut s = Session::new();
    s.select_face(1, Face::Front).unwrap();
    s.set_wall_variant(Face::Front, FaceVariant::Window).unwrap();

    let views = s.views();
    let front = views[0].part("Wall_Front_Window").unwrap();
    assert_eq!(front.highlight, Highlight::Face);
    assert_eq!(views[0].part("Floor_V1").unwrap().highlight, Highlight::Unit);
    assert!(views[0].part("Wall_Front_V1").is_none());
}

#[test]
fn test_report_after_building() {
    let mut s = Session::new();
    let second = attach(&mut s, 1, Face::Roof);
    s.select_face(second, Face::Left).unwrap();
    s.set_wall_variant(Face::Left, FaceVariant::Window).unwrap();

    let report = s.report_at(1_000);
    assert_eq!(report.unit_count, 2);
    assert_eq!(report.total_price, 215_000);
    assert!(report.units[0].modifications.is_empty());
    assert_eq!(report.units[1].modifications.len(), 1);
    assert_eq!(report.generated_at, 1_000);
}

#[test]
fn test_clear_then_undo_restores() {
    let mut s = Session::new();
    attach(&mut s, 1, Face::Left);
    s.clear();
    assert_eq!(s.unit_count(), 0);
    assert_eq!(s.selection(), Selection::None);
    assert!(s.undo());
    assert_eq!(s.unit_count(), 2);
}

#[test]
fn test_load_largest_id_is_rejected() {
    let mut s = Session::empty();
    let err = s
        .load_json(r#"{"units": [{"id": 18446744073709551615, "position": [0, 0, 0]}]}"#)
        .unwrap_err();
    assert!(err.contains("id space exhausted"));
    assert_eq!(s.unit_count(), 0);
    assert!(!s.assembly().can_undo());
}

#[test]
fn test_removal_by_id_resets_selection_of_that_unit() {
    let mut s = Session::new();
    s.select_face(1, Face::Front).unwrap();
    assert!(s.remove_unit_by_id(1));
    assert_eq!(s.selection(), Selection::None);
    assert_eq!(s.add_unit(), Err(ConfiguratorError::NoFaceSelected));
    assert_eq!(s.selection_state().selected_unit(), None);
}
