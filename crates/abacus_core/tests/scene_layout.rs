//! Integration tests for scene layout and display-list output
//!
//! These tests verify that:
//! - Chained `next_to` placement lays cells out edge to edge
//! - Moving a parent group carries every descendant
//! - Stale handles are reported instead of panicking
//! - Colors survive a trip through a serde format as hex strings

use abacus_core::{Color, CoreError, DrawCommand, Mobject, Point, Rect, Scene, Vec2};
use pretty_assertions::assert_eq;

#[test]
fn test_row_of_cells_is_contiguous() {
    let mut scene = Scene::new();
    let row = scene.insert(Mobject::group());
    let mut previous = None;

    for _ in 0..4 {
        let cell = scene.insert_child(row, Mobject::square(1.0)).unwrap();
        if let Some(previous) = previous {
            scene.next_to(cell, previous, Vec2::RIGHT, 0.0).unwrap();
        }
        previous = Some(cell);
    }

    assert_eq!(scene.bounds(row).unwrap(), Rect::new(-0.5, -0.5, 4.0, 1.0));

    let centers: Vec<Point> = scene
        .children(row)
        .unwrap()
        .iter()
        .map(|id| scene.props(*id).unwrap().center)
        .collect();
    assert_eq!(
        centers,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]
    );
}

#[test]
fn test_move_to_recenters_group() {
    let mut scene = Scene::new();
    let group = scene.insert(Mobject::group());
    let square = scene.insert_child(group, Mobject::square(2.0)).unwrap();
    let label = scene.insert_child(group, Mobject::text("hi")).unwrap();
    scene.next_to(label, square, Vec2::ZERO, 0.0).unwrap();

    scene.move_to(group, Point::new(-3.0, 1.5)).unwrap();
    assert_eq!(scene.props(square).unwrap().center, Point::new(-3.0, 1.5));
    assert_eq!(scene.props(label).unwrap().center, Point::new(-3.0, 1.5));
}

#[test]
fn test_stale_handle_is_an_error() {
    let mut scene = Scene::new();
    let id = scene.insert(Mobject::square(1.0));
    scene.remove_subtree(id).unwrap();

    assert_eq!(scene.shift(id, Vec2::UP), Err(CoreError::UnknownMobject(id)));
    assert!(scene.get(id).is_none());
    assert!(scene.text(id).is_none());
}

#[test]
fn test_opacity_folds_into_draw_colors() {
    let mut scene = Scene::new();
    let square = scene.insert(
        Mobject::square(1.0)
            .with_color(Color::BLUE_B)
            .with_fill(Color::BLUE_D, 1.0),
    );
    scene.add(square).unwrap();
    scene.set_opacity(square, 0.5).unwrap();

    let list = scene.display_list();
    match list.find(square) {
        Some(DrawCommand::Rect { stroke, fill, .. }) => {
            assert_eq!(stroke.a, 0.5);
            assert_eq!(fill.a, 0.5);
        }
        other => panic!("expected a rect command, got {other:?}"),
    }
}

#[test]
fn test_color_serializes_as_hex() {
    let json = serde_json::to_string(&Color::BLUE_D).unwrap();
    assert_eq!(json, "\"#29ABCA\"");

    let parsed: Color = serde_json::from_str("\"#9CDCEB\"").unwrap();
    assert_eq!(parsed, Color::BLUE_B);

    assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
}
