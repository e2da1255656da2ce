use super::*;

fn pressed_at(x: f32, y: f32) -> DragGesture {
    let mut gesture = DragGesture::new(8.0);
    gesture.press(Point::new(x, y));
    gesture
}

fn at_both_ends(_: DragDirection) -> bool {
    false
}

#[test]
fn rightward_move_past_slop_starts_left_drag() {
    let gesture = pressed_at(0.0, 0.0);
    let start = gesture
        .classify(Point::new(40.0, 0.0), at_both_ends)
        .expect("drag recognised");
    assert_eq!(start.direction, DragDirection::Left);
    assert_eq!(start.reference_x, 8.0);
}

#[test]
fn leftward_move_past_slop_starts_right_drag() {
    let gesture = pressed_at(100.0, 50.0);
    let start = gesture
        .classify(Point::new(80.0, 52.0), at_both_ends)
        .expect("drag recognised");
    assert_eq!(start.direction, DragDirection::Right);
    assert_eq!(start.reference_x, 92.0);
}

#[test]
fn exactly_slop_is_enough() {
    let gesture = pressed_at(0.0, 0.0);
    assert!(gesture.classify(Point::new(8.0, 0.0), at_both_ends).is_some());
    assert!(gesture.classify(Point::new(-8.0, 0.0), at_both_ends).is_some());
    assert!(gesture.classify(Point::new(7.9, 0.0), at_both_ends).is_none());
    assert!(gesture.classify(Point::new(-7.9, 0.0), at_both_ends).is_none());
}

#[test]
fn vertical_dominant_move_is_ignored() {
    let gesture = pressed_at(0.0, 0.0);
    assert!(gesture.classify(Point::new(20.0, 21.0), at_both_ends).is_none());
    assert!(gesture.classify(Point::new(-20.0, -21.0), at_both_ends).is_none());
}

#[test]
fn diagonal_tie_favours_drag() {
    let gesture = pressed_at(0.0, 0.0);
    let start = gesture.classify(Point::new(20.0, -20.0), at_both_ends);
    assert_eq!(start.map(|s| s.direction), Some(DragDirection::Left));
}

#[test]
fn scrollable_child_blocks_recognition() {
    let gesture = pressed_at(0.0, 0.0);
    let can_scroll_left = |direction: DragDirection| direction == DragDirection::Left;
    assert!(gesture.classify(Point::new(30.0, 0.0), can_scroll_left).is_none());
    // The right edge is still available.
    assert_eq!(
        gesture
            .classify(Point::new(-30.0, 0.0), can_scroll_left)
            .map(|s| s.direction),
        Some(DragDirection::Right)
    );
}

#[test]
fn no_press_means_no_drag() {
    let mut gesture = DragGesture::new(8.0);
    assert!(gesture.classify(Point::new(100.0, 0.0), at_both_ends).is_none());
    gesture.press(Point::new(0.0, 0.0));
    assert!(gesture.classify(Point::new(100.0, 0.0), at_both_ends).is_some());
}

#[test]
fn direction_clamps_toward_its_own_side() {
    assert_eq!(DragDirection::Left.clamp_drag(-5.0), 0.0);
    assert_eq!(DragDirection::Left.clamp_drag(5.0), 5.0);
    assert_eq!(DragDirection::Right.clamp_drag(5.0), 0.0);
    assert_eq!(DragDirection::Right.clamp_drag(-5.0), -5.0);
}
