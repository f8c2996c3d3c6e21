use super::*;
use crate::{
    foundation::core::{Point, Rgb},
    scene::builder::AnimationBuilder,
    timeline::motion::MotionCommand,
};

fn slide(start: i64, end: i64, from_x: f64, to_x: f64, rgb: [i32; 3]) -> MotionCommand {
    MotionCommand {
        start_tick: start,
        end_tick: end,
        start_x: from_x,
        end_x: to_x,
        start_y: 5.0,
        end_y: 5.0,
        start_w: 2.0,
        end_w: 2.0,
        start_h: 2.0,
        end_h: 2.0,
        start_rgb: rgb,
        end_rgb: rgb,
    }
}

fn committed() -> AnimationState {
    AnimationBuilder::new()
        .shape("late", "plus")
        .unwrap()
        .shape("early", "rectangle")
        .unwrap()
        .motion("late", slide(4, 8, 0.0, 8.0, [0, 0, 255]))
        .unwrap()
        .motion("early", slide(0, 6, 0.0, 12.0, [255, 0, 0]))
        .unwrap()
        .tempo(5, 7, 48)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn uncommitted_state_is_rejected() {
    let mut state = AnimationState::new();
    state.declare_shape("r", ShapeKind::Rectangle).unwrap();
    assert!(matches!(
        Evaluator::eval_tick(&state, Tick(0)),
        Err(TweenlineError::InvalidState(_))
    ));
}

#[test]
fn frame_lists_shapes_in_declaration_order() {
    let state = committed();
    let frame = Evaluator::eval_tick(&state, Tick(5)).unwrap();

    assert_eq!(frame.tick, Tick(5));
    assert_eq!(frame.tempo, Some(48));
    let names: Vec<_> = frame.shapes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["late", "early"]);
    assert_eq!(frame.shapes[0].kind, ShapeKind::Plus);
    assert_eq!(frame.shapes[0].state.position, Point::new(2.0, 5.0));
    assert_eq!(frame.shapes[1].state.position, Point::new(10.0, 5.0));
    assert_eq!(frame.shapes[1].state.color, Rgb::new(255, 0, 0));
}

#[test]
fn idle_shapes_are_left_out() {
    let state = committed();

    let frame = Evaluator::eval_tick(&state, Tick(2)).unwrap();
    assert_eq!(frame.tempo, None);
    assert_eq!(frame.shapes.len(), 1);
    assert_eq!(frame.shapes[0].name, "early");

    // The last tick of a motion still shows its end state.
    let frame = Evaluator::eval_tick(&state, Tick(8)).unwrap();
    assert_eq!(frame.shapes.len(), 1);
    assert_eq!(frame.shapes[0].state.position, Point::new(8.0, 5.0));

    assert!(Evaluator::eval_tick(&state, Tick(9)).unwrap().shapes.is_empty());
}

#[test]
fn frame_serializes_for_renderers() {
    let frame = Evaluator::eval_tick(&committed(), Tick(6)).unwrap();
    let json = serde_json::to_value(&frame).unwrap();

    assert_eq!(json["tick"], 6);
    assert_eq!(json["tempo"], 48);
    assert_eq!(json["shapes"][0]["kind"], "plus");
    assert_eq!(json["shapes"][1]["name"], "early");
    assert_eq!(json["shapes"][1]["state"]["color"]["r"], 255);
}
