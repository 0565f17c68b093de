use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Pos2, pos2};
use stickerpad::engine::SketchEngine;
use stickerpad::event::CanvasEvent;
use stickerpad::stroke::ToolStyle;
use stickerpad::tool::ToolVariant;

fn pen_engine() -> SketchEngine {
    let mut engine = SketchEngine::new();
    engine.equip_tool(
        ToolVariant::ThinPen,
        ToolStyle::Pen {
            color: Color32::BLACK,
        },
    );
    engine
}

// Records a two-point stroke starting at `from`.
fn draw_segment(engine: &mut SketchEngine, from: Pos2, to: Pos2) {
    engine.on_pointer_down(from);
    engine.on_pointer_move(to);
    engine.on_pointer_up(to);
}

fn first_points(engine: &SketchEngine) -> Vec<Pos2> {
    engine.strokes().iter().map(|s| s.points()[0]).collect()
}

// Subscribes a recorder that collects every emitted event.
fn record_events(engine: &SketchEngine) -> Rc<RefCell<Vec<CanvasEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    engine.subscribe(move |event: &CanvasEvent| {
        sink.borrow_mut().push(*event);
    });
    events
}

#[test]
fn thin_pen_records_down_move_up() {
    let mut engine = pen_engine();

    engine.on_pointer_down(pos2(10.0, 10.0));
    engine.on_pointer_move(pos2(20.0, 10.0));
    engine.on_pointer_up(pos2(20.0, 10.0));

    assert_eq!(engine.strokes().len(), 1);
    let stroke = &engine.strokes()[0];
    assert_eq!(stroke.variant(), ToolVariant::ThinPen);
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);
}

#[test]
fn pen_point_count_matches_distinct_events() {
    let mut engine = pen_engine();

    engine.on_pointer_down(pos2(0.0, 0.0));
    engine.on_pointer_move(pos2(1.0, 0.0));
    engine.on_pointer_move(pos2(2.0, 0.0));
    engine.on_pointer_move(pos2(2.0, 0.0)); // duplicate position
    engine.on_pointer_up(pos2(3.0, 0.0));

    assert_eq!(engine.strokes()[0].points().len(), 4);
}

#[test]
fn sticker_keeps_only_the_last_point() {
    let mut engine = SketchEngine::new();
    engine.equip_tool(
        ToolVariant::Sticker,
        ToolStyle::Sticker {
            glyph: "🧱".to_owned(),
        },
    );

    engine.on_pointer_down(pos2(5.0, 5.0));
    engine.on_pointer_move(pos2(8.0, 8.0));
    engine.on_pointer_up(pos2(8.0, 8.0));

    assert_eq!(engine.strokes().len(), 1);
    assert_eq!(engine.strokes()[0].points(), &[pos2(8.0, 8.0)]);
    assert_eq!(engine.strokes()[0].style().glyph(), "🧱");
}

#[test]
fn undo_redo_restores_order() {
    let mut engine = pen_engine();
    draw_segment(&mut engine, pos2(1.0, 1.0), pos2(9.0, 1.0)); // A
    draw_segment(&mut engine, pos2(2.0, 2.0), pos2(9.0, 2.0)); // B

    engine.undo();
    assert_eq!(first_points(&engine), vec![pos2(1.0, 1.0)]);
    assert!(engine.can_redo());

    engine.undo();
    assert_eq!(engine.strokes().len(), 0);
    assert!(!engine.can_undo());

    // Last undone comes back first: A, then B.
    engine.redo();
    assert_eq!(first_points(&engine), vec![pos2(1.0, 1.0)]);

    engine.redo();
    assert_eq!(first_points(&engine), vec![pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    assert!(!engine.can_redo());
}

#[test]
fn undo_then_redo_is_exact_round_trip() {
    let mut engine = pen_engine();
    draw_segment(&mut engine, pos2(3.0, 4.0), pos2(5.0, 6.0));
    let before: Vec<Vec<Pos2>> = engine
        .strokes()
        .iter()
        .map(|s| s.points().to_vec())
        .collect();

    engine.undo();
    engine.redo();

    let after: Vec<Vec<Pos2>> = engine
        .strokes()
        .iter()
        .map(|s| s.points().to_vec())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn new_stroke_discards_redo_buffer() {
    let mut engine = pen_engine();
    draw_segment(&mut engine, pos2(1.0, 1.0), pos2(9.0, 1.0)); // A
    draw_segment(&mut engine, pos2(2.0, 2.0), pos2(9.0, 2.0)); // B

    engine.undo();
    assert!(engine.can_redo());

    draw_segment(&mut engine, pos2(3.0, 3.0), pos2(9.0, 3.0)); // C

    // B is gone for good; redo is a no-op.
    assert!(!engine.can_redo());
    engine.redo();
    assert_eq!(first_points(&engine), vec![pos2(1.0, 1.0), pos2(3.0, 3.0)]);
}

#[test]
fn clear_is_idempotent() {
    let mut engine = pen_engine();
    draw_segment(&mut engine, pos2(1.0, 1.0), pos2(2.0, 2.0));
    engine.undo();

    engine.clear();
    assert_eq!(engine.strokes().len(), 0);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());

    engine.clear();
    assert_eq!(engine.strokes().len(), 0);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}

#[test]
fn empty_undo_and_redo_still_notify() {
    let mut engine = pen_engine();
    let events = record_events(&engine);

    engine.undo();
    engine.redo();

    assert_eq!(
        *events.borrow(),
        vec![CanvasEvent::DrawingChanged, CanvasEvent::DrawingChanged]
    );
    assert_eq!(engine.strokes().len(), 0);
}

#[test]
fn idle_move_emits_tool_moved_only() {
    let mut engine = pen_engine();
    let events = record_events(&engine);

    engine.on_pointer_move(pos2(40.0, 40.0));
    assert_eq!(*events.borrow(), vec![CanvasEvent::ToolMoved]);
    assert_eq!(engine.strokes().len(), 0);
    assert_eq!(engine.active_tool().anchor(), pos2(40.0, 40.0));
}

#[test]
fn every_recording_mutation_emits_drawing_changed() {
    let mut engine = pen_engine();
    let events = record_events(&engine);

    engine.on_pointer_down(pos2(0.0, 0.0));
    engine.on_pointer_move(pos2(1.0, 1.0));
    engine.on_pointer_move(pos2(2.0, 2.0));
    engine.on_pointer_up(pos2(3.0, 3.0));

    let changed = events
        .borrow()
        .iter()
        .filter(|e| **e == CanvasEvent::DrawingChanged)
        .count();
    assert_eq!(changed, 4);
}

#[test]
fn equip_during_recording_leaves_open_stroke_untouched() {
    let mut engine = pen_engine();

    engine.on_pointer_down(pos2(0.0, 0.0));
    engine.equip_tool(
        ToolVariant::ThickPen,
        ToolStyle::Pen {
            color: Color32::RED,
        },
    );
    engine.on_pointer_move(pos2(5.0, 5.0));
    engine.on_pointer_up(pos2(6.0, 6.0));

    let stroke = &engine.strokes()[0];
    assert_eq!(stroke.variant(), ToolVariant::ThinPen);
    assert_eq!(stroke.style().pen_color(), Color32::BLACK);
    assert_eq!(stroke.points().len(), 3);

    // The next stroke picks up the new tool.
    draw_segment(&mut engine, pos2(7.0, 7.0), pos2(8.0, 8.0));
    assert_eq!(engine.strokes()[1].variant(), ToolVariant::ThickPen);
}

#[test]
fn undo_mid_drag_ends_recording_and_spares_neighbors() {
    let mut engine = pen_engine();
    draw_segment(&mut engine, pos2(1.0, 1.0), pos2(9.0, 1.0)); // closed A
    let committed_len = engine.strokes()[0].points().len();

    // Open a second stroke and undo it while the pointer is still down.
    engine.on_pointer_down(pos2(2.0, 2.0));
    engine.on_pointer_move(pos2(3.0, 3.0));
    engine.undo();

    assert!(!engine.is_pointer_down());
    assert_eq!(engine.strokes().len(), 1);

    // The rest of the drag must not extend the closed stroke below.
    engine.on_pointer_move(pos2(4.0, 4.0));
    engine.on_pointer_up(pos2(5.0, 5.0));
    assert_eq!(engine.strokes().len(), 1);
    assert_eq!(engine.strokes()[0].points().len(), committed_len);

    // The undone open stroke is still redoable, drag points and all.
    engine.redo();
    assert_eq!(
        engine.strokes()[1].points(),
        &[pos2(2.0, 2.0), pos2(3.0, 3.0)]
    );
}

#[test]
fn clear_mid_drag_ends_recording() {
    let mut engine = pen_engine();
    engine.on_pointer_down(pos2(1.0, 1.0));
    engine.on_pointer_move(pos2(2.0, 2.0));

    engine.clear();
    assert!(!engine.is_pointer_down());
    assert_eq!(engine.strokes().len(), 0);

    // The tail of the drag records nothing.
    engine.on_pointer_move(pos2(3.0, 3.0));
    engine.on_pointer_up(pos2(4.0, 4.0));
    assert_eq!(engine.strokes().len(), 0);
}

#[test]
fn pointer_up_while_idle_is_a_no_op() {
    let mut engine = pen_engine();
    let events = record_events(&engine);

    engine.on_pointer_up(pos2(10.0, 10.0));

    assert_eq!(engine.strokes().len(), 0);
    assert!(!engine.is_pointer_down());
    assert_eq!(*events.borrow(), vec![CanvasEvent::ToolMoved]);
}

#[test]
fn committed_stroke_is_never_empty() {
    let mut engine = pen_engine();
    engine.on_pointer_down(pos2(12.0, 34.0));

    // Open stroke already holds the pointer-down point.
    assert_eq!(engine.strokes()[0].points(), &[pos2(12.0, 34.0)]);
    assert!(engine.is_pointer_down());

    engine.on_pointer_up(pos2(12.0, 34.0));
    assert_eq!(engine.strokes()[0].points(), &[pos2(12.0, 34.0)]);
}
