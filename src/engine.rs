use egui::Pos2;
use log::debug;

use crate::active_tool::ActiveTool;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::stroke::{Stroke, ToolStyle};
use crate::tool::ToolVariant;

/// Owns the drawing history and drives the pointer state machine.
///
/// The engine is the single owner of the display list, the redo buffer and
/// the active-tool record; the UI mutates them only through the methods
/// here. Every operation is total — undo/redo on empty buffers degrade to
/// no-ops (which still redraw) instead of erroring.
///
/// Undo and redo move whole strokes between the display list and the redo
/// buffer; stroke contents are never edited after pointer-up.
#[derive(Debug, Default)]
pub struct SketchEngine {
    /// Committed strokes, insertion order = paint order.
    display_list: Vec<Stroke>,
    /// Strokes removed by undo, last-undone on top.
    redo_buffer: Vec<Stroke>,
    active: ActiveTool,
    pointer_down: bool,
    bus: EventBus,
}

impl SketchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change-notification subscriber. Handlers run
    /// synchronously, in subscription order, after each mutation.
    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.bus.subscribe(Box::new(handler));
    }

    /// Replace the equipped tool. Never touches an in-progress stroke.
    pub fn equip_tool(&mut self, variant: ToolVariant, style: ToolStyle) {
        debug!("equip tool: {}", variant.name());
        self.active.equip(variant, style);
        self.bus.emit(CanvasEvent::ToolMoved);
    }

    /// Pointer pressed: open a new stroke from the equipped tool.
    ///
    /// Committing a stroke invalidates the redo timeline, so the redo
    /// buffer is cleared here. A press that arrives while a stroke is
    /// already open degrades to a move.
    pub fn on_pointer_down(&mut self, point: Pos2) {
        self.active.set_anchor(point);
        if self.pointer_down {
            self.extend_open_stroke(point);
            return;
        }

        self.pointer_down = true;
        let stroke = Stroke::begin(self.active.variant(), self.active.style().clone(), point);
        debug!(
            "stroke opened: {} at ({:.1}, {:.1})",
            stroke.variant().name(),
            point.x,
            point.y
        );
        self.display_list.push(stroke);
        self.redo_buffer.clear();
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    /// Pointer moved. While recording this extends the open stroke; while
    /// idle it only refreshes the preview anchor.
    pub fn on_pointer_move(&mut self, point: Pos2) {
        self.active.set_anchor(point);
        if self.pointer_down {
            self.extend_open_stroke(point);
        } else {
            self.bus.emit(CanvasEvent::ToolMoved);
        }
    }

    /// Pointer released: consume the final point and close the stroke.
    pub fn on_pointer_up(&mut self, point: Pos2) {
        self.active.set_anchor(point);
        if !self.pointer_down {
            self.bus.emit(CanvasEvent::ToolMoved);
            return;
        }

        self.pointer_down = false;
        if let Some(stroke) = self.display_list.last_mut() {
            stroke.consume_point(point);
            debug!("stroke closed: {} points", stroke.points().len());
        }
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    /// Move the newest stroke onto the redo buffer.
    ///
    /// An open stroke can be undone too (e.g. Ctrl+Z mid-drag); recording
    /// ends with it, so later drag points cannot leak into the stroke
    /// below it in the display list.
    pub fn undo(&mut self) {
        if let Some(stroke) = self.display_list.pop() {
            self.pointer_down = false;
            self.redo_buffer.push(stroke);
            debug!("undo: {} strokes remain", self.display_list.len());
        }
        // An empty undo is a no-op that still redraws.
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    /// Restore the most recently undone stroke.
    pub fn redo(&mut self) {
        if let Some(stroke) = self.redo_buffer.pop() {
            self.display_list.push(stroke);
            debug!("redo: {} strokes", self.display_list.len());
        }
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    /// Drop all committed and undone strokes. Idempotent. Any open stroke
    /// is dropped with the rest, ending recording.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} strokes", self.display_list.len());
        self.pointer_down = false;
        self.display_list.clear();
        self.redo_buffer.clear();
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    fn extend_open_stroke(&mut self, point: Pos2) {
        if let Some(stroke) = self.display_list.last_mut() {
            stroke.consume_point(point);
        }
        self.bus.emit(CanvasEvent::DrawingChanged);
    }

    /// Committed strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.display_list
    }

    pub fn active_tool(&self) -> &ActiveTool {
        &self.active
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn can_undo(&self) -> bool {
        !self.display_list.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }
}
