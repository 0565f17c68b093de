use egui::{Context, Key, Pos2, Rect};

use crate::renderer::CanvasTransform;

/// One engine-facing action distilled from raw egui input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp(Pos2),
    Undo,
    Redo,
}

/// Converts raw egui input into [`CanvasAction`]s with positions already
/// mapped into logical canvas coordinates.
///
/// The engine itself is coordinate- and widget-agnostic; everything
/// screen-specific (canvas bounds, pixel-to-logical mapping, keyboard
/// shortcuts) stops here.
#[derive(Debug, Default)]
pub struct InputRouter {
    last_pointer_pos: Option<Pos2>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distill this frame's input over `canvas_rect` into engine actions.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<CanvasAction> {
        let map = CanvasTransform::fit(canvas_rect);
        let mut actions = Vec::new();

        ctx.input(|input| {
            // Ctrl+Z / Ctrl+Shift+Z / Ctrl+Y.
            if input.modifiers.command && input.key_pressed(Key::Z) {
                actions.push(if input.modifiers.shift {
                    CanvasAction::Redo
                } else {
                    CanvasAction::Undo
                });
            }
            if input.modifiers.command && input.key_pressed(Key::Y) {
                actions.push(CanvasAction::Redo);
            }

            let pos = input
                .pointer
                .hover_pos()
                .or_else(|| input.pointer.latest_pos());
            let Some(pos) = pos else {
                self.last_pointer_pos = None;
                return;
            };

            let logical = map.from_screen(pos);
            if input.pointer.primary_pressed() && canvas_rect.contains(pos) {
                actions.push(CanvasAction::PointerDown(logical));
            } else if input.pointer.primary_released() {
                // Close an open stroke even when the drag ended off-canvas.
                actions.push(CanvasAction::PointerUp(logical));
            } else if Some(pos) != self.last_pointer_pos
                && (canvas_rect.contains(pos) || input.pointer.primary_down())
            {
                actions.push(CanvasAction::PointerMove(logical));
            }
            self.last_pointer_pos = Some(pos);
        });

        actions
    }
}
