use egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::engine::SketchEngine;

/// Side length of the logical canvas. Strokes are recorded in this space;
/// viewports of any size map onto it with a uniform scale.
pub const CANVAS_SIZE: f32 = 256.0;

/// Uniform mapping between logical canvas coordinates and a screen
/// viewport. The same transform serves the live view and scaled export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    scale: f32,
    offset: Vec2,
}

impl CanvasTransform {
    /// Fit the logical canvas into `viewport`, anchored at its top-left.
    pub fn fit(viewport: Rect) -> Self {
        Self {
            scale: viewport.width().min(viewport.height()) / CANVAS_SIZE,
            offset: viewport.min.to_vec2(),
        }
    }

    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        (point.to_vec2() * self.scale + self.offset).to_pos2()
    }

    pub fn from_screen(&self, point: Pos2) -> Pos2 {
        ((point.to_vec2() - self.offset) / self.scale).to_pos2()
    }

    /// Scale a logical length (line width, glyph size) to screen units.
    pub fn scale(&self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Replays the display list onto a painter. Every frame is drawn from
/// scratch: background, committed strokes in paint order, then the
/// active-tool preview when no button is held. Stroke counts are small, so
/// no incremental diffing is attempted.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Full frame: background, display list, preview.
    pub fn render_frame(&self, painter: &Painter, viewport: Rect, engine: &SketchEngine) {
        painter.rect_filled(viewport, 0.0, self.background);
        self.replay(painter, viewport, engine);

        // The preview is the cursor's prospective mark; while a stroke is
        // open the mark is already part of the drawing.
        if !engine.is_pointer_down() {
            let map = CanvasTransform::fit(viewport);
            engine.active_tool().render_preview(painter, &map);
        }
    }

    /// Display list only, no background or preview. Export callers paint
    /// their own opaque background and pass a viewport at the target
    /// resolution.
    pub fn replay(&self, painter: &Painter, viewport: Rect, engine: &SketchEngine) {
        let map = CanvasTransform::fit(viewport);
        for stroke in engine.strokes() {
            stroke.render(painter, &map);
        }
    }
}
