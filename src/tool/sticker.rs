use egui::{Align2, Color32, FontId, Painter, Pos2};

use crate::renderer::CanvasTransform;
use crate::stroke::ToolStyle;
use crate::tool::Tool;

/// Glyph size in logical canvas units.
pub const STICKER_SIZE: f32 = 24.0;

/// Stamps a single glyph at one anchor point. Dragging moves the anchor
/// rather than leaving a trail, so the point list never grows past one.
pub struct StickerTool;

impl Tool for StickerTool {
    fn render(&self, painter: &Painter, map: &CanvasTransform, points: &[Pos2], style: &ToolStyle) {
        let Some(anchor) = points.first() else {
            return;
        };
        painter.text(
            map.to_screen(*anchor),
            Align2::CENTER_CENTER,
            style.glyph(),
            FontId::proportional(map.scale(STICKER_SIZE)),
            Color32::BLACK,
        );
    }

    fn consume_point(&self, points: &mut Vec<Pos2>, point: Pos2) {
        // Last point wins.
        points.clear();
        points.push(point);
    }

    fn preview(&self, painter: &Painter, map: &CanvasTransform, anchor: Pos2, style: &ToolStyle) {
        self.render(painter, map, &[anchor], style);
    }
}
