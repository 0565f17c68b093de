use egui::{Painter, Pos2, Shape, Stroke as EguiStroke};

use crate::renderer::CanvasTransform;
use crate::stroke::ToolStyle;
use crate::tool::Tool;

/// Freehand pen. The two pen variants share this implementation and differ
/// only in their fixed logical line width.
pub struct PenTool {
    width: f32,
}

impl PenTool {
    pub const THIN: Self = Self { width: 2.0 };
    pub const THICK: Self = Self { width: 6.0 };

    /// Line width in logical canvas units.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Tool for PenTool {
    fn render(&self, painter: &Painter, map: &CanvasTransform, points: &[Pos2], style: &ToolStyle) {
        // A single point has no segment to draw.
        if points.len() < 2 {
            return;
        }

        let screen_points: Vec<Pos2> = points.iter().map(|p| map.to_screen(*p)).collect();
        painter.add(Shape::line(
            screen_points,
            EguiStroke::new(map.scale(self.width), style.pen_color()),
        ));
    }

    fn consume_point(&self, points: &mut Vec<Pos2>, point: Pos2) {
        // Repeated positions (e.g. pointer-up on the last moved-to point)
        // add nothing to the path.
        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    fn preview(&self, painter: &Painter, map: &CanvasTransform, anchor: Pos2, style: &ToolStyle) {
        // The nib: a filled dot the size the next segment would be.
        painter.circle_filled(
            map.to_screen(anchor),
            (map.scale(self.width) / 2.0).max(1.0),
            style.pen_color(),
        );
    }
}
