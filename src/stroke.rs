use egui::{Color32, Painter, Pos2};
use serde::{Deserialize, Serialize};

use crate::renderer::CanvasTransform;
use crate::tool::ToolVariant;

/// Tool-specific styling recorded alongside a stroke.
///
/// Pens carry a color; stickers carry the glyph they stamp. The accessors
/// are total: asking a sticker style for a pen color (or vice versa) falls
/// back to a default instead of panicking, so render code never fails on a
/// mismatched pairing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ToolStyle {
    Pen { color: Color32 },
    Sticker { glyph: String },
}

impl ToolStyle {
    pub fn pen_color(&self) -> Color32 {
        match self {
            Self::Pen { color } => *color,
            Self::Sticker { .. } => Color32::BLACK,
        }
    }

    pub fn glyph(&self) -> &str {
        match self {
            Self::Sticker { glyph } => glyph,
            Self::Pen { .. } => "",
        }
    }
}

/// One committed drawing action: a pen path or a placed sticker.
///
/// A stroke is created on pointer-down with its first point already
/// consumed, so it is never empty while it sits in the display list. How
/// later points are absorbed (appended for pens, anchor replaced for
/// stickers) is decided by the variant that produced it.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Pos2>,
    variant: ToolVariant,
    style: ToolStyle,
}

impl Stroke {
    /// Opens a new stroke and consumes the pointer-down position.
    pub fn begin(variant: ToolVariant, style: ToolStyle, first_point: Pos2) -> Self {
        let mut stroke = Self {
            points: Vec::new(),
            variant,
            style,
        };
        stroke.consume_point(first_point);
        stroke
    }

    /// Absorb a new input point using the originating tool's rule.
    pub fn consume_point(&mut self, point: Pos2) {
        self.variant.tool().consume_point(&mut self.points, point);
    }

    /// Paint this stroke through the originating tool's render rule.
    pub fn render(&self, painter: &Painter, map: &CanvasTransform) {
        self.variant
            .tool()
            .render(painter, map, &self.points, &self.style);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn variant(&self) -> ToolVariant {
        self.variant
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }
}
