use egui::{Color32, Painter, Pos2};

use crate::renderer::CanvasTransform;
use crate::stroke::ToolStyle;
use crate::tool::ToolVariant;

/// The currently equipped tool plus the last known pointer position.
///
/// Independent of committed history: equipping a new tool replaces the
/// whole record and never touches an in-progress stroke (the stroke took a
/// copy of variant and style when it was opened).
#[derive(Clone, Debug)]
pub struct ActiveTool {
    variant: ToolVariant,
    style: ToolStyle,
    anchor: Pos2,
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self::new(
            ToolVariant::ThinPen,
            ToolStyle::Pen {
                color: Color32::BLACK,
            },
        )
    }
}

impl ActiveTool {
    pub fn new(variant: ToolVariant, style: ToolStyle) -> Self {
        Self {
            variant,
            style,
            anchor: Pos2::ZERO,
        }
    }

    /// Replace the equipped variant and style atomically. The anchor keeps
    /// tracking the pointer across swaps.
    pub fn equip(&mut self, variant: ToolVariant, style: ToolStyle) {
        self.variant = variant;
        self.style = style;
    }

    pub fn set_anchor(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub fn variant(&self) -> ToolVariant {
        self.variant
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    /// Paint the prospective mark at the anchor. Called only while the
    /// pointer is not pressed.
    pub fn render_preview(&self, painter: &Painter, map: &CanvasTransform) {
        self.variant
            .tool()
            .preview(painter, map, self.anchor, &self.style);
    }
}
