use egui::{Painter, Pos2};
use serde::{Deserialize, Serialize};

use crate::renderer::CanvasTransform;
use crate::stroke::ToolStyle;

mod pen;
mod sticker;

pub use pen::PenTool;
pub use sticker::{STICKER_SIZE, StickerTool};

/// Behavior pair every tool variant supplies.
///
/// All three operations are total: bad input paints nothing rather than
/// erroring, and nothing outside the passed-in painter or point list is
/// touched.
pub trait Tool {
    /// Paint a recorded stroke onto the surface.
    fn render(&self, painter: &Painter, map: &CanvasTransform, points: &[Pos2], style: &ToolStyle);

    /// Absorb a new input point into a stroke's point list.
    fn consume_point(&self, points: &mut Vec<Pos2>, point: Pos2);

    /// Paint the prospective mark at the hover anchor while no button is
    /// held.
    fn preview(&self, painter: &Painter, map: &CanvasTransform, anchor: Pos2, style: &ToolStyle);
}

/// The closed set of tool variants.
///
/// Adding a variant means writing a new [`Tool`] impl and one arm in
/// [`ToolVariant::tool`]; the history engine and render pipeline stay
/// untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolVariant {
    #[default]
    ThinPen,
    ThickPen,
    Sticker,
}

impl ToolVariant {
    /// Look up the behavior pair for this variant.
    pub fn tool(self) -> &'static dyn Tool {
        match self {
            Self::ThinPen => &PenTool::THIN,
            Self::ThickPen => &PenTool::THICK,
            Self::Sticker => &StickerTool,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ThinPen => "Thin pen",
            Self::ThickPen => "Thick pen",
            Self::Sticker => "Sticker",
        }
    }
}
