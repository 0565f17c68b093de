use egui::{Color32, Sense, Vec2};
use log::info;

use crate::engine::SketchEngine;
use crate::error::{StyleError, validate_glyph};
use crate::event::CanvasEvent;
use crate::input::{CanvasAction, InputRouter};
use crate::renderer::{CANVAS_SIZE, Renderer};
use crate::stroke::ToolStyle;
use crate::tool::ToolVariant;

const DEFAULT_STICKERS: [&str; 3] = ["🧱", "🌟", "🦖"];

/// Export preview renders the display list at 4x the logical canvas.
const EXPORT_SIZE: f32 = CANVAS_SIZE * 4.0;

/// The eframe shell around the sketch engine.
///
/// Only the equipped-tool preference survives a restart; the drawing itself
/// is in-memory by design and is gone when the process ends.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    equipped_variant: ToolVariant,
    pen_color: Color32,
    sticker_glyph: String,

    #[serde(skip)]
    engine: SketchEngine,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputRouter,
    #[serde(skip)]
    custom_glyph: String,
    #[serde(skip)]
    glyph_error: Option<StyleError>,
    #[serde(skip)]
    show_export: bool,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            equipped_variant: ToolVariant::ThinPen,
            pen_color: Color32::BLACK,
            sticker_glyph: DEFAULT_STICKERS[0].to_owned(),
            engine: SketchEngine::new(),
            renderer: Renderer::new(),
            input: InputRouter::new(),
            custom_glyph: String::new(),
            glyph_error: None,
            show_export: false,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let style = match app.equipped_variant {
            ToolVariant::Sticker => ToolStyle::Sticker {
                glyph: app.sticker_glyph.clone(),
            },
            ToolVariant::ThinPen | ToolVariant::ThickPen => ToolStyle::Pen {
                color: app.pen_color,
            },
        };
        app.engine.equip_tool(app.equipped_variant, style);

        // The render pipeline's hook into change notifications: any
        // mutation schedules a repaint, and the next frame replays the
        // display list.
        let egui_ctx = cc.egui_ctx.clone();
        app.engine.subscribe(move |_event: &CanvasEvent| {
            egui_ctx.request_repaint();
        });

        info!("sketchpad ready");
        app
    }

    fn equip_pen(&mut self, variant: ToolVariant) {
        self.engine.equip_tool(
            variant,
            ToolStyle::Pen {
                color: self.pen_color,
            },
        );
    }

    fn equip_sticker(&mut self, glyph: String) {
        self.sticker_glyph = glyph.clone();
        self.engine
            .equip_tool(ToolVariant::Sticker, ToolStyle::Sticker { glyph });
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.engine.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                self.engine.undo();
            }
            if ui
                .add_enabled(self.engine.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                self.engine.redo();
            }
            if ui.button("🗑 Clear").clicked() {
                self.engine.clear();
            }
            ui.separator();
            ui.toggle_value(&mut self.show_export, "🖼 Export preview");
        });
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        let variant = self.engine.active_tool().variant();
        let active_glyph = self.engine.active_tool().style().glyph().to_owned();

        ui.heading("Tools");
        ui.separator();

        for pen in [ToolVariant::ThinPen, ToolVariant::ThickPen] {
            if ui.selectable_label(variant == pen, pen.name()).clicked() {
                self.equip_pen(pen);
            }
        }

        ui.horizontal(|ui| {
            ui.label("Color:");
            let changed = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut self.pen_color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed();
            // Re-equip so the new color takes effect on the next stroke.
            if changed && variant != ToolVariant::Sticker {
                self.equip_pen(variant);
            }
        });

        ui.separator();
        ui.label("Stickers:");
        ui.horizontal(|ui| {
            for glyph in DEFAULT_STICKERS {
                let selected = variant == ToolVariant::Sticker && active_glyph == glyph;
                if ui.selectable_label(selected, glyph).clicked() {
                    self.equip_sticker(glyph.to_owned());
                }
            }
        });

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.custom_glyph);
            if ui.button("Add").clicked() {
                match validate_glyph(&self.custom_glyph) {
                    Ok(()) => {
                        self.glyph_error = None;
                        let glyph = std::mem::take(&mut self.custom_glyph);
                        self.equip_sticker(glyph);
                    }
                    Err(err) => self.glyph_error = Some(err),
                }
            }
        });
        if let Some(err) = &self.glyph_error {
            ui.colored_label(Color32::RED, err.to_string());
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let side = ui.available_size().min_elem().max(1.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::drag());
        let canvas_rect = response.rect;

        for action in self.input.process_input(ui.ctx(), canvas_rect) {
            match action {
                CanvasAction::PointerDown(p) => self.engine.on_pointer_down(p),
                CanvasAction::PointerMove(p) => self.engine.on_pointer_move(p),
                CanvasAction::PointerUp(p) => self.engine.on_pointer_up(p),
                CanvasAction::Undo => self.engine.undo(),
                CanvasAction::Redo => self.engine.redo(),
            }
        }

        self.renderer.render_frame(&painter, canvas_rect, &self.engine);
    }

    fn export_window(&mut self, ctx: &egui::Context) {
        let renderer = &self.renderer;
        let engine = &self.engine;
        egui::Window::new("Export preview")
            .open(&mut self.show_export)
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let (response, painter) =
                        ui.allocate_painter(Vec2::splat(EXPORT_SIZE), Sense::hover());
                    // Opaque background at export resolution, then a
                    // scaled replay of the same display list.
                    painter.rect_filled(response.rect, 0.0, renderer.background());
                    renderer.replay(&painter, response.rect, engine);
                });
            });
    }
}

impl eframe::App for SketchApp {
    /// Persist the equipped-tool preference, nothing else.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.equipped_variant = self.engine.active_tool().variant();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::SidePanel::left("tools")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                self.tools_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });

        if self.show_export {
            self.export_window(ctx);
        }
    }
}
