use crate::export::DiskSaveTarget;
use crate::sketch::Sketch;
use crate::input::PointerTracker;
use crate::style::{Style, DEFAULT_WIDTH};
use crate::surface::{RasterSurface, Surface};
use eframe::egui;
use egui::{Color32, TextureHandle, TextureOptions};

/// Pen settings that survive restarts. Drawing content itself is never
/// persisted, only the tool configuration.
#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PenSettings {
    /// Straight-alpha sRGBA.
    color: [u8; 4],
    width: f32,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: [0, 128, 0, 255],
            width: DEFAULT_WIDTH,
        }
    }
}

impl PenSettings {
    fn color32(&self) -> Color32 {
        let [r, g, b, a] = self.color;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    fn style(&self) -> Style {
        Style {
            color: self.color32(),
            width: self.width,
            ..Style::default()
        }
    }
}

/// The UI shell around the sketch engine: toolbar, canvas panel, texture
/// blitting and settings persistence. All drawing semantics live in
/// [`Sketch`]; this is wiring.
pub struct SketchApp {
    sketch: Sketch<RasterSurface>,
    tracker: PointerTracker,
    settings: PenSettings,
    save_target: DiskSaveTarget,
    // Skip keeping GPU state across frames beyond the blitted surface texture
    texture: Option<TextureHandle>,
    export_status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: PenSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // The surface is rebuilt at the real canvas size on the first frame.
        let sketch = Sketch::with_style(RasterSurface::new(1, 1, 1.0), settings.style());

        Self {
            sketch,
            tracker: PointerTracker::new(),
            settings,
            save_target: DiskSaveTarget::new("."),
            texture: None,
            export_status: None,
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Color:");
            let mut color = self.settings.color32();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.settings.color = color.to_srgba_unmultiplied();
                self.sketch.set_color(Some(color));
            }

            ui.label("Width:");
            if ui
                .add(egui::Slider::new(&mut self.settings.width, 1.0..=50.0))
                .changed()
            {
                self.sketch.set_width(Some(self.settings.width));
            }

            ui.separator();

            if ui.button("⌫ Eraser").clicked() {
                self.sketch.use_eraser();
            }
            if ui
                .add_enabled(self.sketch.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                self.sketch.undo();
            }
            if ui.button("Clear").clicked() {
                self.sketch.clear();
            }
            if ui.button("💾 Save PNG").clicked() {
                self.export_status = Some(match self.sketch.export(&mut self.save_target) {
                    Ok(path) => format!("saved {}", path.display()),
                    Err(err) => {
                        log::warn!("export failed: {err}");
                        format!("export failed: {err}")
                    }
                });
            }
            if let Some(status) = &self.export_status {
                ui.separator();
                ui.label(status);
            }
        });
    }

    fn canvas(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::drag());
        let rect = response.rect;

        // DPI-aware sizing: one surface pixel per physical pixel.
        let ppp = ctx.pixels_per_point();
        let want = [
            (rect.width() * ppp).round().max(1.0) as u32,
            (rect.height() * ppp).round().max(1.0) as u32,
        ];
        let surface = self.sketch.surface();
        if [surface.width(), surface.height()] != want || surface.scale() != ppp {
            log::debug!("rebuilding surface at {}x{} (scale {ppp})", want[0], want[1]);
            self.sketch
                .replace_surface(RasterSurface::new(want[0], want[1], ppp));
        }

        for event in self.tracker.events(&response) {
            self.sketch.handle_pointer(event);
        }

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let pixels = self.sketch.surface().pixels();
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [pixels.width() as usize, pixels.height() as usize],
            pixels.as_raw(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            slot => {
                *slot = Some(ctx.load_texture("sketch_surface", image, TextureOptions::NEAREST));
            }
        }
        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ctx, ui);
        });
    }
}
