use crate::export::{self, ExportError, SaveTarget};
use crate::history::History;
use crate::input::PointerEvent;
use crate::recorder::StrokeRecorder;
use crate::renderer::Renderer;
use crate::style::{Style, StyleController};
use crate::surface::Surface;
use egui::Color32;
use std::path::PathBuf;

/// The sketch engine: owns the surface, the stroke history, the recorder and
/// the active style, and exposes the command surface the UI shell wires its
/// buttons to. Everything runs synchronously on the caller's thread.
pub struct Sketch<S: Surface> {
    surface: S,
    history: History,
    recorder: StrokeRecorder,
    styles: StyleController,
    renderer: Renderer,
    export_in_flight: bool,
}

impl<S: Surface> Sketch<S> {
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, Style::default())
    }

    pub fn with_style(surface: S, style: Style) -> Self {
        Self {
            surface,
            history: History::new(),
            recorder: StrokeRecorder::new(),
            styles: StyleController::new(style),
            renderer: Renderer::new(),
            export_in_flight: false,
        }
    }

    /// Feed one pointer event through the recorder. Captured segments are
    /// appended to the in-progress stroke and drawn immediately; pointer-up
    /// seals the stroke into history.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed => self.recorder.begin(),
            PointerEvent::Moved(pos) => {
                if let Some(segment) = self.recorder.sample(pos, self.styles.active()) {
                    self.history.push_segment(segment);
                    self.renderer.draw_segment(&mut self.surface, &segment);
                }
            }
            PointerEvent::Released => {
                // A stray release without a preceding press is ignored.
                if self.recorder.is_drawing() {
                    self.recorder.finish();
                    let stroke = self.history.seal_current();
                    log::debug!("sealed stroke with {} segments", stroke.segments().len());
                }
            }
        }
    }

    /// Pop the most recent stroke and rebuild the surface from the rest.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_last() {
            Some(stroke) => {
                log::debug!("undo: removing stroke with {} segments", stroke.segments().len());
                self.renderer.redraw(&mut self.surface, &self.history);
                true
            }
            None => {
                log::debug!("undo requested with empty history, nothing to do");
                false
            }
        }
    }

    /// Erase the surface. History is untouched, so a later undo redraws the
    /// remaining strokes.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn set_color(&mut self, color: Option<Color32>) {
        self.styles.set_color(color);
    }

    pub fn set_width(&mut self, width: Option<f32>) {
        self.styles.set_width(width);
    }

    pub fn use_eraser(&mut self) {
        self.styles.use_eraser();
    }

    /// Encode the surface as PNG and hand it to the save collaborator.
    /// One export at a time; collaborator failure or cancellation comes back
    /// as `ExportError::Aborted`, never swallowed.
    pub fn export(&mut self, saver: &mut dyn SaveTarget) -> Result<PathBuf, ExportError> {
        if self.export_in_flight {
            return Err(ExportError::Busy);
        }
        self.export_in_flight = true;
        let result = export::encode_png(&self.surface)
            .map_err(ExportError::from)
            .and_then(|png| {
                log::info!("exporting {} byte {}", png.len(), export::PNG_MIME);
                saver
                    .save(&png, export::SUGGESTED_NAME, export::PNG_MIME)
                    .map_err(ExportError::from)
            });
        self.export_in_flight = false;
        result
    }

    /// Swap in a freshly sized surface (window resize, DPI change) and
    /// replay everything onto it, including the in-progress stroke.
    pub fn replace_surface(&mut self, surface: S) {
        self.surface = surface;
        self.renderer.redraw(&mut self.surface, &self.history);
        for segment in self.history.current().segments() {
            self.renderer.draw_segment(&mut self.surface, segment);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn active_style(&self) -> Style {
        self.styles.active()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn is_drawing(&self) -> bool {
        self.recorder.is_drawing()
    }
}
