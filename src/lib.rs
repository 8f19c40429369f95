#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod export;
pub mod history;
pub mod input;
pub mod recorder;
pub mod renderer;
pub mod sketch;
pub mod stroke;
pub mod style;
pub mod surface;

pub use app::SketchApp;
pub use export::{DiskSaveTarget, ExportError, SaveError, SaveTarget};
pub use history::History;
pub use input::{PointerEvent, PointerTracker};
pub use recorder::StrokeRecorder;
pub use renderer::Renderer;
pub use sketch::Sketch;
pub use stroke::{MutableStroke, Segment, Stroke, StrokeRef};
pub use style::{DrawKind, EraserConfig, Style, StyleController};
pub use surface::{RasterSurface, Surface};
