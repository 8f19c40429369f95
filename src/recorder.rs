use crate::stroke::Segment;
use crate::style::Style;
use egui::Pos2;

/// Turns the raw pointer stream into segments.
///
/// Two states: Idle and Drawing, switched by pointer-down/up. While Drawing,
/// each sampled position yields one segment from the rolling cursor to the
/// sample, and the cursor advances. The cursor is reset on pointer-up, so the
/// first segment of every stroke has `begin == None` and is skipped by the
/// renderer.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    drawing: bool,
    cursor: Option<Pos2>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down: Idle -> Drawing. A repeated down while already drawing
    /// is a no-op; the cursor keeps its prior value.
    pub fn begin(&mut self) {
        self.drawing = true;
    }

    /// Pointer-move. Returns the captured segment while drawing, `None` while
    /// idle (moves outside a gesture are ignored).
    pub fn sample(&mut self, pos: Pos2, style: Style) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let segment = Segment::new(self.cursor, pos, style);
        self.cursor = Some(pos);
        Some(segment)
    }

    /// Pointer-up: Drawing -> Idle, cursor reset so the next stroke starts
    /// from a clean slate.
    pub fn finish(&mut self) {
        self.drawing = false;
        self.cursor = None;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
