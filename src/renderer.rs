use crate::history::History;
use crate::stroke::{Segment, Stroke};
use crate::surface::Surface;

/// Stateless replay of segments and strokes onto a surface.
///
/// Every draw uses the segment's own captured style, never a live one, so a
/// replayed stroke always looks exactly like it did when drawn.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one segment. A segment with no begin point is the placeholder
    /// first sample of a stroke and is skipped.
    pub fn draw_segment(&self, surface: &mut dyn Surface, segment: &Segment) {
        if let Some(begin) = segment.begin {
            surface.line(begin, segment.end, &segment.style);
        }
    }

    /// Draw a whole stroke, segments in capture order.
    pub fn draw_stroke(&self, surface: &mut dyn Surface, stroke: &Stroke) {
        for segment in stroke.segments() {
            self.draw_segment(surface, segment);
        }
    }

    /// Erase the surface and replay every sealed stroke in chronological
    /// order. Cost is proportional to the total segment count.
    pub fn redraw(&self, surface: &mut dyn Surface, history: &History) {
        surface.clear();
        for stroke in history.strokes() {
            self.draw_stroke(surface, stroke);
        }
    }
}
