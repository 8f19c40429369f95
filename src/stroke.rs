use crate::style::Style;
use egui::Pos2;
use std::sync::Arc;

/// One straight line draw command, tagged with the style active when it was
/// captured. A segment whose `begin` is `None` is the first sample of a
/// stroke: there is no prior point yet, so it is never rasterized, but it is
/// still recorded for positional bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub begin: Option<Pos2>,
    pub end: Pos2,
    pub style: Style,
}

impl Segment {
    pub fn new(begin: Option<Pos2>, end: Pos2, style: Style) -> Self {
        Self { begin, end, style }
    }

    /// A segment without a begin point is a placeholder and must not reach
    /// the draw path.
    pub fn is_renderable(&self) -> bool {
        self.begin.is_some()
    }
}

// Immutable, sealed stroke for sharing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    segments: Vec<Segment>,
}

// Mutable stroke buffer, append-only while a gesture is in progress
#[derive(Debug, Default)]
pub struct MutableStroke {
    segments: Vec<Segment>,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn new_ref(segments: Vec<Segment>) -> StrokeRef {
        Arc::new(Self::new(segments))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl MutableStroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next captured segment. Segments arrive in strict
    /// chronological order and are never reordered.
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Freeze the buffer into an immutable stroke, leaving this buffer empty
    /// and ready for the next gesture.
    pub fn seal(&mut self) -> StrokeRef {
        Stroke::new_ref(std::mem::take(&mut self.segments))
    }
}
