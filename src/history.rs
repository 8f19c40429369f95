use crate::stroke::{MutableStroke, Segment, StrokeRef};

/// The ordered log of sealed strokes plus the single in-progress buffer.
///
/// Insertion order is chronological order is replay order. The in-progress
/// buffer only fills while a gesture is active and is flushed into the log
/// on every pointer-up, so replaying `strokes()` reconstructs everything
/// that has been committed to the surface.
#[derive(Debug, Default)]
pub struct History {
    strokes: Vec<StrokeRef>,
    current: MutableStroke,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured segment to the in-progress stroke.
    pub fn push_segment(&mut self, segment: Segment) {
        self.current.push_segment(segment);
    }

    /// Seal the in-progress stroke into the log and start a fresh buffer.
    /// One sealed stroke per completed gesture, even if no segments were
    /// captured in between.
    pub fn seal_current(&mut self) -> StrokeRef {
        let stroke = self.current.seal();
        self.strokes.push(stroke.clone());
        stroke
    }

    /// Remove and return the most recently sealed stroke, if any.
    pub fn pop_last(&mut self) -> Option<StrokeRef> {
        self.strokes.pop()
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn current(&self) -> &MutableStroke {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Returns true if there is a stroke that can be undone
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }
}
