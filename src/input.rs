use egui::{Pos2, Response};

/// Pointer events in canvas-local logical coordinates, with the same
/// three-phase semantics as the platform pointer stream. Mouse-only
/// platforms feed the identical shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down over the canvas.
    Pressed,
    /// Pointer moved while the button is held.
    Moved(Pos2),
    /// Primary button was released.
    Released,
}

/// Translates egui's per-frame canvas response into ordered `PointerEvent`s.
///
/// egui reports at most one pointer position per frame, so a fast gesture
/// arrives as a sparse polyline. Positions that did not change since the
/// last frame are dropped rather than emitted as zero-length moves.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame, in press -> move -> release order.
    pub fn events(&mut self, response: &Response) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if response.drag_started() {
            events.push(PointerEvent::Pressed);
        }

        if response.dragged() || response.drag_stopped() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = (pos - response.rect.min).to_pos2();
                if self.last_pos != Some(local) {
                    self.last_pos = Some(local);
                    events.push(PointerEvent::Moved(local));
                }
            }
        }

        if response.drag_stopped() {
            self.last_pos = None;
            events.push(PointerEvent::Released);
        }

        events
    }
}
