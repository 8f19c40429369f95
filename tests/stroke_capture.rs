use egui::{pos2, Pos2};
use sketchpad::{PointerEvent, RasterSurface, Sketch, Style, Surface};

// Records every renderable line handed to it instead of rasterizing.
struct CountingSurface {
    lines: Vec<(Pos2, Pos2)>,
    clears: usize,
}

impl CountingSurface {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            clears: 0,
        }
    }
}

impl Surface for CountingSurface {
    fn width(&self) -> u32 {
        64
    }

    fn height(&self) -> u32 {
        64
    }

    fn line(&mut self, from: Pos2, to: Pos2, _style: &Style) {
        self.lines.push((from, to));
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.lines.clear();
    }

    fn to_rgba(&self) -> image::RgbaImage {
        image::RgbaImage::new(self.width(), self.height())
    }
}

fn gesture<S: Surface>(sketch: &mut Sketch<S>, points: &[Pos2]) {
    sketch.handle_pointer(PointerEvent::Pressed);
    for &pos in points {
        sketch.handle_pointer(PointerEvent::Moved(pos));
    }
    sketch.handle_pointer(PointerEvent::Released);
}

#[test]
fn gesture_records_one_stroke_with_segments_in_capture_order() {
    let mut sketch = Sketch::new(RasterSurface::new(64, 64, 1.0));

    // Down at (10,10), samples at (10,10), (20,10), (20,20), up.
    gesture(
        &mut sketch,
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)],
    );

    assert_eq!(sketch.history().len(), 1);
    let segments = sketch.history().strokes()[0].segments().to_vec();
    assert_eq!(segments.len(), 3);

    // First sample has no prior point: recorded, but a no-render placeholder.
    assert_eq!(segments[0].begin, None);
    assert!(!segments[0].is_renderable());
    assert_eq!(segments[0].end, pos2(10.0, 10.0));

    assert_eq!(segments[1].begin, Some(pos2(10.0, 10.0)));
    assert_eq!(segments[1].end, pos2(20.0, 10.0));
    assert_eq!(segments[2].begin, Some(pos2(20.0, 10.0)));
    assert_eq!(segments[2].end, pos2(20.0, 20.0));
}

#[test]
fn only_renderable_segments_reach_the_surface() {
    let mut sketch = Sketch::new(CountingSurface::new());
    gesture(
        &mut sketch,
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)],
    );

    // Three segments captured, two line draws: the placeholder is skipped.
    let lines = &sketch.surface().lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], (pos2(10.0, 10.0), pos2(20.0, 10.0)));
    assert_eq!(lines[1], (pos2(20.0, 10.0), pos2(20.0, 20.0)));
}

#[test]
fn moves_outside_a_gesture_are_ignored() {
    let mut sketch = Sketch::new(CountingSurface::new());

    sketch.handle_pointer(PointerEvent::Moved(pos2(5.0, 5.0)));
    assert!(sketch.history().is_empty());
    assert!(sketch.history().current().is_empty());
    assert!(sketch.surface().lines.is_empty());

    // A stray release without a press seals nothing.
    sketch.handle_pointer(PointerEvent::Released);
    assert!(sketch.history().is_empty());
}

#[test]
fn each_down_up_cycle_seals_exactly_one_stroke() {
    let mut sketch = Sketch::new(RasterSurface::new(32, 32, 1.0));

    gesture(&mut sketch, &[pos2(1.0, 1.0), pos2(5.0, 5.0)]);
    gesture(&mut sketch, &[pos2(10.0, 1.0), pos2(15.0, 5.0)]);
    // Down-up with no movement still counts as a gesture.
    gesture(&mut sketch, &[]);

    assert_eq!(sketch.history().len(), 3);
    assert!(sketch.history().strokes()[2].is_empty());
    assert!(sketch.history().current().is_empty());
    assert!(!sketch.is_drawing());
}

#[test]
fn repeated_presses_do_not_split_the_stroke() {
    let mut sketch = Sketch::new(RasterSurface::new(32, 32, 1.0));

    sketch.handle_pointer(PointerEvent::Pressed);
    sketch.handle_pointer(PointerEvent::Moved(pos2(2.0, 2.0)));
    sketch.handle_pointer(PointerEvent::Pressed); // re-entrant, no-op
    sketch.handle_pointer(PointerEvent::Moved(pos2(8.0, 8.0)));
    sketch.handle_pointer(PointerEvent::Released);

    assert_eq!(sketch.history().len(), 1);
    let segments = sketch.history().strokes()[0].segments();
    assert_eq!(segments.len(), 2);
    // The cursor survived the redundant press.
    assert_eq!(segments[1].begin, Some(pos2(2.0, 2.0)));
}

#[test]
fn eraser_style_is_stamped_into_captured_segments() {
    let mut sketch = Sketch::new(RasterSurface::new(32, 32, 1.0));
    let pen = sketch.active_style();

    sketch.use_eraser();
    let eraser = sketch.active_style();
    assert_ne!(eraser, pen);
    assert_eq!(eraser.width, 10.0);

    gesture(&mut sketch, &[pos2(3.0, 3.0), pos2(12.0, 12.0)]);

    for segment in sketch.history().strokes()[0].segments() {
        assert_eq!(segment.style, eraser);
    }
}

#[test]
fn style_changes_never_touch_recorded_segments() {
    let mut sketch = Sketch::new(RasterSurface::new(32, 32, 1.0));
    let pen = sketch.active_style();
    gesture(&mut sketch, &[pos2(3.0, 3.0), pos2(12.0, 12.0)]);

    sketch.set_color(Some(egui::Color32::BLUE));
    sketch.set_width(Some(20.0));

    for segment in sketch.history().strokes()[0].segments() {
        assert_eq!(segment.style, pen);
    }
}
