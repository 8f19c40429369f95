use egui::Color32;

/// Default pen color ("green").
pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
/// Default pen width in points.
pub const DEFAULT_WIDTH: f32 = 3.0;

/// Reserved extension point for future stroke shapes (straight line,
/// rectangle, ...). Nothing reads it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawKind {
    #[default]
    Freehand,
}

/// Immutable drawing style, copied into every segment at capture time.
/// Later controller changes never touch segments already recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color32,
    pub width: f32,
    pub kind: DrawKind,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_WIDTH,
            kind: DrawKind::Freehand,
        }
    }
}

/// Fixed eraser preset, distinct from the active style. Switching to the
/// eraser derives a fresh style from it rather than mutating it in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserConfig {
    /// Alpha of the derived eraser color.
    pub opacity: f32,
    /// Line width of the derived eraser style.
    pub size: f32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            opacity: 0.9,
            size: 10.0,
        }
    }
}

impl EraserConfig {
    /// Derive the eraser stroke style: a translucent dark color at the
    /// preset width.
    pub fn to_style(&self, kind: DrawKind) -> Style {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Style {
            color: Color32::from_rgba_unmultiplied(36, 36, 36, alpha),
            width: self.size,
            kind,
        }
    }
}

/// Owns the active style and the eraser preset. All mutation of the current
/// drawing appearance goes through here; nothing else is touched.
#[derive(Debug, Clone, Default)]
pub struct StyleController {
    active: Style,
    eraser: EraserConfig,
}

impl StyleController {
    pub fn new(initial: Style) -> Self {
        Self {
            active: initial,
            eraser: EraserConfig::default(),
        }
    }

    /// Snapshot of the active style, as stamped into captured segments.
    pub fn active(&self) -> Style {
        self.active
    }

    /// Replace the active color, leaving width and kind unchanged.
    /// `None` selects the default pen color.
    pub fn set_color(&mut self, color: Option<Color32>) {
        self.active.color = color.unwrap_or(DEFAULT_COLOR);
    }

    /// Replace the active width, leaving color and kind unchanged.
    /// `None` selects the default pen width.
    pub fn set_width(&mut self, width: Option<f32>) {
        self.active.width = width.unwrap_or(DEFAULT_WIDTH);
    }

    /// Install the eraser-derived style. There is no explicit exit; calling
    /// `set_color`/`set_width` again re-selects a pen.
    pub fn use_eraser(&mut self) {
        self.active = self.eraser.to_style(self.active.kind);
    }

    pub fn eraser(&self) -> EraserConfig {
        self.eraser
    }
}
