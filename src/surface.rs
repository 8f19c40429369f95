use crate::style::Style;
use egui::Pos2;
use image::{Rgba, RgbaImage};

/// The pixel-addressable drawing target the engine renders into.
///
/// Coordinates are in logical points; an implementation may map them to a
/// denser pixel grid (DPI scaling). Implementations own the pixel buffer and
/// nothing else; the engine never reads back individual pixels except
/// through `to_rgba` snapshots.
pub trait Surface {
    /// Buffer width in physical pixels.
    fn width(&self) -> u32;
    /// Buffer height in physical pixels.
    fn height(&self) -> u32;
    /// Stroke a round-cap line between two logical points.
    fn line(&mut self, from: Pos2, to: Pos2, style: &Style);
    /// Erase the full surface area.
    fn clear(&mut self);
    /// Snapshot the current contents as straight-alpha RGBA.
    fn to_rgba(&self) -> RgbaImage;
}

/// Software raster surface backed by an RGBA byte buffer.
///
/// A line is the set of pixels within half the stroke width of the segment
/// (capsule test), which gives round caps without special-casing endpoints.
/// Colors blend source-over with straight alpha; a cleared surface is fully
/// transparent.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    /// Physical pixels per logical point.
    scale: f32,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let [sr, sg, sb, sa] = src.map(|c| c as f32 / 255.0);
        if sa <= 0.0 {
            return;
        }
        let Rgba([dr, dg, db, da]) = *self.pixels.get_pixel(x, y);
        let [dr, dg, db, da] = [dr, dg, db, da].map(|c| c as f32 / 255.0);

        let out_a = sa + da * (1.0 - sa);
        let blend = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
        let out = [blend(sr, dr), blend(sg, dg), blend(sb, db), out_a];
        self.pixels.put_pixel(
            x,
            y,
            Rgba(out.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)),
        );
    }
}

/// Squared distance from `p` to the segment `a..=b`. Degenerate segments
/// collapse to point distance.
fn dist_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    (p - (a + ab * t)).length_sq()
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn line(&mut self, from: Pos2, to: Pos2, style: &Style) {
        let a = Pos2::new(from.x * self.scale, from.y * self.scale);
        let b = Pos2::new(to.x * self.scale, to.y * self.scale);
        let radius = (style.width * self.scale * 0.5).max(0.5);
        let radius_sq = radius * radius;
        let src = style.color.to_srgba_unmultiplied();

        let min_x = ((a.x.min(b.x) - radius).floor().max(0.0)) as u32;
        let min_y = ((a.y.min(b.y) - radius).floor().max(0.0)) as u32;
        let max_x = (a.x.max(b.x) + radius).ceil().min(self.width() as f32 - 1.0);
        let max_y = (a.y.max(b.y) + radius).ceil().min(self.height() as f32 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }

        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if dist_sq_to_segment(center, a, b) <= radius_sq {
                    self.blend_pixel(x, y, src);
                }
            }
        }
    }

    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn to_rgba(&self) -> RgbaImage {
        self.pixels.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn opaque(style: &mut Style) {
        style.color = egui::Color32::RED;
        style.width = 2.0;
    }

    #[test]
    fn line_touches_pixels_along_the_segment() {
        let mut surface = RasterSurface::new(40, 40, 1.0);
        let mut style = Style::default();
        opaque(&mut style);
        surface.line(pos2(5.0, 20.0), pos2(35.0, 20.0), &style);

        assert_eq!(surface.pixels().get_pixel(20, 20).0, [255, 0, 0, 255]);
        // Far corner stays untouched.
        assert_eq!(surface.pixels().get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn zero_length_segment_stamps_a_dot() {
        let mut surface = RasterSurface::new(20, 20, 1.0);
        let mut style = Style::default();
        opaque(&mut style);
        surface.line(pos2(10.0, 10.0), pos2(10.0, 10.0), &style);
        assert_eq!(surface.pixels().get_pixel(10, 10).0[3], 255);
    }

    #[test]
    fn scale_maps_points_to_denser_pixels() {
        let mut surface = RasterSurface::new(40, 40, 2.0);
        let mut style = Style::default();
        opaque(&mut style);
        surface.line(pos2(2.0, 10.0), pos2(18.0, 10.0), &style);
        // Logical y=10 lands at pixel row 20.
        assert_eq!(surface.pixels().get_pixel(20, 20).0[3], 255);
        assert_eq!(surface.pixels().get_pixel(20, 5).0[3], 0);
    }

    #[test]
    fn clear_resets_to_transparent() {
        let mut surface = RasterSurface::new(10, 10, 1.0);
        let mut style = Style::default();
        opaque(&mut style);
        surface.line(pos2(0.0, 0.0), pos2(9.0, 9.0), &style);
        surface.clear();
        assert!(surface.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
