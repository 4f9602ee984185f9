use devhelper_icon_core::{PixelRect, Point, Rgba, Segment, TRANSPARENT};

// ---------------------------------------------------------------------------
// Drawing surface
// ---------------------------------------------------------------------------

/// Something the icon can be drawn onto.
///
/// Only [`Surface::put_pixel`] and the dimensions are required; every shape
/// has a default rasterization built on top of it. Pixels are overwritten,
/// never blended.
///
/// Rounded rectangles are an optional capability. A surface that does not
/// override [`Surface::fill_rounded_rect`] gets a plain rectangle with the
/// same bounds.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Write one pixel. Coordinates outside the surface are ignored.
    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba);

    /// Fill `rect` (bounds inclusive), clipped to the surface.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let r = rect.clip(self.width(), self.height());
        for y in r.y0..=r.y1 {
            for x in r.x0..=r.x1 {
                self.put_pixel(x, y, color);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: PixelRect, _radius: i64, color: Rgba) {
        self.fill_rect(rect, color);
    }

    /// Stroke a segment `width` pixels wide. Covers every pixel whose center
    /// is within `width / 2` of the segment, which rounds the ends and makes
    /// connected strokes join without notches.
    fn stroke_segment(&mut self, segment: Segment, width: u32, color: Rgba) {
        let half = width as f64 / 2.0;
        let limit = half * half;
        let r = segment.bounds(half).clip(self.width(), self.height());
        for y in r.y0..=r.y1 {
            for x in r.x0..=r.x1 {
                if segment.distance_sq(Point::new(x as f64, y as f64)) <= limit {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill the disc of `radius` around an integer center.
    fn fill_disc(&mut self, cx: i64, cy: i64, radius: i64, color: Rgba) {
        let bounds = PixelRect::new(cx - radius, cy - radius, cx + radius, cy + radius);
        let r = bounds.clip(self.width(), self.height());
        let r_sq = radius * radius;
        for y in r.y0..=r.y1 {
            for x in r.x0..=r.x1 {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r_sq {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// An RGBA pixel buffer representing a rendered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// Create a new fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Read one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let mut px = TRANSPARENT;
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: Rgba) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| *px == color)
            .count()
    }

    /// Check that the buffer length agrees with the dimensions.
    pub fn validate(&self) -> crate::Result<()> {
        let expected = self.width as usize * self.height as usize * 4;
        if self.pixels.len() != expected {
            return Err(crate::RenderError::DimensionMismatch {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        Ok(())
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    fn fill_rounded_rect(&mut self, rect: PixelRect, radius: i64, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        // A radius past half the short side would make the corner arcs overlap.
        let r = radius.clamp(0, (rect.x1 - rect.x0).min(rect.y1 - rect.y0) / 2);
        let (ix0, ix1) = (rect.x0 + r, rect.x1 - r);
        let (iy0, iy1) = (rect.y0 + r, rect.y1 - r);
        let r_sq = r * r;

        let clipped = rect.clip(self.width, self.height);
        for y in clipped.y0..=clipped.y1 {
            let dy = y - y.clamp(iy0, iy1);
            for x in clipped.x0..=clipped.x1 {
                let dx = x - x.clamp(ix0, ix1);
                if dx * dx + dy * dy <= r_sq {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}
