/// A point in pixel space. Integer coordinates address pixel centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Squared distance from `p` to the closest point on the segment.
    pub fn distance_sq(&self, p: Point) -> f64 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((p.x - self.from.x) * dx + (p.y - self.from.y) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let cx = self.from.x + t * dx - p.x;
        let cy = self.from.y + t * dy - p.y;
        cx * cx + cy * cy
    }

    /// Axis-aligned bounds of the segment grown by `margin` on every side,
    /// snapped outward to whole pixels.
    pub fn bounds(&self, margin: f64) -> PixelRect {
        PixelRect {
            x0: (self.from.x.min(self.to.x) - margin).floor() as i64,
            y0: (self.from.y.min(self.to.y) - margin).floor() as i64,
            x1: (self.from.x.max(self.to.x) + margin).ceil() as i64,
            y1: (self.from.y.max(self.to.y) + margin).ceil() as i64,
        }
    }
}

/// An axis-aligned rectangle in pixel coordinates, bounds inclusive.
///
/// Coordinates are signed so shapes may extend past the canvas edge; callers
/// clip with [`PixelRect::clip`] before touching pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Intersect with a `width × height` raster. The result may be empty.
    pub fn clip(&self, width: u32, height: u32) -> PixelRect {
        PixelRect {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(width as i64 - 1),
            y1: self.y1.min(height as i64 - 1),
        }
    }
}
