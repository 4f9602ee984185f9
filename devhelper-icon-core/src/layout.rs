use crate::error::CoreError;
use crate::geometry::{PixelRect, Point, Segment};

/// Smallest icon size that still gets the accent dot. Below this the dot is
/// only a couple of pixels and reads as noise.
pub const ACCENT_MIN_SIZE: u32 = 64;

const PADDING_FRACTION: f64 = 0.08;
const CORNER_RADIUS_FRACTION: f64 = 0.2;
const STROKE_FRACTION: f64 = 0.055;
const MIN_STROKE_WIDTH: u32 = 2;

const CHEVRON_OFFSET_FRACTION: f64 = 0.2;
const CHEVRON_HALF_WIDTH_FRACTION: f64 = 0.14;
const CHEVRON_HALF_HEIGHT_FRACTION: f64 = 0.22;

const SLASH_HALF_HEIGHT_FRACTION: f64 = 0.2;
const SLASH_LEAN_FRACTION: f64 = 0.05;

const ACCENT_RADIUS_FRACTION: f64 = 0.025;
const MIN_ACCENT_RADIUS: i64 = 2;
const ACCENT_DX_FRACTION: f64 = 0.12;
const ACCENT_DY_FRACTION: f64 = 0.16;

/// A filled disc in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentDot {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

/// Every drawing parameter of the icon, derived from its pixel size.
///
/// All values are fixed fractions of `size`. Quantities that the raster
/// primitives need as whole pixels (padding, radius, stroke width, the dot)
/// are truncated toward zero; glyph endpoints stay fractional.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    /// Rounded-square background, bounds inclusive.
    pub background: PixelRect,
    pub corner_radius: i64,
    /// Stroke width of every glyph line, never below 2 px.
    pub stroke_width: u32,
    /// `<` as top arm end, apex, bottom arm end.
    pub left_chevron: [Point; 3],
    /// `>` as top arm end, apex, bottom arm end.
    pub right_chevron: [Point; 3],
    pub slash: Segment,
    /// `None` below [`ACCENT_MIN_SIZE`].
    pub accent: Option<AccentDot>,
}

impl IconLayout {
    pub fn for_size(size: u32) -> crate::Result<Self> {
        if size == 0 {
            return Err(CoreError::InvalidSize(size));
        }
        let s = size as f64;
        let center = s / 2.0;

        let padding = (s * PADDING_FRACTION) as i64;
        let far = size as i64 - padding;
        let background = PixelRect::new(padding, padding, far, far);
        let corner_radius = (s * CORNER_RADIUS_FRACTION) as i64;
        let stroke_width = ((s * STROKE_FRACTION) as u32).max(MIN_STROKE_WIDTH);

        let half_w = s * CHEVRON_HALF_WIDTH_FRACTION;
        let half_h = s * CHEVRON_HALF_HEIGHT_FRACTION;
        let left_x = center - s * CHEVRON_OFFSET_FRACTION;
        let right_x = center + s * CHEVRON_OFFSET_FRACTION;

        let left_chevron = [
            Point::new(left_x + half_w, center - half_h),
            Point::new(left_x, center),
            Point::new(left_x + half_w, center + half_h),
        ];
        let right_chevron = [
            Point::new(right_x - half_w, center - half_h),
            Point::new(right_x, center),
            Point::new(right_x - half_w, center + half_h),
        ];

        let lean = s * SLASH_LEAN_FRACTION;
        let slash_h = s * SLASH_HALF_HEIGHT_FRACTION;
        let slash = Segment::new(
            Point::new(center + lean, center - slash_h),
            Point::new(center - lean, center + slash_h),
        );

        let accent = (size >= ACCENT_MIN_SIZE).then(|| AccentDot {
            center_x: (center + s * ACCENT_DX_FRACTION) as i64,
            center_y: (center + s * ACCENT_DY_FRACTION) as i64,
            radius: ((s * ACCENT_RADIUS_FRACTION) as i64).max(MIN_ACCENT_RADIUS),
        });

        Ok(Self {
            size,
            background,
            corner_radius,
            stroke_width,
            left_chevron,
            right_chevron,
            slash,
            accent,
        })
    }

    /// The five glyph strokes in drawing order: `<` arms, `>` arms, then `/`.
    pub fn strokes(&self) -> [Segment; 5] {
        let [l0, l1, l2] = self.left_chevron;
        let [r0, r1, r2] = self.right_chevron;
        [
            Segment::new(l0, l1),
            Segment::new(l1, l2),
            Segment::new(r0, r1),
            Segment::new(r1, r2),
            self.slash,
        ]
    }
}
