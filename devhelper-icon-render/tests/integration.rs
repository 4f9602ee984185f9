use devhelper_icon_core::{IconLayout, ACCENT, BACKGROUND, GLYPH, ICO_SIZES, TRANSPARENT};
use devhelper_icon_render::{draw_icon, render, Canvas, Surface};

#[test]
fn every_size_yields_a_square_canvas() {
    for size in 1..=130u32 {
        let canvas = render(size).unwrap();
        assert_eq!(canvas.width, size);
        assert_eq!(canvas.height, size);
        assert_eq!(canvas.pixels.len(), (size * size * 4) as usize);
    }
}

#[test]
fn render_determinism() {
    for size in [1, 16, 63, 64, 256, 1024] {
        let r1 = render(size).unwrap();
        let r2 = render(size).unwrap();
        assert_eq!(r1.pixels, r2.pixels, "renders must be deterministic at {size}");
    }
}

#[test]
fn accent_color_only_from_64_up() {
    for size in [1, 16, 32, 48, 63] {
        assert_eq!(render(size).unwrap().count_color(ACCENT), 0, "size {size}");
    }
    for size in [64, 65, 128, 256, 512, 1024] {
        assert!(render(size).unwrap().count_color(ACCENT) > 0, "size {size}");
    }
}

#[test]
fn one_pixel_icon_still_strokes() {
    // Stroke width floors at 2, so the glyph covers the only pixel.
    let layout = IconLayout::for_size(1).unwrap();
    assert_eq!(layout.stroke_width, 2);
    let canvas = render(1).unwrap();
    assert_eq!(canvas.pixel(0, 0), Some(GLYPH));
}

#[test]
fn only_icon_colors_appear() {
    for size in ICO_SIZES {
        let canvas = render(size).unwrap();
        let known = [TRANSPARENT, BACKGROUND, GLYPH, ACCENT]
            .iter()
            .map(|&c| canvas.count_color(c))
            .sum::<usize>();
        assert_eq!(known, (size * size) as usize);
    }
}

#[test]
fn background_is_centered_square() {
    let canvas = render(256).unwrap();
    // Inset trunc(0.08 * 256) = 20.
    assert_eq!(canvas.pixel(19, 128), Some(TRANSPARENT));
    assert_eq!(canvas.pixel(20, 128), Some(BACKGROUND));
    assert_eq!(canvas.pixel(128, 19), Some(TRANSPARENT));
    assert_eq!(canvas.pixel(128, 20), Some(BACKGROUND));
}

/// Records pixels but has no rounded-rectangle support of its own.
struct SquareCornerSurface(Canvas);

impl Surface for SquareCornerSurface {
    fn width(&self) -> u32 {
        self.0.width
    }

    fn height(&self) -> u32 {
        self.0.height
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: [u8; 4]) {
        self.0.put_pixel(x, y, color);
    }
}

#[test]
fn surface_without_rounded_corners_gets_plain_background() {
    let layout = IconLayout::for_size(64).unwrap();
    let mut surface = SquareCornerSurface(Canvas::new(64, 64));
    draw_icon(&mut surface, &layout);

    let bg = layout.background;
    let rounded = render(64).unwrap();
    let corner = (bg.x0 as u32, bg.y0 as u32);
    assert_eq!(rounded.pixel(corner.0, corner.1), Some(TRANSPARENT));
    assert_eq!(surface.0.pixel(corner.0, corner.1), Some(BACKGROUND));
    // Outside the bounds nothing changes.
    assert_eq!(surface.0.pixel(0, 0), Some(TRANSPARENT));
    // Glyph and accent are identical either way.
    assert_eq!(surface.0.count_color(GLYPH), rounded.count_color(GLYPH));
    assert_eq!(surface.0.count_color(ACCENT), rounded.count_color(ACCENT));
}
