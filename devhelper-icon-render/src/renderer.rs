use tracing::debug;

use devhelper_icon_core::{IconLayout, ACCENT, BACKGROUND, GLYPH};

use crate::canvas::{Canvas, Surface};

/// Render the icon into a fresh transparent `size × size` canvas.
///
/// Deterministic: the same size always yields the same pixels. Fails only
/// for `size == 0`.
pub fn render(size: u32) -> crate::Result<Canvas> {
    let layout = IconLayout::for_size(size)?;
    let mut canvas = Canvas::new(size, size);
    draw_icon(&mut canvas, &layout);
    debug!(
        size,
        stroke = layout.stroke_width,
        accent = layout.accent.is_some(),
        "Rendered icon"
    );
    Ok(canvas)
}

/// Draw the icon described by `layout` onto any surface, back to front:
/// background, `<`, `>`, `/`, then the accent dot when the layout has one.
pub fn draw_icon<S: Surface + ?Sized>(surface: &mut S, layout: &IconLayout) {
    surface.fill_rounded_rect(layout.background, layout.corner_radius, BACKGROUND);

    for stroke in layout.strokes() {
        surface.stroke_segment(stroke, layout.stroke_width, GLYPH);
    }

    if let Some(dot) = layout.accent {
        surface.fill_disc(dot.center_x, dot.center_y, dot.radius, ACCENT);
    }
}
