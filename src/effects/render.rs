use crate::effects::canvas::{Canvas, CompositeOp, GradientAxis, Rgba};
use crate::effects::palette::{EffectSelection, PatternMethod};
use crate::imaging::{FitRect, LoadedImage};
use image::imageops::{self, FilterType};

/// Spacing of the grid pattern's lines.
pub const GRID_SPACING: f64 = 50.0;
/// Stroke width of the grid lines.
pub const GRID_LINE_WIDTH: f64 = 2.0;
/// Alpha of the overlay compositing pass.
pub const OVERLAY_ALPHA: f32 = 0.6;
/// Alpha of the concentric ring outlines of the circle pattern.
pub const RING_ALPHA: f32 = 0.3;
pub const RING_COUNT: u32 = 5;

/// Repaint the canvas: base image scaled to `fit`, then the selected overlay
/// composited with multiply at [`OVERLAY_ALPHA`].
///
/// Idempotent: the canvas is cleared and fully redrawn on every call, and
/// the composite op and global alpha are restored to source-over/1.0 before
/// returning so unrelated draws afterwards are unaffected.
pub fn render(canvas: &mut Canvas, image: &LoadedImage, fit: FitRect, selection: EffectSelection) {
    let (width, height) = fit.pixel_size();
    canvas.ensure_size(width, height);
    canvas.set_composite_op(CompositeOp::SourceOver);
    canvas.set_global_alpha(1.0);
    canvas.clear();

    let base = imageops::resize(&image.pixels, width, height, FilterType::Triangle);
    for (x, y, px) in base.enumerate_pixels() {
        canvas.set_pixel(x as i32, y as i32, Rgba::rgba(px[0], px[1], px[2], px[3]));
    }

    canvas.set_composite_op(CompositeOp::Multiply);
    canvas.set_global_alpha(OVERLAY_ALPHA);
    let palette = selection.scheme.palette();
    match selection.method {
        PatternMethod::Quadrant => paint_quadrants(canvas, &palette),
        PatternMethod::Grid => paint_grid(canvas, &palette),
        PatternMethod::Circle => paint_circles(canvas, &palette),
    }

    canvas.set_composite_op(CompositeOp::SourceOver);
    canvas.set_global_alpha(1.0);
}

/// Four equal rectangles, each a linear gradient cycling through the palette
/// so one quadrant's end color is the next one's start.
fn paint_quadrants(canvas: &mut Canvas, palette: &[Rgba; 4]) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let (hw, hh) = (w / 2.0, h / 2.0);

    // top-left, top-right, bottom-left, bottom-right
    canvas.fill_linear_gradient(
        0.0,
        0.0,
        hw,
        hh,
        GradientAxis::Horizontal,
        palette[0],
        palette[1],
    );
    canvas.fill_linear_gradient(
        hw,
        0.0,
        w - hw,
        hh,
        GradientAxis::Vertical,
        palette[1],
        palette[2],
    );
    canvas.fill_linear_gradient(
        0.0,
        hh,
        hw,
        h - hh,
        GradientAxis::Vertical,
        palette[2],
        palette[3],
    );
    canvas.fill_linear_gradient(
        hw,
        hh,
        w - hw,
        h - hh,
        GradientAxis::Horizontal,
        palette[3],
        palette[0],
    );
}

/// Vertical and horizontal lines every [`GRID_SPACING`] px, bounds inclusive.
/// Each line gradients along its own length from the first to the last
/// palette color.
fn paint_grid(canvas: &mut Canvas, palette: &[Rgba; 4]) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let (from, to) = (palette[0], palette[3]);
    let half = GRID_LINE_WIDTH / 2.0;

    let mut x = 0.0;
    while x <= w {
        canvas.fill_linear_gradient(x - half, 0.0, GRID_LINE_WIDTH, h, GradientAxis::Vertical, from, to);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= h {
        canvas.fill_linear_gradient(0.0, y - half, w, GRID_LINE_WIDTH, GradientAxis::Horizontal, from, to);
        y += GRID_SPACING;
    }
}

/// Radial gradient over the whole canvas with the palette as evenly spaced
/// stops, then five concentric ring outlines stroked at [`RING_ALPHA`].
fn paint_circles(canvas: &mut Canvas, palette: &[Rgba; 4]) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let max_radius = w.min(h) / 2.0;

    canvas.fill_radial_gradient(cx, cy, max_radius, palette);

    canvas.set_global_alpha(RING_ALPHA);
    for i in 1..=RING_COUNT {
        let radius = max_radius * i as f64 / RING_COUNT as f64;
        let color = palette[i as usize % palette.len()];
        canvas.stroke_circle(cx, cy, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::{render, OVERLAY_ALPHA};
    use crate::effects::canvas::{Canvas, CompositeOp, Rgba};
    use crate::effects::palette::{ColorScheme, EffectSelection, PatternMethod};
    use crate::imaging::{fit_to_bounds, LoadedImage, MAX_HEIGHT, MAX_WIDTH};

    fn white_image(w: u32, h: u32) -> LoadedImage {
        LoadedImage {
            name: "white.png".into(),
            pixels: image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255])),
            natural_width: w,
            natural_height: h,
        }
    }

    #[test]
    fn render_restores_composite_state() {
        let image = white_image(100, 100);
        let fit = fit_to_bounds(100.0, 100.0, MAX_WIDTH, MAX_HEIGHT);
        let mut canvas = Canvas::new(1, 1);
        render(
            &mut canvas,
            &image,
            fit,
            EffectSelection {
                method: PatternMethod::Circle,
                scheme: ColorScheme::RedBlue,
            },
        );
        assert_eq!(canvas.composite_op(), CompositeOp::SourceOver);
        assert_eq!(canvas.global_alpha(), 1.0);
    }

    #[test]
    fn render_is_idempotent_for_every_pattern() {
        let image = white_image(220, 160);
        let fit = fit_to_bounds(220.0, 160.0, MAX_WIDTH, MAX_HEIGHT);
        for method in PatternMethod::ALL {
            let selection = EffectSelection {
                method,
                scheme: ColorScheme::GreenRed,
            };
            let mut first = Canvas::new(1, 1);
            render(&mut first, &image, fit, selection);
            let mut second = first.clone();
            render(&mut second, &image, fit, selection);
            assert_eq!(first.pixels(), second.pixels(), "{method:?}");
        }
    }

    #[test]
    fn canvas_matches_the_fitted_rect() {
        let image = white_image(1100, 800);
        let fit = fit_to_bounds(1100.0, 800.0, MAX_WIDTH, MAX_HEIGHT);
        let mut canvas = Canvas::new(1, 1);
        render(&mut canvas, &image, fit, EffectSelection::default());
        assert_eq!((canvas.width(), canvas.height()), (550, 400));
    }

    #[test]
    fn quadrant_overlay_multiplies_the_base() {
        // over an opaque white base, multiply at alpha 0.6 with palette blue
        // (0,0,255,204) gives Dc' = Sca + 1 - Sa per channel
        let image = white_image(100, 100);
        let fit = fit_to_bounds(100.0, 100.0, MAX_WIDTH, MAX_HEIGHT);
        let mut canvas = Canvas::new(1, 1);
        render(&mut canvas, &image, fit, EffectSelection::default());

        // top-left corner is the start of the first gradient: pure blue stop
        assert_eq!(canvas.pixel(0, 0), Rgba::rgba(133, 133, 255, 255));
    }

    #[test]
    fn grid_darkens_lines_and_leaves_cells_untouched() {
        let image = white_image(400, 400);
        let fit = fit_to_bounds(400.0, 400.0, MAX_WIDTH, MAX_HEIGHT);
        let mut canvas = Canvas::new(1, 1);
        render(
            &mut canvas,
            &image,
            fit,
            EffectSelection {
                method: PatternMethod::Grid,
                scheme: ColorScheme::BlueGreen,
            },
        );

        // a point on the first vertical line vs the middle of a cell
        let on_line = canvas.pixel(50, 25);
        let in_cell = canvas.pixel(25, 25);
        assert_eq!(in_cell, Rgba::rgba(255, 255, 255, 255));
        assert_ne!(on_line, in_cell);
    }

    #[test]
    fn overlay_alpha_is_the_documented_constant() {
        assert_eq!(OVERLAY_ALPHA, 0.6);
    }
}
