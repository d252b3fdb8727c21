#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel linear interpolation, `t` in [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Pixel-combination rule for overlay drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    #[default]
    SourceOver,
    Multiply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    Horizontal,
    Vertical,
}

/// RGBA drawing surface with canvas-style state: a composite op and a global
/// alpha applied to every blended write. Drawing helpers clip to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    composite_op: CompositeOp,
    global_alpha: f32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
            composite_op: CompositeOp::SourceOver,
            global_alpha: 1.0,
        }
    }

    /// Reallocate (cleared) when the requested size differs.
    pub fn ensure_size(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn set_composite_op(&mut self, op: CompositeOp) {
        self.composite_op = op;
    }

    pub fn composite_op(&self) -> CompositeOp {
        self.composite_op
    }

    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    /// Unconditional store, ignoring composite state. Used for the base
    /// image, which lands on a cleared surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }

    /// Blend `src` over the surface honouring the composite op and global
    /// alpha. Out-of-bounds writes are clipped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let dst = Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        };

        let sa = src.a as f32 / 255.0 * self.global_alpha;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da - sa * da;
        if out_a <= f32::EPSILON {
            self.pixels[idx..idx + 4].fill(0);
            return;
        }

        // premultiplied channel math, un-premultiplied at the end
        let op = self.composite_op;
        let channel = |s: u8, d: u8| -> u8 {
            let sca = s as f32 / 255.0 * sa;
            let dca = d as f32 / 255.0 * da;
            let out = match op {
                CompositeOp::SourceOver => sca + dca * (1.0 - sa),
                // Dca' = Sca.Dca + Sca.(1 - Da) + Dca.(1 - Sa)
                CompositeOp::Multiply => sca * dca + sca * (1.0 - da) + dca * (1.0 - sa),
            };
            (out / out_a * 255.0).round().clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = channel(src.r, dst.r);
        self.pixels[idx + 1] = channel(src.g, dst.g);
        self.pixels[idx + 2] = channel(src.b, dst.b);
        self.pixels[idx + 3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Fill an axis-aligned rect with a linear gradient along `axis`.
    /// Coordinates are in canvas space and may extend past the surface.
    pub fn fill_linear_gradient(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        axis: GradientAxis,
        from: Rgba,
        to: Rgba,
    ) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + w).round() as i32;
        let y1 = (y + h).round() as i32;
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let span = match axis {
            GradientAxis::Horizontal => (x1 - x0 - 1).max(1) as f32,
            GradientAxis::Vertical => (y1 - y0 - 1).max(1) as f32,
        };
        for py in y0..y1 {
            for px in x0..x1 {
                let t = match axis {
                    GradientAxis::Horizontal => (px - x0) as f32 / span,
                    GradientAxis::Vertical => (py - y0) as f32 / span,
                };
                self.blend_pixel(px, py, from.lerp(to, t));
            }
        }
    }

    /// Fill the whole surface with a radial gradient centered at `(cx, cy)`,
    /// `stops` evenly spaced from the center out to `radius`. Beyond the
    /// radius the last stop color is used.
    pub fn fill_radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, stops: &[Rgba]) {
        debug_assert!(stops.len() >= 2);
        for py in 0..self.height as i32 {
            for px in 0..self.width as i32 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let d = ((dx * dx + dy * dy).sqrt() / radius.max(1.0)).clamp(0.0, 1.0);
                self.blend_pixel(px, py, sample_stops(stops, d as f32));
            }
        }
    }

    /// Stroke a one-pixel circle outline (midpoint circle).
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba) {
        let cx = cx.round() as i32;
        let cy = cy.round() as i32;
        let r = radius.round() as i32;
        if r <= 0 {
            self.blend_pixel(cx, cy, color);
            return;
        }

        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;
        while x >= y {
            self.blend_pixel(cx + x, cy + y, color);
            self.blend_pixel(cx - x, cy + y, color);
            if y != 0 {
                self.blend_pixel(cx + x, cy - y, color);
                self.blend_pixel(cx - x, cy - y, color);
            }
            if x != y {
                self.blend_pixel(cx + y, cy + x, color);
                self.blend_pixel(cx + y, cy - x, color);
                if y != 0 {
                    self.blend_pixel(cx - y, cy + x, color);
                    self.blend_pixel(cx - y, cy - x, color);
                }
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

fn sample_stops(stops: &[Rgba], t: f32) -> Rgba {
    let last = stops.len() - 1;
    let pos = t.clamp(0.0, 1.0) * last as f32;
    let i = (pos.floor() as usize).min(last.saturating_sub(1));
    stops[i].lerp(stops[i + 1], pos - i as f32)
}
