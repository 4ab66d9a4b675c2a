//! Barycentric geometry of the mixing triangle.
//!
//! The triangle lives in viewport pixel space (y grows downwards):
//! `A = (0, 0)`, `B = (W, 0)` and `C = (W/2, H)`.  A point is
//! described by its weights `(w1, w2, w3)` with respect to `A`, `B`,
//! `C`; these weights are the mixture ratios of the three colors.

/// `√3 / 2`, the height of an equilateral triangle of unit side.
pub const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// A point in viewport pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self { Point { x, y } }
}

/// Barycentric weights `(w1, w2, w3)` of a point.
///
/// Weights returned by [`Triangle::weights_at`] sum to 1 (up to
/// rounding errors) but may be negative for points outside the
/// triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights(pub [f64; 3]);

impl Weights {
    #[inline]
    pub fn sum(&self) -> f64 { self.0[0] + self.0[1] + self.0[2] }

    /// Says whether the point lies inside the triangle, edges
    /// included: every weight must be `≥ -eps`.  `NaN` weights are
    /// never inside.
    #[inline]
    pub fn is_inside(&self, eps: f64) -> bool {
        self.0.iter().all(|&w| w >= -eps)
    }

    /// Replace negative weights by `0.`.
    pub fn clamp_non_negative(self) -> Weights {
        Weights(self.0.map(|w| w.max(0.)))
    }

    /// Divide the weights by their sum so that they add up to exactly
    /// 1.  Returns `None` if the sum is not positive.
    pub fn normalized(self) -> Option<Weights> {
        let total = self.sum();
        if total > 0. && total.is_finite() {
            Some(Weights(self.0.map(|w| w / total)))
        } else {
            None
        }
    }

    /// Integer percentages of normalized weights, adding up to exactly
    /// 100.  Each weight is rounded independently (negative results
    /// become 0); any shortfall or excess is put on the component
    /// with the largest raw value.
    pub fn percentages(&self) -> [u32; 3] {
        let raw = self.0.map(|w| w * 100.);
        let mut pct = raw.map(|r| r.round().max(0.) as i64);
        let total: i64 = pct.iter().sum();
        if total != 100 {
            // The first one on ties.
            let mut k = 0;
            for i in 1 .. 3 {
                if raw[i] > raw[k] { k = i }
            }
            pct[k] = (pct[k] + 100 - total).max(0);
        }
        pct.map(|p| p as u32)
    }
}

/// The mixing triangle `A = (0, 0)`, `B = (W, 0)`, `C = (W/2, H)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    denom: f64, // Never 0.
}

impl Triangle {
    /// Return the triangle spanning a `width` × `height` viewport, or
    /// `None` if the viewport is degenerate (a non-positive or
    /// non-finite side).
    pub fn new(width: f64, height: f64) -> Option<Triangle> {
        if !(width > 0. && height > 0.)
            || !width.is_finite() || !height.is_finite() {
            return None
        }
        let a = Point::new(0., 0.);
        let b = Point::new(width, 0.);
        let c = Point::new(width / 2., height);
        let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        Some(Triangle { a, b, c, denom })
    }

    /// Equilateral triangle of side `width`: `H = W·√3/2`.
    pub fn equilateral(width: f64) -> Option<Triangle> {
        Self::new(width, width * HALF_SQRT_3)
    }

    /// Barycentric weights of `p`.  Defined for every point of the
    /// plane; `w3` is computed as `1 - w1 - w2`.
    pub fn weights_at(&self, p: Point) -> Weights {
        let Triangle { a, b, c, denom } = *self;
        let w1 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y))
            / denom;
        let w2 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y))
            / denom;
        Weights([w1, w2, 1. - w1 - w2])
    }

    /// The point whose weights are `w` (the weights need not be
    /// normalized, their sum is taken as the total mass).
    pub fn point_at(&self, w: &Weights) -> Point {
        let [w1, w2, w3] = w.0;
        let total = w.sum();
        Point::new((w1 * self.a.x + w2 * self.b.x + w3 * self.c.x) / total,
                   (w1 * self.a.y + w2 * self.b.y + w3 * self.c.y) / total)
    }

    /// Centroid, where all three weights equal 1/3.
    pub fn centroid(&self) -> Point {
        self.point_at(&Weights([1., 1., 1.]))
    }
}

/// Pixel dimensions of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self { Viewport { width, height } }

    /// A viewport `width` pixels wide tall enough for an equilateral
    /// triangle.
    pub fn equilateral(width: u32) -> Self {
        let height = (width as f64 * HALF_SQRT_3).round() as u32;
        Viewport { width, height }
    }

    /// Pixel viewport of a field displayed `display_width` wide on a
    /// screen with the given device pixel ratio.  Both sides are at
    /// least one pixel.  Returns `None` when nothing is displayed
    /// (`display_width` is not positive).  A non-positive or
    /// non-finite `dpr` counts as 1.
    pub fn from_display(display_width: f64, dpr: f64) -> Option<Viewport> {
        if !(display_width > 0.) || !display_width.is_finite() {
            return None
        }
        let dpr = if dpr > 0. && dpr.is_finite() { dpr } else { 1. };
        let display_height = display_width * HALF_SQRT_3;
        let width = (display_width * dpr).round().max(1.) as u32;
        let height = (display_height * dpr).round().max(1.) as u32;
        Some(Viewport { width, height })
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// The mixing triangle of this viewport (`None` if it is empty).
    pub fn triangle(&self) -> Option<Triangle> {
        Triangle::new(self.width as f64, self.height as f64)
    }

    /// Convert a pointer position `(x, y)`, measured on the displayed
    /// element of size `client_width` × `client_height`, to pixel
    /// coordinates of this viewport.  A zero client side counts as 1.
    pub fn to_pixels(&self, x: f64, y: f64,
                     client_width: f64, client_height: f64) -> Point {
        let cw = if client_width > 0. { client_width } else { 1. };
        let ch = if client_height > 0. { client_height } else { 1. };
        Point::new(x * self.width as f64 / cw, y * self.height as f64 / ch)
    }
}
