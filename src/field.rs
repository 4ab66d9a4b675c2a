//! The ternary field: every point of the triangle is the blend of the
//! three colors weighted by its barycentric coordinates.
//!
//! Mixing every pixel costs `W·H` calls to the mixer.  The field is
//! instead cut in square patches of side
//! `max(1, floor(W / max_patches_across))`, each painted with the
//! blend at its center, which bounds the cost to
//! `(W / step)·(H / step)` calls.

use log::debug;
use crate::{blend, ColorMixer, MixConfig, Point, Triangle, Viewport, Weights};

/// Side of the patches for a field `width` pixels wide, so that at most
/// about `max_across` patches span the width.
#[inline]
pub fn patch_step(width: u32, max_across: u32) -> u32 {
    (width / max_across.max(1)).max(1)
}

/// An axis-aligned rectangle of pixels `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    pub fn center(&self) -> Point {
        Point::new(self.x as f64 + self.width as f64 / 2.,
                   self.y as f64 + self.height as f64 / 2.)
    }

    #[inline]
    pub fn area(&self) -> u64 { self.width as u64 * self.height as u64 }
}

/// The cells of side `step` tiling a viewport, row by row.  Cells of
/// the last column and row are clipped to the viewport.
#[derive(Clone, Debug)]
pub struct PatchGrid {
    viewport: Viewport,
    step: u32,
    x: u32, // next cell
    y: u32,
}

impl PatchGrid {
    /// Grid of `viewport` with cells of side `step` (at least 1).
    pub fn new(viewport: Viewport, step: u32) -> Self {
        let y = if viewport.is_empty() { viewport.height } else { 0 };
        PatchGrid { viewport, step: step.max(1), x: 0, y }
    }

    #[inline]
    pub fn step(&self) -> u32 { self.step }

    /// Number of columns and rows of the whole grid.
    pub fn dimensions(&self) -> (u32, u32) {
        if self.viewport.is_empty() { return (0, 0) }
        (self.viewport.width.div_ceil(self.step),
         self.viewport.height.div_ceil(self.step))
    }
}

impl Iterator for PatchGrid {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let Viewport { width, height } = self.viewport;
        if self.y >= height { return None }
        let cell = Cell { x: self.x, y: self.y,
                          width: self.step.min(width - self.x),
                          height: self.step.min(height - self.y) };
        // Advance without overflowing near `u32::MAX`.
        if width - self.x <= self.step {
            self.x = 0;
            self.y = if height - self.y <= self.step { height }
                     else { self.y + self.step };
        } else {
            self.x += self.step;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let height = self.viewport.height;
        let len = if self.y >= height { 0 } else {
            let (cols, _) = self.dimensions();
            let rows_left = (height - self.y).div_ceil(self.step);
            // `x` is a multiple of `step`.
            rows_left as u64 * cols as u64 - (self.x / self.step) as u64
        };
        match usize::try_from(len) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for PatchGrid {}

/// A cell of the field painted with a single color.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch<Color> {
    pub cell: Cell,
    pub color: Color,
}

/// Render the field of the palette `colors` on `viewport`.
///
/// Cells whose center lies outside the triangle are skipped, so the
/// patches are the part of the [`PatchGrid`] covering the triangle.
/// An empty viewport gives no patch.
pub fn rasterize<M: ColorMixer>(
    mixer: &M, colors: &[M::Color; 3], viewport: Viewport, config: &MixConfig,
) -> Vec<Patch<M::Color>> {
    let Some(triangle) = viewport.triangle() else { return vec![] };
    let grid = PatchGrid::new(viewport,
                              patch_step(viewport.width,
                                         config.max_patches_across));
    let step = grid.step();
    let patches: Vec<_> = grid.filter_map(|cell| {
        let w = triangle.weights_at(cell.center());
        if !w.is_inside(config.edge_tolerance) { return None }
        let Weights(w) = w.clamp_non_negative();
        let color = blend(mixer, colors.iter().zip(w))?;
        Some(Patch { cell, color })
    }).collect();
    debug!("field {}×{}: {} patches of side {}",
           viewport.width, viewport.height, patches.len(), step);
    patches
}

/// The blend under a point of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<Color> {
    /// Normalized weights (they add up to 1).
    pub weights: Weights,
    pub color: Color,
    /// Weights as integer percentages adding up to exactly 100.
    pub percentages: [u32; 3],
}

impl<Color> Sample<Color> {
    /// The blended color as `#RRGGBB`.
    pub fn hex<M>(&self, mixer: &M) -> String
    where M: ColorMixer<Color = Color> {
        mixer.to_hex(&self.color)
    }
}

/// The blend at `p`, or `None` if `p` is outside `triangle` (with
/// tolerance `eps`).  Unlike [`rasterize`], the weights are not clamped
/// but normalized.
pub fn sample_at<M: ColorMixer>(
    mixer: &M, colors: &[M::Color; 3], triangle: &Triangle, p: Point, eps: f64,
) -> Option<Sample<M::Color>> {
    let w = triangle.weights_at(p);
    if !w.is_inside(eps) { return None }
    let weights = w.normalized()?;
    let color = blend(mixer, colors.iter().zip(weights.0))?;
    Some(Sample { weights, color, percentages: weights.percentages() })
}
