//! Mixtures of three colors.
//!
//! - [`MixBar`]: a discretized gradient between two of the three
//!   colors, one per [`Pair`], whose steps select a mix ratio.
//! - [`rasterize`]: the ternary field, a triangle where each point is
//!   the blend of the three colors weighted by its barycentric
//!   [`Weights`], rendered as solid [`Patch`]es.
//! - [`sample_at`]: the blend and percentages under the pointer.
//!
//! [`Session`] owns the state (palette, [`RatioState`], [`Viewport`])
//! and the [`RenderScheduler`] deciding when bars and field are
//! recomputed.
//!
//! The blending itself is delegated to a [`ColorMixer`].
//! [`LinearRgbMixer`] is a simple one working on [`rgb::RGB8`].

use std::fmt;

mod error;
pub use error::{Error, Result};

mod config;
pub use config::{MixConfig, DEFAULT_BAR_STEPS, DEFAULT_EDGE_TOLERANCE,
                 DEFAULT_MAX_PATCHES_ACROSS};

pub mod geometry;
pub use geometry::{Point, Triangle, Viewport, Weights};

mod ratio;
pub use ratio::RatioState;

mod bar;
pub use bar::{render_bars, BarStep, BarSteps, BarView, MixBar};

mod field;
pub use field::{patch_step, rasterize, sample_at, Cell, Patch, PatchGrid,
                Sample};

mod schedule;
pub use schedule::{RenderScheduler, Schedule, Trigger};

mod session;
pub use session::{Frame, Session};

mod linear_rgb;
pub use linear_rgb::{ColorParseError, LinearRgbMixer};

/// The color capability the engine is built on: parsing, weighted
/// mixing and hexadecimal formatting.  Colors are opaque to the
/// engine; it only stores, clones and compares them.
pub trait ColorMixer {
    type Color: Clone + PartialEq + fmt::Debug;
    type Error: std::error::Error;

    /// Parse a color from user input.
    fn parse(&self, text: &str) -> std::result::Result<Self::Color, Self::Error>;

    /// Blend the colors with the given weights.  The engine never
    /// passes a zero weight nor a list with less than two entries.
    fn mix(&self, colors: &[(&Self::Color, f64)]) -> Self::Color;

    /// Format the color as `#RRGGBB` (uppercase).
    fn to_hex(&self, color: &Self::Color) -> String;
}

/// Blend the `(color, weight)` entries with a positive weight.
/// A single remaining entry is returned as is, without calling the
/// mixer.  Returns `None` if no weight is positive.
pub(crate) fn blend<'a, M>(
    mixer: &M, entries: impl IntoIterator<Item = (&'a M::Color, f64)>,
) -> Option<M::Color>
where M: ColorMixer, M::Color: 'a {
    let weighted: Vec<_> = entries.into_iter()
        .filter(|&(_, w)| w > 0.)
        .collect();
    match weighted.as_slice() {
        [] => None,
        [(c, _)] => Some((*c).clone()),
        _ => Some(mixer.mix(&weighted)),
    }
}

/// One of the three unordered pairs of colors.
///
/// Pairs are numbered 0, 1, 2 and join colors (1, 2), (2, 3) and
/// (1, 3) respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    AB,
    BC,
    AC,
}

impl Pair {
    pub const ALL: [Pair; 3] = [Pair::AB, Pair::BC, Pair::AC];

    #[inline]
    pub fn index(self) -> usize {
        match self { Pair::AB => 0, Pair::BC => 1, Pair::AC => 2 }
    }

    /// Indices, in the palette, of the first and second colors.
    #[inline]
    pub fn colors(self) -> (usize, usize) {
        match self { Pair::AB => (0, 1), Pair::BC => (1, 2), Pair::AC => (0, 2) }
    }
}

impl TryFrom<usize> for Pair {
    type Error = Error;

    fn try_from(i: usize) -> Result<Pair> {
        Pair::ALL.get(i).copied().ok_or(Error::PairOutOfRange(i))
    }
}
