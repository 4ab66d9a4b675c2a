use crate::Pair;

/// Mix ratios chosen on the pairwise bars, and which bar is active.
///
/// The ratio of a pair is the weight of its second color, in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioState {
    ratios: [f64; 3],
    active: Pair,
}

impl Default for RatioState {
    fn default() -> Self { RatioState::new(0.5) }
}

impl RatioState {
    /// All pairs start at `ratio` (clamped to \[0, 1\]); the first
    /// pair is active.
    pub fn new(ratio: f64) -> Self {
        let r = clamp_ratio(ratio);
        RatioState { ratios: [r; 3], active: Pair::AB }
    }

    /// Store `ratio`, clamped to \[0, 1\], for `pair` and make that
    /// pair the active one.  A `NaN` ratio is stored as `0.`.
    pub fn set_ratio(&mut self, pair: Pair, ratio: f64) {
        self.ratios[pair.index()] = clamp_ratio(ratio);
        self.active = pair;
    }

    #[inline]
    pub fn ratio(&self, pair: Pair) -> f64 { self.ratios[pair.index()] }

    #[inline]
    pub fn active_pair(&self) -> Pair { self.active }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() { 0. } else { ratio.clamp(0., 1.) }
}
