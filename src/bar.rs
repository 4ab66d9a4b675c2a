//! Pairwise mix bars: `N + 1` colors going from the first color of a
//! [`Pair`] (step 0) to its second color (step `N`).

use crate::{blend, ColorMixer, Pair, RatioState};

/// Percentages `(first, second)` of a split where the second color has
/// weight `ratio`.  Only the second is rounded so that the two always
/// add up to 100.
pub(crate) fn split_percent(ratio: f64) -> (u32, u32) {
    let second = (ratio.clamp(0., 1.) * 100.).round() as u32;
    (100 - second, second)
}

/// A gradient between two colors discretized in `N` steps.
///
/// Created by [`MixBar::new`] or [`MixBar::for_pair`].
pub struct MixBar<'a, M: ColorMixer> {
    mixer: &'a M,
    first: &'a M::Color,
    second: &'a M::Color,
    steps: usize, // ≥ 1
}

impl<'a, M> MixBar<'a, M>
where M: ColorMixer {
    /// Bar from `first` to `second` in `steps` steps (at least one).
    pub fn new(mixer: &'a M, first: &'a M::Color, second: &'a M::Color,
               steps: usize) -> Self {
        MixBar { mixer, first, second, steps: steps.max(1) }
    }

    /// The bar of `pair` in the palette `colors`.
    pub fn for_pair(mixer: &'a M, colors: &'a [M::Color; 3], pair: Pair,
                    steps: usize) -> Self {
        let (i, j) = pair.colors();
        Self::new(mixer, &colors[i], &colors[j], steps)
    }

    /// Number of steps `N`; the bar has `N + 1` colors.
    #[inline]
    pub fn steps(&self) -> usize { self.steps }

    /// Weight of the second color at step `i`, that is `i / N`.
    #[inline]
    pub fn ratio(&self, i: usize) -> f64 {
        i.min(self.steps) as f64 / self.steps as f64
    }

    /// Color of step `i` (steps beyond `N` are step `N`).  The end
    /// steps are the pure colors; the mixer is only called with two
    /// positive weights.
    pub fn step_color(&self, i: usize) -> M::Color {
        let second = self.ratio(i);
        let first = 1. - second;
        blend(self.mixer, [(self.first, first), (self.second, second)])
            .unwrap_or_else(|| self.first.clone())
    }

    /// Iterate over the steps, yielding the ratio and the color of
    /// each one, left to right.
    pub fn iter(&self) -> BarSteps<'_, 'a, M> {
        BarSteps { bar: self, i: 0, j: self.steps, done: false }
    }
}

/// An iterator over the `(ratio, color)` of the steps of a [`MixBar`].
pub struct BarSteps<'b, 'a, M: ColorMixer> {
    bar: &'b MixBar<'a, M>,
    i: usize, // first step to be consumed (i ≤ j unless done)
    j: usize, // last step to be consumed
    done: bool,
}

impl<'b, 'a, M> Iterator for BarSteps<'b, 'a, M>
where M: ColorMixer {
    type Item = (f64, M::Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done { return None }
        let item = (self.bar.ratio(self.i), self.bar.step_color(self.i));
        if self.i == self.j { self.done = true } else { self.i += 1 }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.done { 0 } else { self.j - self.i + 1 };
        (len, Some(len))
    }
}

impl<'b, 'a, M: ColorMixer> ExactSizeIterator for BarSteps<'b, 'a, M> {}

impl<'b, 'a, M> DoubleEndedIterator for BarSteps<'b, 'a, M>
where M: ColorMixer {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done { return None }
        let item = (self.bar.ratio(self.j), self.bar.step_color(self.j));
        if self.i == self.j { self.done = true } else { self.j -= 1 }
        Some(item)
    }
}

/// Bar selection on top of the ratio state.
impl RatioState {
    /// Step of a bar with `steps` steps closest to the ratio of `pair`.
    pub fn selected_step(&self, pair: Pair, steps: usize) -> usize {
        let n = steps.max(1);
        (self.ratio(pair) * n as f64).round() as usize
    }

    /// Click on step `i` of the bar of `pair`: its ratio becomes `i / N`
    /// and the pair becomes active.
    pub fn select_step(&mut self, pair: Pair, i: usize, steps: usize) {
        let n = steps.max(1);
        self.set_ratio(pair, i as f64 / n as f64);
    }

    /// Percentages `(first, second)` shown next to the bar of `pair`.
    pub fn label(&self, pair: Pair) -> (u32, u32) {
        split_percent(self.ratio(pair))
    }
}

/// One step of a rendered bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarStep<Color> {
    pub index: usize,
    /// Weight of the second color.
    pub ratio: f64,
    pub color: Color,
    /// This step is the one matching the pair's ratio.
    pub selected: bool,
    /// Left end, middle or right end of the bar.
    pub marker: bool,
    /// Percentages `(first, second)` of this step.
    pub label: (u32, u32),
}

/// A rendered bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarView<Color> {
    pub pair: Pair,
    pub steps: Vec<BarStep<Color>>,
    pub active_pair: Pair,
    /// Percentages `(first, second)` of the pair's current ratio.
    pub label: (u32, u32),
}

impl<Color> BarView<Color> {
    #[inline]
    pub fn is_active(&self) -> bool { self.pair == self.active_pair }

    /// The selected step (there is exactly one).
    pub fn selected(&self) -> Option<&BarStep<Color>> {
        self.steps.iter().find(|s| s.selected)
    }
}

/// Render the three bars of the palette `colors` with `steps` steps.
pub fn render_bars<M: ColorMixer>(
    mixer: &M, colors: &[M::Color; 3], state: &RatioState, steps: usize,
) -> Vec<BarView<M::Color>> {
    let n = steps.max(1);
    let middle = (n + 1) / 2;
    Pair::ALL.iter().map(|&pair| {
        let bar = MixBar::for_pair(mixer, colors, pair, n);
        let selected = state.selected_step(pair, n);
        let steps = bar.iter().enumerate()
            .map(|(index, (ratio, color))| BarStep {
                index, ratio, color,
                selected: index == selected,
                marker: index == 0 || index == middle || index == n,
                label: split_percent(ratio),
            })
            .collect();
        BarView { pair, steps, active_pair: state.active_pair(),
                  label: state.label(pair) }
    }).collect()
}
