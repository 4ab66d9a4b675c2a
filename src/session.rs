//! The state of an interactive session and its entry points.
//!
//! Each UI event maps to a method: it updates the state and returns
//! what must be drawn again.  Nothing here depends on a drawing
//! surface.

use log::{debug, warn};
use crate::{BarView, ColorMixer, Error, MixConfig, Pair, Patch, Point,
            RatioState, RenderScheduler, Result, Sample, Schedule, Trigger,
            Viewport};
use crate::{bar, field};

/// Everything to draw after a recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<Color> {
    pub viewport: Viewport,
    pub bars: Vec<BarView<Color>>,
    pub field: Vec<Patch<Color>>,
}

/// Palette, ratios and viewport of a mixing session.
pub struct Session<M: ColorMixer> {
    mixer: M,
    config: MixConfig,
    colors: [M::Color; 3],
    ratios: RatioState,
    scheduler: RenderScheduler,
}

impl<M: ColorMixer> Session<M> {
    /// Start a session with the palette `colors`.  The field is empty
    /// until the first [`Session::on_resize`].
    pub fn new(mixer: M, colors: [M::Color; 3], config: MixConfig)
               -> Result<Self> {
        config.validate()?;
        let ratios = RatioState::new(config.initial_ratio);
        Ok(Session { mixer, config, colors, ratios,
                     scheduler: RenderScheduler::new(Viewport::default()) })
    }

    /// Start a session with the palette parsed from `texts`.
    pub fn parse(mixer: M, texts: [&str; 3], config: MixConfig)
                 -> Result<Self> {
        let colors = parse_palette(&mixer, texts)?;
        Self::new(mixer, colors, config)
    }

    #[inline]
    pub fn mixer(&self) -> &M { &self.mixer }

    #[inline]
    pub fn config(&self) -> &MixConfig { &self.config }

    /// The last valid palette.
    #[inline]
    pub fn colors(&self) -> &[M::Color; 3] { &self.colors }

    #[inline]
    pub fn ratios(&self) -> &RatioState { &self.ratios }

    /// Viewport of the field as last rendered.
    #[inline]
    pub fn viewport(&self) -> Viewport { self.scheduler.viewport() }

    /// The palette as `#RRGGBB` strings.
    pub fn palette_hex(&self) -> [String; 3] {
        let [a, b, c] = &self.colors;
        [self.mixer.to_hex(a), self.mixer.to_hex(b), self.mixer.to_hex(c)]
    }

    /// The color inputs changed.  If one of them does not parse, the
    /// previous palette is kept and the error returned.
    pub fn update_colors(&mut self, texts: [&str; 3])
                         -> Result<Frame<M::Color>> {
        match parse_palette(&self.mixer, texts) {
            Ok(colors) => Ok(self.set_colors(colors)),
            Err(e) => {
                warn!("{e}; keeping the previous palette");
                Err(e)
            }
        }
    }

    /// Replace the palette.
    pub fn set_colors(&mut self, colors: [M::Color; 3]) -> Frame<M::Color> {
        self.colors = colors;
        self.recompute(Trigger::Colors)
    }

    /// Click on step `step` of the bar of `pair`.
    pub fn on_step_click(&mut self, pair: Pair, step: usize)
                         -> Frame<M::Color> {
        self.ratios.select_step(pair, step, self.config.bar_steps);
        self.recompute(Trigger::Ratio)
    }

    /// The field is now `viewport` large.  The field is recomputed by
    /// the next [`Session::on_frame`], whatever the number of resizes
    /// in between.
    pub fn on_resize(&mut self, viewport: Viewport) -> Schedule {
        self.scheduler.schedule(Trigger::Resize(viewport))
    }

    /// Display refresh.  Returns a frame if a resize was waiting.
    pub fn on_frame(&mut self) -> Option<Frame<M::Color>> {
        self.scheduler.tick()?;
        Some(self.render())
    }

    fn recompute(&mut self, trigger: Trigger) -> Frame<M::Color> {
        let schedule = self.scheduler.schedule(trigger);
        debug_assert_eq!(schedule, Schedule::Now);
        self.render()
    }

    /// Bars and field of the current state.
    pub fn render(&self) -> Frame<M::Color> {
        let viewport = self.viewport();
        let frame = Frame { viewport, bars: self.render_bars(),
                            field: self.render_field() };
        debug!("frame {}×{}: {} patches, active pair {:?}",
               viewport.width, viewport.height, frame.field.len(),
               self.ratios.active_pair());
        frame
    }

    pub fn render_bars(&self) -> Vec<BarView<M::Color>> {
        bar::render_bars(&self.mixer, &self.colors, &self.ratios,
                         self.config.bar_steps)
    }

    pub fn render_field(&self) -> Vec<Patch<M::Color>> {
        field::rasterize(&self.mixer, &self.colors, self.viewport(),
                         &self.config)
    }

    /// Blend under the pixel `p` of the field, `None` outside the
    /// triangle or before the first resize.
    pub fn sample_at(&self, p: Point) -> Option<Sample<M::Color>> {
        let triangle = self.viewport().triangle()?;
        field::sample_at(&self.mixer, &self.colors, &triangle, p,
                         self.config.edge_tolerance)
    }
}

fn parse_palette<M: ColorMixer>(mixer: &M, texts: [&str; 3])
                                -> Result<[M::Color; 3]> {
    let parse = |t: &str| mixer.parse(t)
        .map_err(|e| Error::Color(format!("{:?}: {e}", t.trim())));
    Ok([parse(texts[0])?, parse(texts[1])?, parse(texts[2])?])
}
