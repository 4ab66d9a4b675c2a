//! When to recompute bars and field.
//!
//! Ratio and color changes are applied at once.  Resizes come in
//! bursts while a window is dragged; they are held until the next
//! display refresh and only the last size of a burst is rendered.

use log::trace;
use crate::Viewport;

/// What changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A ratio was selected on a bar.
    Ratio,
    /// The palette was replaced.
    Colors,
    /// The field now has this size.
    Resize(Viewport),
}

/// What the host has to do after a [`Trigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Recompute right away.
    Now,
    /// Call [`RenderScheduler::tick`] on the next display refresh.
    NextFrame,
    /// A refresh is already awaited; it will use the new size.
    Coalesced,
    /// Nothing changed.
    Skip,
}

#[derive(Clone, Debug)]
pub struct RenderScheduler {
    applied: Viewport,
    pending: Option<Viewport>,
}

impl RenderScheduler {
    /// Scheduler of a field currently rendered on `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        RenderScheduler { applied: viewport, pending: None }
    }

    pub fn schedule(&mut self, trigger: Trigger) -> Schedule {
        match trigger {
            Trigger::Ratio | Trigger::Colors => Schedule::Now,
            Trigger::Resize(v) => {
                if self.pending.is_some() {
                    trace!("resize to {}×{} coalesced", v.width, v.height);
                    self.pending = Some(v);
                    Schedule::Coalesced
                } else if v == self.applied {
                    Schedule::Skip
                } else {
                    self.pending = Some(v);
                    Schedule::NextFrame
                }
            }
        }
    }

    /// Display refresh: returns the viewport to render if a resize is
    /// waiting and changes the size.
    pub fn tick(&mut self) -> Option<Viewport> {
        let v = self.pending.take()?;
        if v == self.applied { return None }
        self.applied = v;
        Some(v)
    }

    /// Viewport of the last recomputation.
    #[inline]
    pub fn viewport(&self) -> Viewport { self.applied }

    #[inline]
    pub fn is_pending(&self) -> bool { self.pending.is_some() }
}
