//! Tunables of the mixing engine.
//!
//! Every field has a default matching the reference behavior, so a
//! configuration file only needs to list what it changes.

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Number of discrete steps of a pairwise bar (`N`).
pub const DEFAULT_BAR_STEPS: usize = 40;
/// At most this many patches span the viewport width.
pub const DEFAULT_MAX_PATCHES_ACROSS: u32 = 250;
/// Tolerance `ε` of the inside-the-triangle test.
pub const DEFAULT_EDGE_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    /// Steps `N` of each pairwise bar; the bar shows `N + 1` colors.
    pub bar_steps: usize,
    /// Bound on the number of patches across the field width.  The
    /// patch side is `max(1, floor(width / max_patches_across))`.
    pub max_patches_across: u32,
    /// A point is inside the triangle iff all its weights are `≥ -edge_tolerance`.
    pub edge_tolerance: f64,
    /// Ratio every pair starts with.
    pub initial_ratio: f64,
}

impl Default for MixConfig {
    fn default() -> Self {
        MixConfig {
            bar_steps: DEFAULT_BAR_STEPS,
            max_patches_across: DEFAULT_MAX_PATCHES_ACROSS,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            initial_ratio: 0.5,
        }
    }
}

impl MixConfig {
    /// Read a configuration from JSON.  Missing fields take their
    /// default value.  The result is validated.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: MixConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive the engine.
    pub fn validate(&self) -> Result<()> {
        if self.bar_steps == 0 {
            return Err(Error::InvalidConfig("bar_steps must be positive"));
        }
        if self.max_patches_across == 0 {
            return Err(Error::InvalidConfig(
                "max_patches_across must be positive"));
        }
        if !self.edge_tolerance.is_finite() || self.edge_tolerance < 0. {
            return Err(Error::InvalidConfig(
                "edge_tolerance must be finite and non-negative"));
        }
        if !(0. ..= 1.).contains(&self.initial_ratio) {
            return Err(Error::InvalidConfig("initial_ratio must be in [0, 1]"));
        }
        Ok(())
    }
}
