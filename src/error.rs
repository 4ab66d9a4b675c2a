use std::fmt;

/// Errors raised at the edges of the engine: parsing colors and
/// loading configurations.  Geometry, ratios and rendering never fail.
#[derive(Debug)]
pub enum Error {
    /// A pair index outside `0 ..= 2`.
    PairOutOfRange(usize),
    /// A configuration value that cannot drive the engine.
    InvalidConfig(&'static str),
    /// The configuration text is not valid JSON for [`MixConfig`].
    ///
    /// [`MixConfig`]: crate::MixConfig
    Config(serde_json::Error),
    /// A color input the [`ColorMixer`] refused to parse.
    ///
    /// [`ColorMixer`]: crate::ColorMixer
    Color(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            PairOutOfRange(i) => write!(f, "pair index {i} not in 0..=2"),
            InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Config(e) => write!(f, "cannot read configuration: {e}"),
            Color(msg) => write!(f, "cannot parse color: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self { Error::Config(e) }
}
