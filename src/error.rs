use std::fmt;

/// Errors raised while building a [`PixelBuffer`](crate::PixelBuffer) from a
/// [`PixelSource`](crate::PixelSource).
///
/// Both kinds are raised synchronously at construction time; there is no
/// partially constructed buffer to clean up. Per-pixel accessors never
/// return errors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    /// Raw channel data arrived without a usable size: neither dimension was
    /// given, a derived dimension came out zero, or the stated size does not
    /// fit the data.
    Configuration { reason: String },
    /// The source could not produce RGBA data for the request, e.g. a surface
    /// declining a region it does not cover.
    UnsupportedSource { reason: String },
}

impl SourceError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => write!(f, "source configuration: {reason}"),
            Self::UnsupportedSource { reason } => write!(f, "unsupported source: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}
