//! Error type shared by generation, configuration and the world session

use std::fmt;

/// Precondition violations and configuration failures
///
/// Generation is pure, so none of these are retried: the same arguments fail
/// the same way every time.
#[derive(Debug)]
pub enum GenError {
    /// `derive_count` called with a zero upper bound
    ZeroMaxCount,
    /// Ring generation asked for zero key points
    ZeroKeyPointCount,
    /// Gap or grid spacing that is zero, negative or NaN
    NonPositiveGap { max_gap: f32 },
    /// Irregularity outside `[0, 1]`
    IrregularityOutOfRange { irregularity: f32 },
    /// Ring radius that is zero, negative or NaN
    NonPositiveRadius { radius: f32 },
    /// A settings field failed validation
    InvalidConfig { field: &'static str, reason: String },
    /// Settings JSON could not be parsed or written
    Config(serde_json::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxCount => write!(f, "max obstacle count must be at least 1"),
            Self::ZeroKeyPointCount => write!(f, "key point count must be at least 1"),
            Self::NonPositiveGap { max_gap } => {
                write!(f, "gap spacing must be positive, got {max_gap}")
            }
            Self::IrregularityOutOfRange { irregularity } => {
                write!(f, "irregularity must be within [0, 1], got {irregularity}")
            }
            Self::NonPositiveRadius { radius } => {
                write!(f, "ring radius must be positive, got {radius}")
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
            Self::Config(err) => write!(f, "settings json: {err}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GenError>;
