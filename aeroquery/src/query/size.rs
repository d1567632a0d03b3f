//! Coarse airport size classification.

use std::fmt;
use std::str::FromStr;

use crate::config::QueryConfig;

/// Small / medium / large bucket derived from the numeric `size` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    /// Classify with the default thresholds.
    ///
    /// `small` below 1000, `medium` from 1000 to 3499, `large` from 3500.
    ///
    /// # Example
    ///
    /// ```
    /// use aeroquery::query::SizeBucket;
    ///
    /// assert_eq!(SizeBucket::classify(999.0), SizeBucket::Small);
    /// assert_eq!(SizeBucket::classify(1000.0), SizeBucket::Medium);
    /// assert_eq!(SizeBucket::classify(3500.0), SizeBucket::Large);
    /// ```
    pub fn classify(size: f64) -> Self {
        Self::classify_with(size, &QueryConfig::default())
    }

    /// Classify with the thresholds from `config`.
    pub fn classify_with(size: f64, config: &QueryConfig) -> Self {
        if size >= config.large_min_size() {
            Self::Large
        } else if size >= config.medium_min_size() {
            Self::Medium
        } else {
            // NaN lands here as well
            Self::Small
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized size bucket name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown size bucket '{0}' (expected small, medium or large)")]
pub struct UnknownSizeError(pub String);

impl FromStr for SizeBucket {
    type Err = UnknownSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(UnknownSizeError(s.to_string())),
        }
    }
}
