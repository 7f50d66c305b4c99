//! Error types shared across sensconv crates.

/// Top-level error type for sensconv operations.
#[derive(Debug, thiserror::Error)]
pub enum SensconvError {
    #[error("Unknown platform '{name}' (expected one of: windows, kde)")]
    UnknownPlatform { name: String },

    #[error("Invalid {platform} sensitivity '{input}': {reason}")]
    InvalidValue {
        platform: String,
        input: String,
        reason: String,
    },

    #[error("{platform} sensitivity {value} is out of range (expected {expected})")]
    OutOfRange {
        platform: String,
        value: String,
        expected: String,
    },

    #[error("Expected a {expected} sensitivity, got {found}")]
    PlatformMismatch { expected: String, found: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using SensconvError.
pub type SensconvResult<T> = Result<T, SensconvError>;

impl SensconvError {
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        Self::UnknownPlatform { name: name.into() }
    }

    pub fn invalid_value(
        platform: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            platform: platform.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(
        platform: impl Into<String>,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            platform: platform.into(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    pub fn platform_mismatch(expected: impl Into<String>, found: impl ToString) -> Self {
        Self::PlatformMismatch {
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error came from the user's input rather than the environment.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlatform { .. } | Self::InvalidValue { .. } | Self::OutOfRange { .. }
        )
    }
}
