use std::fmt;

/// Errors raised while resolving or installing a [`DpiConfig`](crate::DpiConfig).
///
/// Coordinate conversions never fail; only configuration can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A DPI mode string that is neither `platform` nor `uniform`.
    UnknownMode {
        value: String,
    },
    /// The process-wide configuration was already installed.
    AlreadyInstalled,
}

impl ConfigError {
    pub(crate) fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode { value: value.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode { value } => write!(
                f,
                "unknown DPI mode {value:?} (expected \"platform\" or \"uniform\")"
            ),
            Self::AlreadyInstalled => write!(f, "DPI configuration already installed"),
        }
    }
}

impl std::error::Error for ConfigError {}
