use std::{fmt, io};

/// Crate-wide `Result` type using [`FolioshError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, FolioshError>;

/// Top-level error type for foliosh operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum FolioshError {
    /// Configuration errors.
    Config(ConfigError),

    /// Theme persistence and parsing errors.
    Theme(ThemeError),

    /// Content data errors (embedded datasets).
    Content(ContentError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/// Theme-specific errors.
#[derive(Debug)]
pub enum ThemeError {
    /// Theme name is not one of dark, light, system.
    UnknownTheme(String),

    /// Persisting the theme failed.
    PersistFailed(String),
}

/// Content data errors.
#[derive(Debug)]
pub enum ContentError {
    /// Embedded dataset could not be decoded.
    InvalidDataset { name: String, reason: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for FolioshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioshError::Config(e) => write!(f, "Configuration error: {e}"),
            FolioshError::Theme(e) => write!(f, "Theme error: {e}"),
            FolioshError::Content(e) => write!(f, "Content error: {e}"),
            FolioshError::Io(e) => write!(f, "I/O error: {e}"),
            FolioshError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownTheme(name) => write!(f, "Unknown theme: {name}"),
            ThemeError::PersistFailed(msg) => write!(f, "Failed to persist theme: {msg}"),
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::InvalidDataset { name, reason } => {
                write!(f, "Invalid embedded dataset '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for FolioshError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for ThemeError {}
impl std::error::Error for ContentError {}

/* ========================= Conversions to FolioshError ========================= */

impl From<io::Error> for FolioshError {
    fn from(err: io::Error) -> Self {
        FolioshError::Io(err)
    }
}

impl From<ConfigError> for FolioshError {
    fn from(err: ConfigError) -> Self {
        FolioshError::Config(err)
    }
}

impl From<ThemeError> for FolioshError {
    fn from(err: ThemeError) -> Self {
        FolioshError::Theme(err)
    }
}

impl From<ContentError> for FolioshError {
    fn from(err: ContentError) -> Self {
        FolioshError::Content(err)
    }
}

impl From<String> for FolioshError {
    fn from(msg: String) -> Self {
        FolioshError::Generic(msg)
    }
}

impl From<&str> for FolioshError {
    fn from(msg: &str) -> Self {
        FolioshError::Generic(msg.to_owned())
    }
}

impl From<rustyline::error::ReadlineError> for FolioshError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        FolioshError::Generic(format!("Readline error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_theme() {
        let err = FolioshError::Theme(ThemeError::UnknownTheme("sepia".to_string()));
        assert_eq!(err.to_string(), "Theme error: Unknown theme: sepia");
    }

    #[test]
    fn test_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "history.max_size".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for field 'history.max_size'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: FolioshError = io_err.into();
        assert!(matches!(err, FolioshError::Io(_)));
    }
}
