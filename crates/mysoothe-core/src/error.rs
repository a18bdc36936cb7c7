//! Error types for MySoothe

use thiserror::Error;

/// Main error type for MySoothe operations
#[derive(Error, Debug)]
pub enum SootheError {
    /// No string table carries this key
    #[error("Unknown text resource: {0}")]
    UnknownText(String),

    /// Image key is not part of the bundled drawables
    #[error("Unknown image resource: {0}")]
    UnknownImage(String),

    /// Locale tag could not be parsed
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Theme mode is neither light nor dark
    #[error("Invalid theme mode: {0}")]
    InvalidThemeMode(String),

    /// Reading an asset from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MySoothe operations
pub type Result<T> = std::result::Result<T, SootheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SootheError::UnknownText("nope".to_string());
        assert_eq!(err.to_string(), "Unknown text resource: nope");

        let err = SootheError::InvalidThemeMode("sepia".to_string());
        assert_eq!(err.to_string(), "Invalid theme mode: sepia");
    }

    #[test]
    fn io_error_converts() {
        fn read() -> Result<Vec<u8>> {
            Ok(std::fs::read("/definitely/not/here.jpg")?)
        }
        assert!(matches!(read(), Err(SootheError::Io(_))));
    }
}
