//! Error types for terrain generation

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected parameters or an otherwise impossible mesh.
    #[error("generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_message() {
        let err = Error::Generation("div must be at least 1".to_string());
        assert_eq!(err.to_string(), "generation failed: div must be at least 1");
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> crate::core::Result<()> {
            std::fs::File::open("/definitely/not/a/real/path.json")?;
            Ok(())
        }
        assert!(matches!(open_missing(), Err(Error::Io(_))));
    }
}
