//! Error types for folio.

use std::io;

/// Errors produced while setting up a folio terminal.
///
/// Command dispatch never returns these: user mistakes are reported as
/// history lines. Only loading configuration or content can fail.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("recall_capacity must be at least 1".into());
        assert_eq!(
            format!("{e}"),
            "config error: recall_capacity must be at least 1"
        );
    }

    #[test]
    fn content_error_display() {
        let e = FolioError::Content("not a directory: /nope".into());
        assert_eq!(format!("{e}"), "content error: not a directory: /nope");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Content("oops".into()));
        assert!(r.is_err());
    }
}
