//! Crate error type.
//!
//! Illegal moves are not errors: the engine rejects them silently.
//! `Error` covers text that fails to parse into a domain value.

use thiserror::Error;

/// Parse failures for boards, modes, themes and cell indices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid board: {0:?}")]
    InvalidBoard(String),

    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("invalid cell index: {0:?} (expected 0-8)")]
    InvalidIndex(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::UnknownTheme("blue".into()).to_string(),
            "unknown theme: \"blue\""
        );
        assert_eq!(
            Error::InvalidIndex("9".into()).to_string(),
            "invalid cell index: \"9\" (expected 0-8)"
        );
    }
}
