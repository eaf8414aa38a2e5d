use thiserror::Error;

/// Errors surfaced by the avatar derivation functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AvatarError {
    /// A digest was requested by a name this crate does not provide.
    #[error("unsupported hash algorithm: {0}")]
    InvalidAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, AvatarError>;
