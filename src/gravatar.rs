//! Gravatar identity hashes and image URLs.
//!
//! Gravatar addresses images by a hex digest of the trimmed, lower-cased email
//! address. MD5 is the long-standing default; SHA-256 is also accepted by the
//! service. The digest is an opaque lookup key only and carries no security
//! property.
//!
//! See <https://docs.gravatar.com/api/avatars/images/>.
//!
//! Typical usage:
//! ```
//! # use avatar_kit::gravatar::gravatar_url;
//! let url = gravatar_url("test@example.com", None, true)?;
//! assert_eq!(
//!     url,
//!     "https://www.gravatar.com/avatar/55502f40dc8b7c769880b10874abc9d0?d=blank"
//! );
//! # Ok::<(), avatar_kit::AvatarError>(())
//! ```
use crate::error::{AvatarError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

pub const GRAVATAR_URL: &str = "https://www.gravatar.com/avatar/";

/// Query used when no configuration was given but a blank fallback image is allowed.
pub const BLANK_FALLBACK: &str = "d=blank";

/// Digest used to turn an identity into a Gravatar key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Lowercase hex digest of `bytes`.
    fn hex_digest(&self, bytes: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(bytes)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            _ => {
                log::warn!("rejected hash algorithm {s:?}");
                Err(AvatarError::InvalidAlgorithm(s.to_string()))
            }
        }
    }
}

/// Trim and lower-case an identity the way Gravatar expects it.
pub fn normalize_identity(identity: &str) -> String {
    identity.trim().to_lowercase()
}

/// MD5 Gravatar key of `identity`: 32 lowercase hex characters.
///
/// ### Errors
/// - [`AvatarError::InvalidAlgorithm`] if the digest is unavailable. MD5 is
///   always compiled in, so callers may treat this as unreachable.
pub fn hash_identity(identity: &str) -> Result<String> {
    hash_identity_with(identity, HashAlgorithm::Md5.name())
}

/// Gravatar key of `identity` using the digest named `algorithm` (`md5` or `sha256`).
///
/// ### Errors
/// - [`AvatarError::InvalidAlgorithm`] for any other name.
pub fn hash_identity_with(identity: &str, algorithm: &str) -> Result<String> {
    let algorithm = algorithm.parse::<HashAlgorithm>()?;
    Ok(hash_with(identity, algorithm))
}

fn hash_with(identity: &str, algorithm: HashAlgorithm) -> String {
    algorithm.hex_digest(normalize_identity(identity).as_bytes())
}

/// Whether `s` is absent or consists only of whitespace.
pub(crate) fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

/// Full image URL for `email` using MD5.
///
/// The query string is `config` verbatim when it is not blank. A blank
/// `config` becomes [`BLANK_FALLBACK`] when `fallback` is set, and no query
/// otherwise.
pub fn gravatar_url(email: &str, config: Option<&str>, fallback: bool) -> Result<String> {
    gravatar_url_with(email, config, fallback, HashAlgorithm::Md5)
}

/// Like [`gravatar_url`] with an explicit digest.
pub fn gravatar_url_with(
    email: &str,
    config: Option<&str>,
    fallback: bool,
    algorithm: HashAlgorithm,
) -> Result<String> {
    let query = if !is_blank(config) {
        config
    } else if fallback {
        Some(BLANK_FALLBACK)
    } else {
        None
    };

    let mut url = String::from(GRAVATAR_URL);
    url.push_str(&hash_with(email, algorithm));
    if let Some(q) = query {
        url.push('?');
        url.push_str(q);
    }
    log::debug!("gravatar url ({algorithm}): {url}");
    Ok(url)
}
