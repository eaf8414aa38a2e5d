//! avatar_kit
//!
//! A small Rust library for deriving what an avatar widget displays: initials
//! from a label, a stable background color keyed on the label, and Gravatar
//! image URLs. Pairs with the `avatar` CLI.
//!
//! ### Features
//! - Unicode-aware initials (`"PrimeFaces Rocks"` → `"PR"`)
//! - Deterministic `hsla()` colors, one of 40 hues per label
//! - MD5 (or SHA-256) Gravatar keys and URLs with fallback handling
//! - Load avatar descriptions from JSON, save derived parts as JSON or CSV
//!
//! ### Example
//! ```
//! use avatar_kit::{AvatarSpec, avatar, color, gravatar, initials};
//!
//! assert_eq!(initials::extract_initials(Some("Ada Lovelace")).as_deref(), Some("AL"));
//! let css = color::derive_background_color("Ada Lovelace", 100, 40, 100);
//! assert!(css.starts_with("background-color:hsla("));
//! let hash = gravatar::hash_identity("ada@example.com")?;
//! assert_eq!(hash.len(), 32);
//!
//! let mut spec = AvatarSpec::with_label("Ada Lovelace");
//! spec.gravatar = Some("ada@example.com".into());
//! let parts = avatar::derive_parts(&spec)?;
//! assert!(parts.image_url.unwrap().ends_with("?d=blank"));
//! # Ok::<(), avatar_kit::AvatarError>(())
//! ```

pub mod avatar;
pub mod color;
pub mod error;
pub mod gravatar;
pub mod initials;
pub mod models;
pub mod storage;

pub use color::HslaColor;
pub use error::{AvatarError, Result};
pub use gravatar::HashAlgorithm;
pub use models::{AvatarParts, AvatarSpec, DefaultContent, Shape, Size};
