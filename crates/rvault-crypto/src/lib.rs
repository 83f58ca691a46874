//! Cryptographic primitives for rvault.
//!
//! Provides the process-wide [`SecretKey`] and the [`IntegrityTagger`] that
//! computes and checks HMAC-SHA256 tags over replica content.
//!
//! All crypto operations wrap established libraries; no custom cryptography.

pub mod key;
pub mod tagger;

pub use key::{KeyError, SecretKey, DEFAULT_SECRET_ENV};
pub use tagger::IntegrityTagger;
