//! Foundation types for rvault.
//!
//! This crate provides the identity and integrity value types shared by every
//! other rvault crate.
//!
//! # Key Types
//!
//! - [`ReplicaId`] -- Stable identifier of one replica slot, assigned at construction
//! - [`IntegrityTag`] -- Fixed-length keyed authentication code over replica content

pub mod error;
pub mod replica_id;
pub mod tag;

pub use error::TypeError;
pub use replica_id::ReplicaId;
pub use tag::{IntegrityTag, TAG_LEN};
