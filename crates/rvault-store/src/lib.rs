//! Replicated value store for rvault.
//!
//! Holds a fixed set of replicas of one logical value, each paired with an
//! integrity tag computed by [`rvault_crypto::IntegrityTagger`]. The store can
//! detect replicas whose content no longer matches their tag and repair the
//! whole set by plurality vote over content.
//!
//! # Operations
//!
//! - `read_all` -- current content of every replica, in id order
//! - `update_all` -- authenticated write: new content and fresh tags everywhere
//! - `corrupt` -- unauthenticated write to one replica, tag left stale
//! - `verify` -- list replicas whose tag does not match their content
//! - `restore` -- plurality vote over content, then rewrite and retag all
//!
//! # Design Rules
//!
//! 1. Replicas are created once, with ids `1..=N`, and never added or removed.
//! 2. Only `update_all` and `restore` recompute tags.
//! 3. Every operation runs inside one critical section over the whole set.
//! 4. Arguments are validated before anything is mutated.
//! 5. Restore counts content, not tag validity; ties go to the value seen first.

pub mod error;
pub mod memory;
pub mod replica;
pub mod report;
pub mod traits;
pub mod vote;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReplicaStore;
pub use replica::{Replica, ReplicaSnapshot, ReplicaState};
pub use report::{RestoreOutcome, VerifyReport};
pub use traits::ReplicaStore;
pub use vote::{plurality, Vote};
