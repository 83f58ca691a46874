use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier of a replica slot.
///
/// Ids are assigned once when a store is built, counting up from 1 in
/// creation order, and never change afterwards. On the wire a `ReplicaId` is a
/// bare JSON number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplicaId(u32);

impl ReplicaId {
    /// The id of the first replica in any store.
    pub const FIRST: Self = Self(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric id.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-based slot position for this id, or `None` for id 0.
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// The id that lives at a zero-based slot position, or `None` when the
    /// slot is beyond the largest representable id.
    pub fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok()?.checked_add(1).map(Self)
    }
}

impl fmt::Debug for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReplicaId({})", self.0)
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReplicaId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| TypeError::InvalidReplicaId(s.to_string()))
    }
}

impl From<u32> for ReplicaId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
