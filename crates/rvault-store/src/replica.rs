use serde::{Deserialize, Serialize};

use rvault_crypto::IntegrityTagger;
use rvault_types::{IntegrityTag, ReplicaId};

/// Whether a replica's tag currently authenticates its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplicaState {
    Authentic,
    Tampered,
}

/// One stored copy of the logical value.
#[derive(Clone, Debug)]
pub struct Replica {
    id: ReplicaId,
    content: String,
    tag: IntegrityTag,
}

impl Replica {
    /// Create an authentic replica.
    pub fn new(id: ReplicaId, content: impl Into<String>, tagger: &IntegrityTagger) -> Self {
        let content = content.into();
        let tag = tagger.tag(content.as_bytes());
        Self { id, content, tag }
    }

    pub fn id(&self) -> ReplicaId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn tag(&self) -> &IntegrityTag {
        &self.tag
    }

    /// Replace content and tag together.
    pub(crate) fn set_authentic(&mut self, content: String, tag: IntegrityTag) {
        self.content = content;
        self.tag = tag;
    }

    /// Replace content and leave the old tag in place.
    pub(crate) fn set_unauthenticated(&mut self, content: String) {
        self.content = content;
    }

    pub fn state(&self, tagger: &IntegrityTagger) -> ReplicaState {
        if tagger.matches(self.content.as_bytes(), &self.tag) {
            ReplicaState::Authentic
        } else {
            ReplicaState::Tampered
        }
    }

    pub fn snapshot(&self) -> ReplicaSnapshot {
        ReplicaSnapshot {
            id: self.id,
            content: self.content.clone(),
        }
    }
}

/// Outward view of a replica. Tags are never part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaSnapshot {
    pub id: ReplicaId,
    pub content: String,
}
