use std::sync::{Arc, RwLock};

use rvault_crypto::IntegrityTagger;
use rvault_types::ReplicaId;

use crate::error::{StoreError, StoreResult};
use crate::replica::{Replica, ReplicaSnapshot, ReplicaState};
use crate::report::{RestoreOutcome, VerifyReport};
use crate::traits::ReplicaStore;
use crate::vote::plurality;

/// In-memory replica store.
///
/// Replicas live in a fixed arena where id `k` occupies slot `k - 1`. The
/// whole arena sits behind a single `RwLock`: writes hold the write lock for
/// the entire operation, reads hold the read lock, so nobody can see a set
/// that is half updated.
pub struct InMemoryReplicaStore {
    replicas: RwLock<Vec<Replica>>,
    tagger: Arc<IntegrityTagger>,
}

impl InMemoryReplicaStore {
    /// Create `count` authentic replicas, all holding `initial`.
    pub fn new(count: usize, initial: &str, tagger: Arc<IntegrityTagger>) -> StoreResult<Self> {
        require_content(initial)?;
        let too_many =
            || StoreError::InvalidInput(format!("replica count {count} exceeds id range"));
        // Checked up front so an oversized count fails before anything is allocated.
        if let Some(last) = count.checked_sub(1) {
            ReplicaId::from_slot(last).ok_or_else(too_many)?;
        }
        let replicas = (0..count)
            .map(|slot| ReplicaId::from_slot(slot).map(|id| Replica::new(id, initial, &tagger)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(too_many)?;
        tracing::debug!(count, "replica store initialized");
        Ok(Self {
            replicas: RwLock::new(replicas),
            tagger,
        })
    }

    /// Per-replica authenticity, in id order.
    pub fn states(&self) -> Vec<(ReplicaId, ReplicaState)> {
        let replicas = self.replicas.read().expect("lock poisoned");
        replicas
            .iter()
            .map(|r| (r.id(), r.state(&self.tagger)))
            .collect()
    }
}

fn require_content(content: &str) -> StoreResult<()> {
    if content.is_empty() {
        return Err(StoreError::InvalidInput("content is required".into()));
    }
    Ok(())
}

fn slot_of(id: ReplicaId, len: usize) -> StoreResult<usize> {
    id.slot()
        .filter(|slot| *slot < len)
        .ok_or(StoreError::NotFound(id))
}

fn snapshot_all(replicas: &[Replica]) -> Vec<ReplicaSnapshot> {
    replicas.iter().map(Replica::snapshot).collect()
}

impl ReplicaStore for InMemoryReplicaStore {
    fn len(&self) -> usize {
        self.replicas.read().expect("lock poisoned").len()
    }

    fn read_all(&self) -> Vec<ReplicaSnapshot> {
        let replicas = self.replicas.read().expect("lock poisoned");
        snapshot_all(&replicas)
    }

    fn read(&self, id: ReplicaId) -> StoreResult<ReplicaSnapshot> {
        let replicas = self.replicas.read().expect("lock poisoned");
        let slot = slot_of(id, replicas.len())?;
        Ok(replicas[slot].snapshot())
    }

    fn update_all(&self, content: &str) -> StoreResult<Vec<ReplicaSnapshot>> {
        require_content(content)?;
        let tag = self.tagger.tag(content.as_bytes());
        let mut replicas = self.replicas.write().expect("lock poisoned");
        for replica in replicas.iter_mut() {
            replica.set_authentic(content.to_string(), tag);
        }
        tracing::info!(replicas = replicas.len(), "authenticated update applied");
        Ok(snapshot_all(&replicas))
    }

    fn corrupt(&self, id: ReplicaId, content: &str) -> StoreResult<ReplicaSnapshot> {
        require_content(content)?;
        let mut replicas = self.replicas.write().expect("lock poisoned");
        let slot = slot_of(id, replicas.len())?;
        let replica = &mut replicas[slot];
        replica.set_unauthenticated(content.to_string());
        tracing::warn!(replica = %id, "replica content overwritten without retagging");
        Ok(replica.snapshot())
    }

    fn verify(&self) -> VerifyReport {
        let replicas = self.replicas.read().expect("lock poisoned");
        let offenders: Vec<ReplicaId> = replicas
            .iter()
            .filter(|r| r.state(&self.tagger) == ReplicaState::Tampered)
            .map(Replica::id)
            .collect();
        if offenders.is_empty() {
            tracing::debug!("all replicas authentic");
        } else {
            tracing::warn!(?offenders, "tampering detected");
        }
        VerifyReport::from_offenders(offenders)
    }

    fn check_content(&self, content: &str) -> StoreResult<Vec<ReplicaId>> {
        require_content(content)?;
        let replicas = self.replicas.read().expect("lock poisoned");
        Ok(replicas
            .iter()
            .filter(|r| self.tagger.matches(content.as_bytes(), r.tag()))
            .map(Replica::id)
            .collect())
    }

    fn restore(&self) -> StoreResult<RestoreOutcome> {
        let mut replicas = self.replicas.write().expect("lock poisoned");
        let winner =
            plurality(replicas.iter().map(Replica::content)).ok_or(StoreError::EmptyStore)?;
        let restored_value = winner.value.to_string();
        let votes = winner.count;

        let tag = self.tagger.tag(restored_value.as_bytes());
        let mut repaired = Vec::new();
        for replica in replicas.iter_mut() {
            if replica.content() != restored_value
                || replica.state(&self.tagger) == ReplicaState::Tampered
            {
                repaired.push(replica.id());
            }
            replica.set_authentic(restored_value.clone(), tag);
        }
        tracing::info!(votes, ?repaired, "replicas restored by plurality vote");

        Ok(RestoreOutcome {
            restored_value,
            votes,
            repaired,
            replicas: snapshot_all(&replicas),
        })
    }
}

impl std::fmt::Debug for InMemoryReplicaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryReplicaStore")
            .field("replica_count", &self.len())
            .finish()
    }
}
