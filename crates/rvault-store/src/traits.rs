use rvault_types::ReplicaId;

use crate::error::StoreResult;
use crate::replica::ReplicaSnapshot;
use crate::report::{RestoreOutcome, VerifyReport};

/// A fixed set of tagged replicas of one logical value.
///
/// All implementations must satisfy these invariants:
/// - After `update_all` or `restore` returns, every replica it touched has a
///   tag that matches its content.
/// - `corrupt` changes exactly one replica's content and never its tag.
/// - `read_all`, `read`, `verify` and `check_content` never mutate.
/// - A failed operation leaves every replica unchanged.
/// - No caller ever observes a partially applied write.
pub trait ReplicaStore: Send + Sync {
    /// Number of replicas. Fixed for the lifetime of the store.
    fn len(&self) -> usize;

    /// Returns `true` if the store has no replicas.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current content of every replica, in id order.
    fn read_all(&self) -> Vec<ReplicaSnapshot>;

    /// Current content of one replica.
    fn read(&self, id: ReplicaId) -> StoreResult<ReplicaSnapshot>;

    /// Authenticated write: set every replica to `content` and retag it.
    ///
    /// Returns the replicas after the write.
    fn update_all(&self, content: &str) -> StoreResult<Vec<ReplicaSnapshot>>;

    /// Out-of-band write: set one replica's content without retagging.
    ///
    /// Returns the mutated replica.
    fn corrupt(&self, id: ReplicaId, content: &str) -> StoreResult<ReplicaSnapshot>;

    /// Recompute every tag and report the replicas that disagree.
    fn verify(&self) -> VerifyReport;

    /// Ids of replicas whose stored tag authenticates `content`.
    ///
    /// This lets a client check a value it holds against the store without
    /// ever seeing a tag.
    fn check_content(&self, content: &str) -> StoreResult<Vec<ReplicaId>>;

    /// Repair all replicas to the plurality content and retag them.
    fn restore(&self) -> StoreResult<RestoreOutcome>;
}
