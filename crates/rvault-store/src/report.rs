use rvault_types::ReplicaId;

use crate::replica::ReplicaSnapshot;

/// Result of checking every replica's tag against its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    /// `true` iff `offenders` is empty.
    pub valid: bool,
    /// Replicas whose tag does not match their content, in id order.
    pub offenders: Vec<ReplicaId>,
}

impl VerifyReport {
    pub fn from_offenders(offenders: Vec<ReplicaId>) -> Self {
        Self {
            valid: offenders.is_empty(),
            offenders,
        }
    }
}

/// Result of a majority restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// The plurality winner now held by every replica.
    pub restored_value: String,
    /// How many replicas held the winning content before the restore.
    pub votes: usize,
    /// Replicas whose content changed or whose tag was stale before the restore.
    pub repaired: Vec<ReplicaId>,
    /// All replicas after the restore.
    pub replicas: Vec<ReplicaSnapshot>,
}
