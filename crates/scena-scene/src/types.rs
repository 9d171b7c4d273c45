//! Core identifier and state types shared across the scene crate.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a node in the registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Mint a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Mint a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a node.
///
/// `Destroyed` is terminal: no transition out of it is ever valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    /// Freshly created; the caller holds the only ownership share.
    Created,
    /// Caller relinquished its share; the arena keeps the node alive
    /// pending transfer to the registry.
    Transient,
    /// The registry holds an ownership share.
    Registered,
    /// Reference count reached zero; only a tombstone remains.
    Destroyed,
}

/// Per-state node counts for a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Nodes in `Created` state.
    pub created: usize,
    /// Nodes parked in the `Transient` transfer window.
    pub transient: usize,
    /// Nodes owned by the registry.
    pub registered: usize,
    /// Tombstoned nodes.
    pub destroyed: usize,
}

impl RegistryStats {
    /// Total number of records in the arena, tombstones included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.transient + self.registered + self.destroyed
    }
}

/// Seconds since the Unix epoch.
#[must_use]
pub fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
