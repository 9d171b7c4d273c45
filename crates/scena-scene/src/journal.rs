//! Scene event journal.
//!
//! Append-only record of every lifecycle operation the registry performs,
//! kept in process for inspection by tests and diagnostics.

use crate::types::{now_timestamp, EventId, NodeId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One journaled lifecycle operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneEvent {
    /// Entry id.
    pub event_id: EventId,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    /// Node the operation applied to.
    pub node_id: NodeId,
    /// Operation name (`"create_node"`, `"register"`, ...).
    pub action: String,
    /// Operation-specific detail, e.g. the resulting reference count.
    pub detail: String,
}

/// Append-only journal of scene events.
#[derive(Debug, Default)]
pub struct SceneJournal {
    inner: Mutex<Vec<SceneEvent>>,
}

impl SceneJournal {
    /// Empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&self, node_id: NodeId, action: &str, detail: String) -> EventId {
        let event = SceneEvent {
            event_id: EventId::new(),
            timestamp: now_timestamp(),
            node_id,
            action: action.to_string(),
            detail,
        };
        let id = event.event_id;
        self.inner.lock().push(event);
        id
    }

    /// Snapshot of all entries in append order.
    #[must_use]
    pub fn events(&self) -> Vec<SceneEvent> {
        self.inner.lock().clone()
    }

    /// Entries touching one node, in append order.
    #[must_use]
    pub fn events_for(&self, node_id: NodeId) -> Vec<SceneEvent> {
        self.inner
            .lock()
            .iter()
            .filter(|e| e.node_id == node_id)
            .cloned()
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the journal holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
