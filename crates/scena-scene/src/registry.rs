//! Arena-backed scene registry.
//!
//! The registry owns every node record physically; reference counts track
//! logical ownership shares (caller units plus the registry's own share once
//! a node is registered). Destruction happens exactly once, when the last
//! share is dropped, and destroyed records stay behind as tombstones so
//! terminal-state misuse is detected instead of dangling.
//!
//! Mutating operations must be serialized by the caller; the internal locks
//! only make `&self` access sound, they are not a concurrency contract.

use crate::error::SceneError;
use crate::factory::NodeTypeSet;
use crate::journal::SceneJournal;
use crate::node::Node;
use crate::state_machine;
use crate::types::{now_timestamp, NodeId, NodeState, RegistryStats};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Registry configuration.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Record every lifecycle operation in the scene journal.
    pub journal_enabled: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            journal_enabled: true,
        }
    }
}

/// Node record in the registry arena.
#[derive(Debug)]
struct NodeRecord {
    node: Node,
    state: NodeState,
    caller_refs: u32,
    registry_ref: bool,
    #[allow(dead_code)]
    created_at: u64,
}

impl NodeRecord {
    fn reference_count(&self) -> u32 {
        self.caller_refs + u32::from(self.registry_ref)
    }
}

/// The owning collection mapping identities to live nodes.
pub struct SceneRegistry {
    config: SceneConfig,
    types: NodeTypeSet,
    nodes: RwLock<HashMap<NodeId, NodeRecord>>,
    name_counters: RwLock<HashMap<String, u64>>,
    journal: SceneJournal,
}

impl SceneRegistry {
    /// Registry with default configuration and the builtin node types.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Registry with custom configuration and the builtin node types.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        Self::with_types(config, NodeTypeSet::with_builtin_types())
    }

    /// Registry with a caller-supplied type set.
    #[must_use]
    pub fn with_types(config: SceneConfig, types: NodeTypeSet) -> Self {
        Self {
            config,
            types,
            nodes: RwLock::new(HashMap::new()),
            name_counters: RwLock::new(HashMap::new()),
            journal: SceneJournal::new(),
        }
    }

    /// The node types this registry recognizes.
    #[must_use]
    pub fn node_types(&self) -> &NodeTypeSet {
        &self.types
    }

    /// The lifecycle journal.
    #[must_use]
    pub fn journal(&self) -> &SceneJournal {
        &self.journal
    }

    /// Allocate a new node of the given type tag.
    ///
    /// The returned node carries exactly one ownership share, held by the
    /// caller; the factory's own transient share is collapsed internally so
    /// the net effect is +1, never +2.
    pub fn create_node(&self, type_tag: &str) -> Result<Node, SceneError> {
        let info = self.types.get(type_tag).ok_or_else(|| SceneError::UnknownType {
            tag: type_tag.to_string(),
        })?;

        let id = NodeId::new();
        let name = self.next_name(&info.name_prefix);
        let node = Node::new(id, &info.tag, name);

        let record = NodeRecord {
            node: node.clone(),
            state: NodeState::Created,
            caller_refs: 1,
            registry_ref: false,
            created_at: now_timestamp(),
        };
        self.nodes.write().insert(id, record);
        self.log_op(id, "create_node", format!("tag={type_tag} refs=1"));

        Ok(node)
    }

    /// Relinquish one unit of caller ownership.
    ///
    /// Callable at most once per unit held; releasing with no unit left is
    /// an [`SceneError::OverRelease`] caller bug. Dropping the only share of
    /// an unregistered node parks it in the `Transient` transfer window
    /// rather than destroying it, so a following [`register`](Self::register)
    /// completes the handover.
    pub fn release_ownership(&self, node_id: NodeId) -> Result<(), SceneError> {
        let mut nodes = self.nodes.write();
        let record = nodes
            .get_mut(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;

        if record.state == NodeState::Destroyed {
            return Err(SceneError::InvalidState {
                node_id,
                state: record.state,
                operation: "release_ownership",
            });
        }
        if record.caller_refs == 0 {
            return Err(SceneError::OverRelease { node_id });
        }

        record.caller_refs -= 1;
        if record.reference_count() == 0 {
            // Unregistered with no owners left: hold in the transfer window.
            state_machine::validate_transition(
                node_id,
                record.state,
                NodeState::Transient,
                "release_ownership",
            )?;
            record.state = NodeState::Transient;
        }
        let detail = format!("refs={}", record.reference_count());
        drop(nodes);
        self.log_op(node_id, "release_ownership", detail);

        Ok(())
    }

    /// Add the node to the registry, which takes its own ownership share.
    pub fn register(&self, node_id: NodeId) -> Result<(), SceneError> {
        let mut nodes = self.nodes.write();
        let record = nodes
            .get_mut(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;

        if record.registry_ref {
            // Rejected without touching the count.
            return Err(SceneError::DuplicateRegistration { node_id });
        }
        state_machine::validate_transition(node_id, record.state, NodeState::Registered, "register")?;

        record.registry_ref = true;
        record.state = NodeState::Registered;
        let detail = format!("refs={}", record.reference_count());
        drop(nodes);
        self.log_op(node_id, "register", detail);

        Ok(())
    }

    /// Drop the registry's ownership share.
    ///
    /// If no caller share remains the node is destroyed; otherwise it
    /// detaches back to `Created`, still owned by the caller.
    pub fn unregister(&self, node_id: NodeId) -> Result<(), SceneError> {
        let mut nodes = self.nodes.write();
        let record = nodes
            .get_mut(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;

        if record.state != NodeState::Registered {
            return Err(SceneError::InvalidState {
                node_id,
                state: record.state,
                operation: "unregister",
            });
        }

        record.registry_ref = false;
        let (action, detail) = if record.caller_refs == 0 {
            state_machine::validate_transition(
                node_id,
                record.state,
                NodeState::Destroyed,
                "unregister",
            )?;
            record.state = NodeState::Destroyed;
            ("destroy", "refs=0".to_string())
        } else {
            state_machine::validate_transition(
                node_id,
                record.state,
                NodeState::Created,
                "unregister",
            )?;
            record.state = NodeState::Created;
            ("unregister", format!("refs={}", record.reference_count()))
        };
        drop(nodes);
        self.log_op(node_id, action, detail);

        Ok(())
    }

    /// Session teardown: destroy every live node.
    pub fn tear_down(&self) {
        let mut destroyed = Vec::new();
        {
            let mut nodes = self.nodes.write();
            for (id, record) in nodes.iter_mut() {
                if record.state != NodeState::Destroyed {
                    record.state = NodeState::Destroyed;
                    record.caller_refs = 0;
                    record.registry_ref = false;
                    destroyed.push(*id);
                }
            }
        }
        for id in destroyed {
            self.log_op(id, "tear_down", "refs=0".to_string());
        }
    }

    /// Retrieve a live node by id.
    pub fn get(&self, node_id: NodeId) -> Result<Node, SceneError> {
        let nodes = self.nodes.read();
        let record = nodes
            .get(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;
        if record.state == NodeState::Destroyed {
            return Err(SceneError::InvalidState {
                node_id,
                state: record.state,
                operation: "get",
            });
        }
        Ok(record.node.clone())
    }

    /// First registered node with the given type tag.
    #[must_use]
    pub fn first_by_type(&self, type_tag: &str) -> Option<Node> {
        self.nodes
            .read()
            .values()
            .find(|r| r.state == NodeState::Registered && r.node.type_tag() == type_tag)
            .map(|r| r.node.clone())
    }

    /// All registered nodes with the given type tag, unordered.
    #[must_use]
    pub fn nodes_by_type(&self, type_tag: &str) -> Vec<Node> {
        self.nodes
            .read()
            .values()
            .filter(|r| r.state == NodeState::Registered && r.node.type_tag() == type_tag)
            .map(|r| r.node.clone())
            .collect()
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
            .read()
            .values()
            .filter(|r| r.state == NodeState::Registered)
            .count()
    }

    /// Current reference count of a node (caller shares + registry share).
    pub fn reference_count(&self, node_id: NodeId) -> Result<u32, SceneError> {
        let nodes = self.nodes.read();
        let record = nodes
            .get(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;
        Ok(record.reference_count())
    }

    /// Current lifecycle state of a node.
    pub fn state_of(&self, node_id: NodeId) -> Result<NodeState, SceneError> {
        let nodes = self.nodes.read();
        let record = nodes
            .get(&node_id)
            .ok_or(SceneError::NodeNotFound { node_id })?;
        Ok(record.state)
    }

    /// Per-state counts, tombstones included.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let nodes = self.nodes.read();
        let mut stats = RegistryStats::default();
        for record in nodes.values() {
            match record.state {
                NodeState::Created => stats.created += 1,
                NodeState::Transient => stats.transient += 1,
                NodeState::Registered => stats.registered += 1,
                NodeState::Destroyed => stats.destroyed += 1,
            }
        }
        stats
    }

    fn next_name(&self, prefix: &str) -> String {
        let mut counters = self.name_counters.write();
        let counter = counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        if *counter == 1 {
            prefix.to_string()
        } else {
            format!("{}_{}", prefix, *counter - 1)
        }
    }

    fn log_op(&self, node_id: NodeId, action: &str, detail: String) {
        tracing::debug!(?node_id, action, %detail, "scene lifecycle");
        if self.config.journal_enabled {
            self.journal.append(node_id, action, detail);
        }
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
