//! Node value type.
//!
//! `Node` is a cheap clone of what the registry knows about an entity; the
//! arena record inside [`crate::registry::SceneRegistry`] stays authoritative
//! for lifecycle state and ownership counts.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// One unit of scene data, identified by a class/type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    type_tag: String,
    name: String,
}

impl Node {
    pub(crate) fn new(id: NodeId, type_tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            type_tag: type_tag.into(),
            name: name.into(),
        }
    }

    /// Stable arena identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Class/type tag this node was created from.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
