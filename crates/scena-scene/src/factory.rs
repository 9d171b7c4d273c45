//! Node type recognition.
//!
//! The registry only creates nodes whose type tag has been registered here,
//! so an unknown tag is rejected before any record is allocated.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Description of one recognized node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypeInfo {
    /// Class/type tag, e.g. `"ViewNode"`.
    pub tag: String,
    /// Prefix used when naming instances (`"View"` yields `View`, `View_1`, ...).
    pub name_prefix: String,
}

impl NodeTypeInfo {
    /// Describe a node type.
    #[must_use]
    pub fn new(tag: impl Into<String>, name_prefix: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name_prefix: name_prefix.into(),
        }
    }
}

/// The set of node types a registry recognizes.
#[derive(Debug, Default)]
pub struct NodeTypeSet {
    types: RwLock<HashMap<String, NodeTypeInfo>>,
}

impl NodeTypeSet {
    /// Empty set; every `create_node` call will fail until types are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preloaded with the builtin scene node types.
    #[must_use]
    pub fn with_builtin_types() -> Self {
        let set = Self::new();
        for (tag, prefix) in [
            ("ViewNode", "View"),
            ("CameraNode", "Camera"),
            ("TransformNode", "Transform"),
            ("ScalarVolumeNode", "Volume"),
            ("ModelNode", "Model"),
        ] {
            set.register_type(NodeTypeInfo::new(tag, prefix));
        }
        set
    }

    /// Register (or replace) a node type.
    pub fn register_type(&self, info: NodeTypeInfo) {
        self.types.write().insert(info.tag.clone(), info);
    }

    /// Whether `tag` is a recognized node type.
    #[must_use]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.types.read().contains_key(tag)
    }

    /// Look up a recognized type.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<NodeTypeInfo> {
        self.types.read().get(tag).cloned()
    }

    /// All recognized tags, unordered.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.types.read().keys().cloned().collect()
    }
}
