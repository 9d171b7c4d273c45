//! Error types for the scene lifecycle core.
//!
//! Every violation of the ownership discipline is surfaced as a distinct
//! variant so callers can tell a recoverable policy decision (duplicate
//! registration) from a caller bug (over-release, use after destroy).

use crate::types::{NodeId, NodeState};

/// Scene lifecycle error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// `create_node` was called with a type tag the factory does not know.
    #[error("unknown node type: {tag}")]
    UnknownType {
        /// The unrecognized tag.
        tag: String,
    },

    /// Ownership released more times than held. Indicates a caller bug;
    /// tolerated silently it would mask use-after-free-equivalent errors.
    #[error("ownership over-released for node {node_id:?}")]
    OverRelease {
        /// The node whose count would have gone negative.
        node_id: NodeId,
    },

    /// The node is already present in the registry.
    #[error("node {node_id:?} is already registered")]
    DuplicateRegistration {
        /// The already-registered node.
        node_id: NodeId,
    },

    /// Operation attempted in a state that does not permit it.
    #[error("invalid state for node {node_id:?}: {state:?} does not permit {operation}")]
    InvalidState {
        /// The node operated on.
        node_id: NodeId,
        /// Its current lifecycle state.
        state: NodeState,
        /// The operation that was rejected.
        operation: &'static str,
    },

    /// No record for the given id exists in the arena.
    #[error("node {node_id:?} not found")]
    NodeNotFound {
        /// The unknown id.
        node_id: NodeId,
    },
}

impl SceneError {
    /// Whether the caller can sensibly continue after this error.
    ///
    /// Over-release and terminal-state misuse point at ownership bugs and
    /// should fail fast; the rest are ordinary rejections.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OverRelease { .. } | Self::InvalidState { .. } => false,
            Self::UnknownType { .. }
            | Self::DuplicateRegistration { .. }
            | Self::NodeNotFound { .. } => true,
        }
    }

    /// Whether this error indicates a bug in the calling code rather than
    /// a rejected request.
    #[inline]
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::OverRelease { .. } | Self::InvalidState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_release_is_not_recoverable() {
        let err = SceneError::OverRelease {
            node_id: NodeId::new(),
        };
        assert!(!err.is_recoverable());
        assert!(err.is_caller_bug());
    }

    #[test]
    fn duplicate_registration_is_recoverable() {
        let err = SceneError::DuplicateRegistration {
            node_id: NodeId::new(),
        };
        assert!(err.is_recoverable());
        assert!(!err.is_caller_bug());
    }

    #[test]
    fn display_names_the_tag() {
        let err = SceneError::UnknownType {
            tag: "BogusNode".to_string(),
        };
        assert!(err.to_string().contains("BogusNode"));
    }
}
