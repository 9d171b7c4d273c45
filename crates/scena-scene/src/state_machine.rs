//! Node lifecycle state machine.
//!
//! `created -> transient -> registered -> destroyed` is the canonical chain.
//! Registration directly from `created` is also legal (the caller releases
//! its share afterwards), and unregistering a node with outstanding caller
//! shares detaches it back to `created` instead of destroying it.

use crate::error::SceneError;
use crate::types::{NodeId, NodeState};

/// States reachable from `from` in a single transition.
#[must_use]
pub fn allowed_transitions(from: NodeState) -> Vec<NodeState> {
    use NodeState::*;
    match from {
        Created => vec![Transient, Registered],
        Transient => vec![Registered],
        Registered => vec![Destroyed, Created],
        Destroyed => vec![],
    }
}

/// Validates a state transition, naming the rejected operation on failure.
pub fn validate_transition(
    node_id: NodeId,
    from: NodeState,
    to: NodeState,
    operation: &'static str,
) -> Result<(), SceneError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(SceneError::InvalidState {
            node_id,
            state: from,
            operation,
        })
    }
}

fn allowed(from: NodeState, to: NodeState) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use NodeState::*;

    #[test]
    fn canonical_chain_is_allowed() {
        let id = NodeId::new();
        validate_transition(id, Created, Transient, "release").unwrap();
        validate_transition(id, Transient, Registered, "register").unwrap();
        validate_transition(id, Registered, Destroyed, "unregister").unwrap();
    }

    #[test]
    fn destroyed_is_terminal() {
        let id = NodeId::new();
        for to in [Created, Transient, Registered, Destroyed] {
            let err = validate_transition(id, Destroyed, to, "register").unwrap_err();
            assert!(matches!(err, SceneError::InvalidState { state: Destroyed, .. }));
        }
        assert!(allowed_transitions(Destroyed).is_empty());
    }

    #[test]
    fn register_before_release_is_allowed() {
        let id = NodeId::new();
        validate_transition(id, Created, Registered, "register").unwrap();
    }

    #[test]
    fn transient_cannot_be_released_again() {
        // A second release is an over-release, not a state transition; the
        // machine simply has no transient -> transient edge.
        assert_eq!(allowed_transitions(Transient), vec![Registered]);
    }
}
