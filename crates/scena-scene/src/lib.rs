//! Scena scene core (scena-scene)
//!
//! Arena-backed node registry with explicit ownership tracking across the
//! create -> release -> register lifecycle:
//!
//! 1. **Create**: the factory mints a node and hands the caller one
//!    ownership share.
//! 2. **Transfer**: the caller relinquishes its share; the arena keeps the
//!    node alive pending registration.
//! 3. **Register**: the registry takes its own share and the node becomes
//!    visible to all consumers.
//!
//! # Quick Start
//!
//! ```rust
//! use scena_scene::prelude::*;
//!
//! let scene = SceneRegistry::new();
//! let node = scene.create_node("ViewNode")?;
//! scene.release_ownership(node.id())?;
//! scene.register(node.id())?;
//!
//! assert_eq!(scene.reference_count(node.id())?, 1);
//! # Ok::<(), scena_scene::SceneError>(())
//! ```

pub mod error;
pub mod factory;
pub mod journal;
pub mod node;
pub mod registry;
pub mod state_machine;
pub mod types;

// Re-exports
pub use error::SceneError;
pub use node::Node;
pub use registry::{SceneConfig, SceneRegistry};
pub use types::{NodeId, NodeState};

/// Common imports for scene lifecycle operations
pub mod prelude {
    pub use crate::error::SceneError;
    pub use crate::factory::{NodeTypeInfo, NodeTypeSet};
    pub use crate::journal::{SceneEvent, SceneJournal};
    pub use crate::node::Node;
    pub use crate::registry::{SceneConfig, SceneRegistry};
    pub use crate::types::{NodeId, NodeState, RegistryStats};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
