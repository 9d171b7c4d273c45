//! Scena IO layer (scena-io)
//!
//! Module descriptors and file-reader capability registration for the scene
//! core. Readers are explicit trait implementations registered against a
//! module, replacing load-time structural discovery: conformance is checked
//! by the compiler, and the host asks a reader whether it can handle a file
//! before dispatching a load into the scene registry.

pub mod error;
pub mod module;
pub mod reader;
pub mod registry;

// Re-exports
pub use error::IoError;
pub use module::{ModuleDescriptor, OptionsPanel};
pub use reader::{FileReader, LoadOutcome, LoadRequest};
pub use registry::IoRegistry;

/// Common imports for module and reader registration
pub mod prelude {
    pub use crate::error::IoError;
    pub use crate::module::{ModuleDescriptor, OptionsPanel};
    pub use crate::reader::{FileReader, LoadOutcome, LoadRequest};
    pub use crate::registry::IoRegistry;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
