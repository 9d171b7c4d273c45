//! Testing utilities for the scena workspace
//!
//! Shared fixtures: stub readers, prebuilt module descriptors, and tracing
//! initialization for tests.

#![allow(missing_docs)]

use scena_io::{FileReader, IoError, LoadOutcome, LoadRequest, ModuleDescriptor, OptionsPanel};
use scena_scene::{SceneConfig, SceneRegistry};
use std::path::Path;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install an env-filter tracing subscriber once per test process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Scene registry with the builtin node types and journaling on.
pub fn scene_with_builtin_types() -> SceneRegistry {
    SceneRegistry::with_config(SceneConfig {
        journal_enabled: true,
    })
}

/// Descriptor resembling a typical scripted module registration.
pub fn sample_descriptor(title: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(title)
        .with_contributors(vec!["Test Author".to_string()])
        .with_help_text("This module exists to exercise registration.")
        .with_acknowledgement_text("Developed for the scena test suite.")
}

/// Reader claiming a single extension; each load registers one node of the
/// configured type through the full create/release/register triad.
pub struct StubReader {
    pub file_type: String,
    pub extension: String,
    pub node_type: String,
}

impl StubReader {
    pub fn new(file_type: &str, extension: &str, node_type: &str) -> Self {
        Self {
            file_type: file_type.to_string(),
            extension: extension.to_string(),
            node_type: node_type.to_string(),
        }
    }
}

impl FileReader for StubReader {
    fn description(&self) -> &str {
        "Stub reader for tests"
    }

    fn file_type(&self) -> &str {
        &self.file_type
    }

    fn extensions(&self) -> Vec<String> {
        vec![format!("Stub files (*.{})", self.extension)]
    }

    fn can_load(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    fn load(&self, request: &LoadRequest, scene: &SceneRegistry) -> Result<LoadOutcome, IoError> {
        if !request.path.exists() {
            return Err(IoError::LoadFailed {
                reason: format!("no such file: {}", request.path.display()),
            });
        }
        let node = scene.create_node(&self.node_type)?;
        scene.release_ownership(node.id())?;
        scene.register(node.id())?;
        Ok(LoadOutcome {
            node_ids: vec![node.id()],
        })
    }
}

/// Options panel that fills a fixed default node name.
pub struct DefaultNamePanel {
    pub default_name: String,
}

impl OptionsPanel for DefaultNamePanel {
    fn apply(&self, request: &mut LoadRequest) {
        if request.node_name.is_none() {
            request.node_name = Some(self.default_name.clone());
        }
    }
}
