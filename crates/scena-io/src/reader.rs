//! File-reader capability trait and load request/outcome types.

use crate::error::IoError;
use scena_scene::{NodeId, SceneRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// What to load and how.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadRequest {
    /// File to load.
    pub path: PathBuf,
    /// Name for the node(s) the reader creates; reader picks one if unset.
    pub node_name: Option<String>,
    /// Free-form reader options.
    pub options: Map<String, Value>,
}

impl LoadRequest {
    /// Request to load `path` with no options.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            node_name: None,
            options: Map::new(),
        }
    }

    /// Set the node name.
    #[must_use]
    pub fn with_node_name(mut self, name: impl Into<String>) -> Self {
        self.node_name = Some(name.into());
        self
    }

    /// Add one option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// Result of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOutcome {
    /// Nodes the reader created and registered in the scene.
    pub node_ids: Vec<NodeId>,
}

/// A file-reading capability.
///
/// Implementations answer capability queries (`can_load`) and perform loads
/// by driving the scene registry's lifecycle API.
pub trait FileReader: Send + Sync {
    /// Human-readable description of the format.
    fn description(&self) -> &str;

    /// File-type identifier the host groups readers by.
    fn file_type(&self) -> &str;

    /// Extensions this reader declares, e.g. `["*.mrwift"]`.
    fn extensions(&self) -> Vec<String>;

    /// Whether this reader can handle the given file.
    fn can_load(&self, path: &Path) -> bool;

    /// Load the file into the scene.
    fn load(&self, request: &LoadRequest, scene: &SceneRegistry) -> Result<LoadOutcome, IoError>;
}

/// Whether `path` matches one of a reader's declared extension patterns.
///
/// Patterns follow the `"Label (*.ext)"` or bare `"*.ext"` convention;
/// anything without a `*.` wildcard is ignored.
#[must_use]
pub fn matches_extensions(path: &Path, patterns: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    patterns.iter().any(|pattern| {
        pattern
            .split("*.")
            .skip(1)
            .map(|rest| rest.trim_end_matches([')', ' ']))
            .any(|declared| declared.eq_ignore_ascii_case(ext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_handles_labelled_patterns() {
        let patterns = vec!["My reader file type (*.mrwift)".to_string()];
        assert!(matches_extensions(Path::new("scan.mrwift"), &patterns));
        assert!(matches_extensions(Path::new("scan.MRWIFT"), &patterns));
        assert!(!matches_extensions(Path::new("scan.nii"), &patterns));
        assert!(!matches_extensions(Path::new("noext"), &patterns));
    }

    #[test]
    fn extension_matching_handles_bare_patterns() {
        let patterns = vec!["*.vtk".to_string(), "*.vtp".to_string()];
        assert!(matches_extensions(Path::new("mesh.vtp"), &patterns));
        assert!(!matches_extensions(Path::new("mesh.stl"), &patterns));
    }
}
