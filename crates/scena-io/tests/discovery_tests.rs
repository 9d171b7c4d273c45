use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use scena_io::prelude::*;
use scena_test_utils::{
    init_tracing, sample_descriptor, scene_with_builtin_types, DefaultNamePanel, StubReader,
};
use std::path::Path;
use std::sync::Arc;

fn write_temp_file(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"payload").unwrap();
    path
}

#[test]
fn test_module_registration_and_listing() {
    let io = IoRegistry::new();
    io.register_module(sample_descriptor("Module A")).unwrap();
    io.register_module(sample_descriptor("Module B").hidden())
        .unwrap();

    let listed = io.modules();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Module A");

    // Hidden modules stay addressable.
    assert!(io.module("Module B").is_some());
    assert!(io.module("Module C").is_none());
}

#[test]
fn test_duplicate_module_is_rejected() {
    let io = IoRegistry::new();
    io.register_module(sample_descriptor("Module A")).unwrap();

    let err = io.register_module(sample_descriptor("Module A")).unwrap_err();
    assert!(matches!(err, IoError::DuplicateModule { title } if title == "Module A"));
}

#[test]
fn test_reader_requires_registered_module() {
    let io = IoRegistry::new();
    let reader = Arc::new(StubReader::new("StubFileType", "stub", "ModelNode"));

    let err = io.register_reader("Missing", reader).unwrap_err();
    assert!(matches!(err, IoError::ModuleNotFound { title } if title == "Missing"));
}

#[test]
fn test_load_dispatches_to_claiming_reader() {
    init_tracing();
    let io = IoRegistry::new();
    let scene = scene_with_builtin_types();
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_file(&dir, "scan.stub");

    io.register_module(sample_descriptor("Stub Module")).unwrap();
    io.register_reader(
        "Stub Module",
        Arc::new(StubReader::new("StubFileType", "stub", "ScalarVolumeNode")),
    )
    .unwrap();

    assert!(io.can_load(&path));
    assert_eq!(io.reader_for(&path).unwrap().file_type(), "StubFileType");

    let outcome = io.load(&LoadRequest::new(&path), &scene).unwrap();
    assert_eq!(outcome.node_ids.len(), 1);

    // The reader drove the full lifecycle triad: registry is sole owner.
    let id = outcome.node_ids[0];
    assert_eq!(scene.reference_count(id).unwrap(), 1);
    assert_eq!(scene.node_count(), 1);
    assert!(scene.first_by_type("ScalarVolumeNode").is_some());
}

#[test]
fn test_unclaimed_file_is_unsupported() {
    let io = IoRegistry::new();
    let scene = scene_with_builtin_types();

    io.register_module(sample_descriptor("Stub Module")).unwrap();
    io.register_reader(
        "Stub Module",
        Arc::new(StubReader::new("StubFileType", "stub", "ModelNode")),
    )
    .unwrap();

    let err = io
        .load(&LoadRequest::new("scan.unknown"), &scene)
        .unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat { .. }));
    assert_eq!(scene.node_count(), 0);
}

#[test]
fn test_file_type_enumeration() {
    let io = IoRegistry::new();
    io.register_module(sample_descriptor("Stub Module")).unwrap();
    io.register_reader(
        "Stub Module",
        Arc::new(StubReader::new("TypeOne", "one", "ModelNode")),
    )
    .unwrap();
    io.register_reader(
        "Stub Module",
        Arc::new(StubReader::new("TypeTwo", "two", "ModelNode")),
    )
    .unwrap();

    assert_eq!(io.file_types(), vec!["TypeOne", "TypeTwo"]);
}

/// Reader that declines every probe but declares an extension, so selection
/// has to fall back to declared-extension matching.
struct DeclaredOnlyReader;

impl FileReader for DeclaredOnlyReader {
    fn description(&self) -> &str {
        "Declared-extension-only reader"
    }

    fn file_type(&self) -> &str {
        "DeclaredOnly"
    }

    fn extensions(&self) -> Vec<String> {
        vec!["Declared files (*.decl)".to_string()]
    }

    fn can_load(&self, _path: &Path) -> bool {
        false
    }

    fn load(&self, _request: &LoadRequest, _scene: &scena_scene::SceneRegistry) -> Result<LoadOutcome, IoError> {
        Ok(LoadOutcome::default())
    }
}

#[test]
fn test_extension_fallback_selects_declining_reader() {
    let io = IoRegistry::new();
    io.register_module(sample_descriptor("Declared Module"))
        .unwrap();
    io.register_reader("Declared Module", Arc::new(DeclaredOnlyReader))
        .unwrap();

    let reader = io.reader_for(Path::new("data.decl")).unwrap();
    assert_eq!(reader.file_type(), "DeclaredOnly");
    assert!(io.reader_for(Path::new("data.other")).is_none());
}

/// Reader that records the request it was dispatched with.
struct RecordingReader {
    seen: Mutex<Option<LoadRequest>>,
}

impl FileReader for RecordingReader {
    fn description(&self) -> &str {
        "Recording reader"
    }

    fn file_type(&self) -> &str {
        "Recording"
    }

    fn extensions(&self) -> Vec<String> {
        vec!["*.rec".to_string()]
    }

    fn can_load(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e == "rec")
    }

    fn load(&self, request: &LoadRequest, _scene: &scena_scene::SceneRegistry) -> Result<LoadOutcome, IoError> {
        *self.seen.lock() = Some(request.clone());
        Ok(LoadOutcome::default())
    }
}

#[test]
fn test_options_panel_fills_defaults_before_dispatch() {
    let io = IoRegistry::new();
    let scene = scene_with_builtin_types();
    let reader = Arc::new(RecordingReader {
        seen: Mutex::new(None),
    });

    io.register_module(sample_descriptor("Recording Module"))
        .unwrap();
    io.register_reader("Recording Module", reader.clone())
        .unwrap();
    io.register_options_panel(
        "Recording Module",
        Arc::new(DefaultNamePanel {
            default_name: "DefaultScan".to_string(),
        }),
    )
    .unwrap();

    let request = LoadRequest::new("scan.rec")
        .with_option("center", serde_json::Value::Bool(true));
    io.load(&request, &scene).unwrap();
    let seen = reader.seen.lock().clone().unwrap();
    assert_eq!(seen.node_name.as_deref(), Some("DefaultScan"));
    assert_eq!(seen.options["center"], serde_json::Value::Bool(true));

    // Caller-supplied values win over panel defaults.
    io.load(
        &LoadRequest::new("scan.rec").with_node_name("Mine"),
        &scene,
    )
    .unwrap();
    let seen = reader.seen.lock().clone().unwrap();
    assert_eq!(seen.node_name.as_deref(), Some("Mine"));
}
