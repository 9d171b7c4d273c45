//! Module and reader registry with load dispatch.

use crate::error::IoError;
use crate::module::{ModuleDescriptor, OptionsPanel};
use crate::reader::{matches_extensions, FileReader, LoadOutcome, LoadRequest};
use parking_lot::RwLock;
use scena_scene::SceneRegistry;
use std::sync::Arc;

struct ModuleEntry {
    descriptor: ModuleDescriptor,
    readers: Vec<Arc<dyn FileReader>>,
    options_panel: Option<Arc<dyn OptionsPanel>>,
}

/// Registry of modules and the file-reading capabilities they contribute.
///
/// Readers are consulted in registration order: the first one answering
/// `can_load` wins, with declared-extension matching as the fallback.
#[derive(Default)]
pub struct IoRegistry {
    modules: RwLock<Vec<ModuleEntry>>,
}

impl IoRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module by its descriptor.
    pub fn register_module(&self, descriptor: ModuleDescriptor) -> Result<(), IoError> {
        let mut modules = self.modules.write();
        if modules.iter().any(|m| m.descriptor.title == descriptor.title) {
            return Err(IoError::DuplicateModule {
                title: descriptor.title,
            });
        }
        tracing::info!(title = %descriptor.title, "module registered");
        modules.push(ModuleEntry {
            descriptor,
            readers: Vec::new(),
            options_panel: None,
        });
        Ok(())
    }

    /// Attach a file reader to a registered module.
    pub fn register_reader(
        &self,
        module_title: &str,
        reader: Arc<dyn FileReader>,
    ) -> Result<(), IoError> {
        let mut modules = self.modules.write();
        let entry = Self::entry_mut(&mut modules, module_title)?;
        tracing::info!(
            module = module_title,
            file_type = reader.file_type(),
            "file reader registered"
        );
        entry.readers.push(reader);
        Ok(())
    }

    /// Attach an options panel to a registered module.
    pub fn register_options_panel(
        &self,
        module_title: &str,
        panel: Arc<dyn OptionsPanel>,
    ) -> Result<(), IoError> {
        let mut modules = self.modules.write();
        let entry = Self::entry_mut(&mut modules, module_title)?;
        entry.options_panel = Some(panel);
        Ok(())
    }

    /// Descriptors of all listed (non-hidden) modules, in registration order.
    #[must_use]
    pub fn modules(&self) -> Vec<ModuleDescriptor> {
        self.modules
            .read()
            .iter()
            .filter(|m| !m.descriptor.hidden)
            .map(|m| m.descriptor.clone())
            .collect()
    }

    /// Descriptor of one module, hidden or not.
    #[must_use]
    pub fn module(&self, title: &str) -> Option<ModuleDescriptor> {
        self.modules
            .read()
            .iter()
            .find(|m| m.descriptor.title == title)
            .map(|m| m.descriptor.clone())
    }

    /// File-type identifiers of every registered reader.
    #[must_use]
    pub fn file_types(&self) -> Vec<String> {
        self.modules
            .read()
            .iter()
            .flat_map(|m| m.readers.iter().map(|r| r.file_type().to_string()))
            .collect()
    }

    /// The reader that would handle `path`, if any.
    #[must_use]
    pub fn reader_for(&self, path: &std::path::Path) -> Option<Arc<dyn FileReader>> {
        self.select(path).map(|(reader, _)| reader)
    }

    /// Whether any registered reader claims the file.
    #[must_use]
    pub fn can_load(&self, path: &std::path::Path) -> bool {
        self.select(path).is_some()
    }

    /// Load a file into the scene through the reader that claims it.
    ///
    /// The owning module's options panel (when present) fills request
    /// defaults before dispatch.
    pub fn load(
        &self,
        request: &LoadRequest,
        scene: &SceneRegistry,
    ) -> Result<LoadOutcome, IoError> {
        let (reader, panel) = self.select(&request.path).ok_or_else(|| {
            IoError::UnsupportedFormat {
                path: request.path.clone(),
            }
        })?;

        let mut request = request.clone();
        if let Some(panel) = panel {
            panel.apply(&mut request);
        }

        tracing::info!(
            path = %request.path.display(),
            file_type = reader.file_type(),
            "dispatching load"
        );
        reader.load(&request, scene)
    }

    fn select(
        &self,
        path: &std::path::Path,
    ) -> Option<(Arc<dyn FileReader>, Option<Arc<dyn OptionsPanel>>)> {
        let modules = self.modules.read();

        // Capability probe first, declared extensions as fallback.
        for entry in modules.iter() {
            for reader in &entry.readers {
                if reader.can_load(path) {
                    return Some((Arc::clone(reader), entry.options_panel.clone()));
                }
            }
        }
        for entry in modules.iter() {
            for reader in &entry.readers {
                if matches_extensions(path, &reader.extensions()) {
                    return Some((Arc::clone(reader), entry.options_panel.clone()));
                }
            }
        }
        None
    }

    fn entry_mut<'a>(
        modules: &'a mut Vec<ModuleEntry>,
        title: &str,
    ) -> Result<&'a mut ModuleEntry, IoError> {
        modules
            .iter_mut()
            .find(|m| m.descriptor.title == title)
            .ok_or_else(|| IoError::ModuleNotFound {
                title: title.to_string(),
            })
    }
}
