//! Module descriptors and the optional per-module options hook.

use crate::reader::LoadRequest;
use serde::{Deserialize, Serialize};

/// Descriptive metadata a module exposes to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Human-readable module title; also the registration key.
    pub title: String,
    /// Contributor credits.
    pub contributors: Vec<String>,
    /// Help text shown to the user.
    pub help_text: String,
    /// Acknowledgement/funding text.
    pub acknowledgement_text: String,
    /// Hidden modules are registered but not listed.
    pub hidden: bool,
    /// Titles of modules this one depends on.
    pub dependencies: Vec<String>,
}

impl ModuleDescriptor {
    /// Descriptor with the given title and empty metadata.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set contributor credits.
    #[must_use]
    pub fn with_contributors(mut self, contributors: Vec<String>) -> Self {
        self.contributors = contributors;
        self
    }

    /// Set the help text.
    #[must_use]
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Set the acknowledgement text.
    #[must_use]
    pub fn with_acknowledgement_text(mut self, text: impl Into<String>) -> Self {
        self.acknowledgement_text = text.into();
        self
    }

    /// Mark the module as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Optional per-module options source.
///
/// Applied to a load request before dispatch, filling in defaults the user
/// did not supply. Replaces the host-GUI options widget with a data-level
/// capability.
pub trait OptionsPanel: Send + Sync {
    /// Fill defaults into `request`, leaving caller-supplied values intact.
    fn apply(&self, request: &mut LoadRequest);
}
