//! Settings infrastructure.
//!
//! Loads `cmake-resolve.toml` files that rename partition content types and add
//! project-specific commands, properties and variables to the built-in registries.
//!
//! ```toml
//! [partitions]
//! comment = "__cmake_comment"
//!
//! [[commands]]
//! name = "add_project_test"
//! usage = "add_project_test(<name> <source>...)"
//! description = "Project helper that builds and registers a test."
//!
//! [[variables]]
//! name = "PROJECT_<COMPONENT>_ENABLED"
//! description = "Whether a component is built."
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classifier::ContentTypes;
use crate::registry::{CommandDef, PropertyDef, Registries, VariableDef};

/// Name of the settings file searched for by [`discover_settings`].
pub const SETTINGS_FILE: &str = "cmake-resolve.toml";

/// Root settings structure loaded from the settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Content-type tag overrides.
    pub partitions: Option<ContentTypes>,
    pub commands: Vec<CommandDef>,
    pub properties: Vec<PropertyDef>,
    pub variables: Vec<VariableDef>,
}

/// Read descriptor and partition-tag overrides from `path`.
///
/// A missing file means no overrides. A file that is not valid TOML for
/// [`Settings`] is logged and ignored as a whole.
pub fn load_settings(path: &Path) -> Settings {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    toml::from_str(&content).unwrap_or_else(|error| {
        tracing::warn!(path = %path.display(), %error, "ignoring malformed settings file");
        Settings::default()
    })
}

/// Locate [`SETTINGS_FILE`] for a project rooted at or below `start_dir`.
///
/// `start_dir` and each of its ancestors are tried nearest first; failing
/// that, the subdirectories directly under `start_dir`. The returned path is
/// the directory the file was found in, or `start_dir` with default settings.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let found = start_dir
        .ancestors()
        .find(|dir| dir.join(SETTINGS_FILE).is_file())
        .map(Path::to_path_buf)
        .or_else(|| settings_in_subdirectory(start_dir));

    match found {
        Some(dir) => (load_settings(&dir.join(SETTINGS_FILE)), dir),
        None => (Settings::default(), start_dir.to_path_buf()),
    }
}

fn settings_in_subdirectory(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.is_dir() && path.join(SETTINGS_FILE).is_file())
}

/// Built-in registries extended with the descriptors declared in `settings`.
///
/// Declared descriptors replace built-ins of the same name.
pub fn build_registries(settings: &Settings) -> Registries {
    let mut registries = Registries::builtin();
    registries.extend_commands(settings.commands.iter().cloned());
    registries.extend_properties(settings.properties.iter().cloned());
    registries.extend_variables(settings.variables.iter().cloned());
    registries
}

/// The partition classifier described by `settings`.
pub fn build_classifier(settings: &Settings) -> ContentTypes {
    settings.partitions.clone().unwrap_or_default()
}
