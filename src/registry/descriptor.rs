//! Descriptor types for commands, properties and variables.

use serde::Deserialize;

/// Anything stored in a [`Registry`](super::Registry).
pub trait Descriptor {
    /// Lookup key, possibly containing `<PLACEHOLDER>` segments.
    fn name(&self) -> &str;
}

/// A command with its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandDef {
    /// Command name (e.g., "add_executable")
    pub name: String,
    /// Usage line (e.g., "add_executable(<name> <source>...)")
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub description: String,
    /// Still accepted but superseded; partitioned as a deprecated command.
    #[serde(default)]
    pub deprecated: bool,
}

impl CommandDef {
    pub fn new(name: &str, usage: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
            description: description.to_string(),
            deprecated: false,
        }
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

impl Descriptor for CommandDef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// What kind of entity a property is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyScope {
    Global,
    Directory,
    Target,
    Source,
    Test,
    Cache,
    Install,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub scope: PropertyScope,
    #[serde(default)]
    pub description: String,
}

impl PropertyDef {
    pub fn new(name: &str, scope: PropertyScope, description: &str) -> Self {
        Self {
            name: name.to_string(),
            scope,
            description: description.to_string(),
        }
    }
}

impl Descriptor for PropertyDef {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Set by the build system; scripts should not assign it.
    #[serde(default)]
    pub read_only: bool,
}

impl VariableDef {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl Descriptor for VariableDef {
    fn name(&self) -> &str {
        &self.name
    }
}
