//! Construct registries.
//!
//! This module provides:
//! - `CommandDef`, `PropertyDef` and `VariableDef` descriptors
//! - `Registry`, a name lookup table with `<PLACEHOLDER>` pattern support
//! - `Registries`, the three tables the resolver consults

mod builtins;
mod descriptor;
mod table;

pub use descriptor::{CommandDef, Descriptor, PropertyDef, PropertyScope, VariableDef};
pub use table::Registry;

/// One registry per construct kind.
#[derive(Debug, Clone)]
pub struct Registries {
    /// Command names are case-insensitive.
    pub commands: Registry<CommandDef>,
    pub properties: Registry<PropertyDef>,
    pub variables: Registry<VariableDef>,
}

impl Registries {
    pub fn empty() -> Self {
        Self {
            commands: Registry::case_insensitive(),
            properties: Registry::case_sensitive(),
            variables: Registry::case_sensitive(),
        }
    }

    /// Registries seeded with the built-in commands, properties and variables.
    pub fn builtin() -> Self {
        builtins::BUILTINS.clone()
    }

    pub fn extend_commands(&mut self, defs: impl IntoIterator<Item = CommandDef>) {
        extend(&mut self.commands, defs, "command");
    }

    pub fn extend_properties(&mut self, defs: impl IntoIterator<Item = PropertyDef>) {
        extend(&mut self.properties, defs, "property");
    }

    pub fn extend_variables(&mut self, defs: impl IntoIterator<Item = VariableDef>) {
        extend(&mut self.variables, defs, "variable");
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Insert every descriptor, skipping the ones with unusable names.
fn extend<D: Descriptor>(
    registry: &mut Registry<D>,
    defs: impl IntoIterator<Item = D>,
    kind: &str,
) {
    for def in defs {
        let name = def.name().to_string();
        if let Err(error) = registry.insert(def) {
            tracing::warn!(kind, name = %name, %error, "skipping descriptor");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_skips_invalid_names() {
        let mut registries = Registries::empty();
        registries.extend_commands([
            CommandDef::new("my_helper", "my_helper(<arg>)", "Project helper."),
            CommandDef::new("", "", ""),
            CommandDef::new("broken_<name", "", ""),
        ]);
        assert_eq!(registries.commands.len(), 1);
        assert!(registries.commands.contains("MY_HELPER"));
    }

    #[test]
    fn builtin_is_independent_copy() {
        let mut registries = Registries::builtin();
        registries.extend_variables([VariableDef::new("MY_VAR", "")]);
        assert!(registries.variables.contains("MY_VAR"));
        assert!(!Registries::builtin().variables.contains("MY_VAR"));
    }
}
