//! Name -> descriptor lookup table.

use std::collections::HashMap;

use regex::Regex;

use crate::error::RegistryError;

use super::descriptor::Descriptor;

/// What a `<PLACEHOLDER>` in a descriptor name matches.
const PLACEHOLDER_PATTERN: &str = "[A-Za-z0-9_]+";

/// Immutable-once-built lookup table for one construct kind.
///
/// Plain names are matched exactly. Names with placeholders such as
/// `CMAKE_<LANG>_FLAGS` are matched by pattern, first inserted wins.
/// A case-insensitive table folds ASCII letters only, for both kinds of name.
#[derive(Debug, Clone)]
pub struct Registry<D> {
    case_insensitive: bool,
    exact: HashMap<String, D>,
    patterns: Vec<(Regex, D)>,
}

impl<D: Descriptor> Registry<D> {
    pub fn case_sensitive() -> Self {
        Self::with_case(false)
    }

    pub fn case_insensitive() -> Self {
        Self::with_case(true)
    }

    fn with_case(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            exact: HashMap::new(),
            patterns: Vec::new(),
        }
    }

    /// Add a descriptor, replacing any previous one with the same name.
    pub fn insert(&mut self, def: D) -> Result<(), RegistryError> {
        let name = def.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if !name.contains('<') {
            let key = self.key(name);
            self.exact.insert(key, def);
            return Ok(());
        }

        let regex = compile_pattern(&self.key(name))?;
        let existing = self
            .patterns
            .iter()
            .position(|(r, _)| r.as_str() == regex.as_str());
        match existing {
            Some(index) => self.patterns[index] = (regex, def),
            None => self.patterns.push((regex, def)),
        }
        Ok(())
    }

    /// Find the descriptor for `name`, or `None` for an unknown name.
    pub fn lookup(&self, name: &str) -> Option<&D> {
        let key = self.key(name);
        if let Some(def) = self.exact.get(&key) {
            return Some(def);
        }
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(&key))
            .map(|(_, def)| def)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key(&self, name: &str) -> String {
        if self.case_insensitive {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }
}

/// Turn `CMAKE_<LANG>_FLAGS` into `^CMAKE_[A-Za-z0-9_]+_FLAGS$`.
fn compile_pattern(name: &str) -> Result<Regex, RegistryError> {
    let mut pattern = String::from("^");
    let mut rest = name;

    while let Some(open) = rest.find('<') {
        pattern.push_str(&regex::escape(&rest[..open]));
        let close = rest[open..]
            .find('>')
            .ok_or_else(|| RegistryError::UnterminatedPlaceholder(name.to_string()))?;
        pattern.push_str(PLACEHOLDER_PATTERN);
        rest = &rest[open + close + 1..];
    }
    pattern.push_str(&regex::escape(rest));
    pattern.push('$');

    Regex::new(&pattern).map_err(|e| RegistryError::Pattern {
        name: name.to_string(),
        message: e.to_string(),
    })
}
