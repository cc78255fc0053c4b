//! Explicit language registry.
//!
//! Built once at startup and passed to whatever needs languages. Lookups are
//! case-insensitive and alias-aware; registration order is preserved.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{GrammarArtifact, GrammarLoader, Language, LoadError};

#[derive(Debug, Default)]
pub struct LanguageRegistry {
    loader: GrammarLoader,
    languages: IndexMap<String, Language>,
    /// Lowercased alias -> registered name.
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    pub fn new(loader: GrammarLoader) -> Self {
        Self {
            loader,
            languages: IndexMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn loader(&self) -> &GrammarLoader {
        &self.loader
    }

    /// Load an artifact and register its descriptor under the artifact name.
    ///
    /// Registering an equivalent artifact again returns the existing
    /// descriptor. A different artifact under a taken name is a
    /// [`LoadError::Conflict`].
    pub fn register(&mut self, artifact: &GrammarArtifact) -> Result<Language, LoadError> {
        let language = self.loader.load(artifact)?;
        self.insert(language)
    }

    /// Register an already loaded descriptor.
    pub fn insert(&mut self, language: Language) -> Result<Language, LoadError> {
        let key = language.name().to_ascii_lowercase();

        if let Some(existing) = self.languages.get(&key) {
            if *existing == language {
                return Ok(existing.clone());
            }
            return Err(LoadError::Conflict {
                name: language.name().to_owned(),
            });
        }

        tracing::debug!(
            grammar = language.name(),
            abi = language.abi_version(),
            "registered grammar"
        );
        self.languages.insert(key, language.clone());
        Ok(language)
    }

    /// Make `alias` resolve to the language registered as `name`.
    pub fn alias(&mut self, alias: &str, name: &str) {
        self.aliases
            .insert(alias.to_ascii_lowercase(), name.to_ascii_lowercase());
    }

    /// Look up a registered language by name or alias, ignoring case.
    ///
    /// A registered name always refers to its own language; aliases only
    /// apply to names that are not registered.
    pub fn get(&self, name: &str) -> Option<Language> {
        let key = name.to_ascii_lowercase();
        if let Some(language) = self.languages.get(&key) {
            return Some(language.clone());
        }
        let target = self.aliases.get(&key)?;
        self.languages.get(target).cloned()
    }

    /// Registered language, or `<name>.grammar` from the loader's search paths.
    pub fn resolve(&mut self, name: &str) -> Result<Language, LoadError> {
        if let Some(language) = self.get(name) {
            return Ok(language);
        }

        let key = name.to_ascii_lowercase();
        let target = self.aliases.get(&key).cloned().unwrap_or(key);
        let language = self.loader.find(&target)?;
        self.insert(language)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.values().map(Language::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
