//! Grammar loading.
//!
//! Turns artifacts into [`Language`] descriptors. Loading has no side effects
//! and keeps no cache: the same artifact always yields an equal descriptor,
//! so callers that want sharing keep descriptors in a
//! [`LanguageRegistry`](crate::LanguageRegistry).
//!
//! # ABI compatibility
//!
//! Tables carry the parser ABI version they were generated for. Only versions
//! in `MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION` load; anything else
//! is reported as [`LoadError::IncompatibleVersion`] rather than handed to an
//! engine that would misread the tables.

use std::path::{Path, PathBuf};

use dconf_artifact::{
    ARTIFACT_EXTENSION, CompiledGrammar, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION,
    is_valid_name,
};

use crate::{GrammarArtifact, Language, LoadError, LoaderConfig};

/// Validating grammar loader.
#[derive(Debug, Clone, Default)]
pub struct GrammarLoader {
    config: LoaderConfig,
}

impl GrammarLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader with search paths taken from the environment.
    pub fn from_env() -> Self {
        Self::new(LoaderConfig::from_env())
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.config.search_paths
    }

    /// Validate an artifact and build its descriptor.
    pub fn load(&self, artifact: &GrammarArtifact) -> Result<Language, LoadError> {
        let name = artifact.name();

        let grammar =
            CompiledGrammar::from_bytes(artifact.bytes()).map_err(|source| LoadError::Malformed {
                name: name.to_owned(),
                source,
            })?;

        let version = grammar.tables().language_version;
        if !(MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&version) {
            return Err(LoadError::IncompatibleVersion {
                name: name.to_owned(),
                version,
                min: MIN_COMPATIBLE_LANGUAGE_VERSION,
                max: LANGUAGE_VERSION,
            });
        }

        if grammar.name() != name {
            return Err(LoadError::NameMismatch {
                name: name.to_owned(),
                declared: grammar.name().to_owned(),
            });
        }

        let language = Language::from_compiled(grammar);
        tracing::debug!(
            grammar = language.name(),
            abi = language.abi_version(),
            symbols = language.symbol_count(),
            states = language.state_count(),
            "loaded grammar"
        );
        Ok(language)
    }

    /// Load an artifact file under its file stem.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Language, LoadError> {
        let artifact = GrammarArtifact::read(path)?;
        self.load(&artifact)
    }

    /// Load `<name>.grammar` from the first search path that has it.
    ///
    /// `name` must be a grammar identifier (`[a-z0-9_]+`), so the probed
    /// file always sits directly inside a search path.
    ///
    /// A candidate that exists but fails to load ends the search with its
    /// error; later search paths are not consulted.
    pub fn find(&self, name: &str) -> Result<Language, LoadError> {
        if !is_valid_name(name) {
            return Err(LoadError::InvalidName {
                name: name.to_owned(),
            });
        }

        let file_name = artifact_file_name(name);

        for dir in self.search_paths() {
            let path = dir.join(&file_name);
            tracing::trace!(grammar = name, path = %path.display(), "probing");
            if !path.is_file() {
                continue;
            }
            return self.load_path(&path).inspect_err(|err| {
                tracing::warn!(grammar = name, path = %path.display(), error = %err, "grammar failed to load");
            });
        }

        Err(LoadError::NotFound {
            name: name.to_owned(),
            searched: self.config.search_paths.clone(),
        })
    }

    /// Names of grammar artifacts present in the search paths, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names = Vec::new();

        for dir in self.search_paths() {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_none_or(|ext| ext != ARTIFACT_EXTENSION) {
                    continue;
                }
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}

fn artifact_file_name(name: &str) -> String {
    format!("{name}.{ARTIFACT_EXTENSION}")
}
