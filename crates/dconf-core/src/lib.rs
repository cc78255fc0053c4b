#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar loading for dconf configuration-key grammars.
//!
//! A [`GrammarArtifact`] is a named, immutable blob of compiled grammar tables.
//! The [`GrammarLoader`] validates it and produces a [`Language`] descriptor
//! that a parsing engine consumes. Descriptors are kept in an explicitly
//! constructed [`LanguageRegistry`] instead of process-wide statics.
//!
//! ```
//! use dconf_core::{GrammarArtifact, GrammarLoader, LoadError};
//!
//! let loader = GrammarLoader::default();
//! let err = loader.load(&GrammarArtifact::from_static("empty", &[])).unwrap_err();
//! assert!(matches!(err, LoadError::Malformed { .. }));
//! assert_eq!(err.name(), "empty");
//! ```

mod artifact;
mod config;
mod error;
mod language;
mod loader;
mod registry;

#[cfg(test)]
mod test_utils;

pub use artifact::GrammarArtifact;
pub use config::{GRAMMAR_PATH_ENV, LoaderConfig};
pub use error::LoadError;
pub use language::Language;
pub use loader::GrammarLoader;
pub use registry::LanguageRegistry;

pub use dconf_artifact::{
    ArtifactError, FieldId, GrammarTables, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION,
    SymbolId, SymbolInfo, TableError,
};
