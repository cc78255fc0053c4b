#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Built-in dconf grammars.
//!
//! Each enabled `grammar-*` feature embeds one artifact, encoded at build
//! time from [`grammars`]. Loading goes through the same validating
//! [`GrammarLoader`] as artifacts read from disk.
//!
//! ```
//! let dwl = dconf_langs::load("dconfdwl").unwrap();
//! assert_eq!(dwl.name(), "dconfdwl");
//! ```

use dconf_core::{GrammarLoader, Language, LanguageRegistry, LoadError};

pub mod builtin;
pub mod grammars;

pub use builtin::*;


/// Load a built-in grammar by name or alias.
pub fn load(name: &str) -> Result<Language, LoadError> {
    let Some(artifact) = artifact(name) else {
        return Err(LoadError::NotFound {
            name: name.to_owned(),
            searched: Vec::new(),
        });
    };
    GrammarLoader::default().load(artifact)
}

/// Registry holding every built-in grammar, backed by `loader`.
pub fn registry_with(loader: GrammarLoader) -> Result<LanguageRegistry, LoadError> {
    let mut registry = LanguageRegistry::new(loader);
    register_all(&mut registry)?;
    Ok(registry)
}

/// Registry holding every built-in grammar, with no search paths.
pub fn registry() -> Result<LanguageRegistry, LoadError> {
    registry_with(GrammarLoader::default())
}
