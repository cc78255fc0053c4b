//! Loader configuration.

use std::path::PathBuf;

/// Environment variable holding extra grammar directories (platform path-list syntax).
pub const GRAMMAR_PATH_ENV: &str = "DCONF_GRAMMAR_PATH";

/// Where the loader looks for `<name>.grammar` files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directories searched in order; the first hit wins.
    pub search_paths: Vec<PathBuf>,
}

impl LoaderConfig {
    /// Search paths from the environment and the user's directories.
    ///
    /// Search order:
    /// 1. `DCONF_GRAMMAR_PATH` entries
    /// 2. `<config dir>/dconf/grammars`
    /// 3. `<local data dir>/dconf/grammars`
    pub fn from_env() -> Self {
        let mut paths = Vec::new();

        if let Some(env_path) = std::env::var_os(GRAMMAR_PATH_ENV) {
            paths.extend(std::env::split_paths(&env_path).filter(|p| !p.as_os_str().is_empty()));
        }

        if let Some(config) = dirs::config_dir() {
            paths.push(config.join("dconf").join("grammars"));
        }

        if let Some(data) = dirs::data_local_dir() {
            paths.push(data.join("dconf").join("grammars"));
        }

        Self {
            search_paths: paths,
        }
    }

    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths: paths,
        }
    }

    pub fn add_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }
}
