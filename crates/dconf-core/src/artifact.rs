use std::borrow::Cow;
use std::path::Path;

use dconf_artifact::{ArtifactError, GrammarTables};

use crate::LoadError;

/// Named, immutable grammar artifact bytes.
///
/// Embedded artifacts borrow `'static` data; artifacts read from disk own
/// their bytes. The name is the identity the loaded descriptor must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarArtifact {
    name: Cow<'static, str>,
    bytes: Cow<'static, [u8]>,
}

impl GrammarArtifact {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            bytes: Cow::Owned(bytes.into()),
        }
    }

    pub const fn from_static(name: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Encode tables into an artifact named after the grammar.
    pub fn from_tables(tables: &GrammarTables) -> Result<Self, ArtifactError> {
        let bytes = dconf_artifact::emit(tables)?;
        Ok(Self::new(tables.name.clone(), bytes))
    }

    /// Read an artifact file; its name is the file stem.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match std::fs::read(path) {
            Ok(bytes) => Ok(Self::new(name, bytes)),
            Err(source) => Err(LoadError::Io {
                name,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the artifact to `dir/<name>.grammar`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> std::io::Result<std::path::PathBuf> {
        let path = dir
            .as_ref()
            .join(format!("{}.{}", self.name, dconf_artifact::ARTIFACT_EXTENSION));
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
