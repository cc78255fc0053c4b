//! Decoding and validation of compiled grammar artifacts.

use std::io;
use std::path::Path;

use super::constants::{FORMAT_VERSION, HEADER_SIZE};
use super::header::Header;
use super::tables::{GrammarTables, TableError};

/// Artifact decode or encode error.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact is empty")]
    Empty,
    #[error("artifact too small: {0} bytes (minimum {HEADER_SIZE})")]
    TooSmall(usize),
    #[error("artifact too large: {0} bytes")]
    TooLarge(usize),
    #[error("invalid magic: expected DCGT")]
    InvalidMagic,
    #[error("unsupported format version: {0} (expected {FORMAT_VERSION})")]
    UnsupportedVersion(u32),
    #[error("reserved header bytes are not zero")]
    NonZeroReserved,
    #[error("size mismatch: header says {header} bytes, got {actual}")]
    SizeMismatch { header: u32, actual: usize },
    #[error("checksum mismatch: header says {expected:#010x}, payload hashes to {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("payload decode error: {0}")]
    Decode(#[source] postcard::Error),
    #[error("payload encode error: {0}")]
    Encode(#[source] postcard::Error),
    #[error("{0} trailing bytes after payload")]
    TrailingBytes(usize),
    #[error("header {field} is {header}, tables say {tables}")]
    HeaderMismatch {
        field: &'static str,
        header: u32,
        tables: u32,
    },
    #[error("invalid tables: {0}")]
    Invalid(#[from] TableError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A decoded and validated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledGrammar {
    header: Header,
    tables: GrammarTables,
}

impl CompiledGrammar {
    /// Decode an artifact from bytes.
    ///
    /// Checks run cheapest first: length, magic, format version, reserved
    /// bytes, size, checksum, payload decoding, header/table agreement,
    /// table invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        if bytes.is_empty() {
            return Err(ArtifactError::Empty);
        }
        let Some(header) = Header::from_bytes(bytes) else {
            return Err(ArtifactError::TooSmall(bytes.len()));
        };

        if !header.validate_magic() {
            return Err(ArtifactError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ArtifactError::UnsupportedVersion(header.format_version));
        }
        if !header.validate_reserved() {
            return Err(ArtifactError::NonZeroReserved);
        }
        if header.total_size as usize != bytes.len() {
            return Err(ArtifactError::SizeMismatch {
                header: header.total_size,
                actual: bytes.len(),
            });
        }

        let payload = &bytes[HEADER_SIZE..];
        let actual = crc32fast::hash(payload);
        if actual != header.checksum {
            return Err(ArtifactError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        let (tables, rest): (GrammarTables, _) =
            postcard::take_from_bytes(payload).map_err(ArtifactError::Decode)?;
        if !rest.is_empty() {
            return Err(ArtifactError::TrailingBytes(rest.len()));
        }

        check_header_agrees(&header, &tables)?;
        tables.validate()?;

        Ok(Self { header, tables })
    }

    /// Read and decode an artifact file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn tables(&self) -> &GrammarTables {
        &self.tables
    }

    pub fn into_tables(self) -> GrammarTables {
        self.tables
    }

    /// Grammar name declared by the tables.
    pub fn name(&self) -> &str {
        &self.tables.name
    }

    /// Payload checksum; equal artifacts have equal checksums.
    pub fn checksum(&self) -> u32 {
        self.header.checksum
    }
}

fn check_header_agrees(header: &Header, tables: &GrammarTables) -> Result<(), ArtifactError> {
    let pairs: [(&'static str, usize, usize); 4] = [
        (
            "language_version",
            usize::from(header.language_version),
            usize::from(tables.language_version),
        ),
        (
            "symbol_count",
            usize::from(header.symbol_count),
            tables.symbols.len(),
        ),
        (
            "state_count",
            usize::from(header.state_count),
            usize::from(tables.state_count),
        ),
        (
            "field_count",
            usize::from(header.field_count),
            tables.fields.len(),
        ),
    ];

    for (field, in_header, in_tables) in pairs {
        if in_header != in_tables {
            return Err(ArtifactError::HeaderMismatch {
                field,
                header: in_header as u32,
                tables: u32::try_from(in_tables).unwrap_or(u32::MAX),
            });
        }
    }
    Ok(())
}
