//! Artifact format constants.

/// Magic bytes identifying a compiled grammar artifact.
pub const MAGIC: [u8; 4] = *b"DCGT";

/// Current container format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 32;

/// Newest parser ABI version the tables may declare.
pub const LANGUAGE_VERSION: u16 = 15;

/// Oldest parser ABI version the tables may declare.
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u16 = 13;

/// File extension of artifacts on disk (`<name>.grammar`).
pub const ARTIFACT_EXTENSION: &str = "grammar";
