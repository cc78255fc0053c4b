#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Binary format for compiled grammar tables.
//!
//! A grammar artifact is a 32-byte [`Header`] followed by a postcard-encoded
//! [`GrammarTables`] payload. This crate contains:
//! - Format constants and the header codec
//! - The table model and its structural validation
//! - Emission ([`emit`]) and decoding ([`CompiledGrammar::from_bytes`])
//! - A human-readable [`dump`] of the tables

mod artifact;
mod constants;
mod dump;
mod emit;
mod header;
mod tables;

#[cfg(test)]
mod artifact_tests;
#[cfg(test)]
mod tables_tests;
#[cfg(test)]
mod test_utils;

pub use artifact::{ArtifactError, CompiledGrammar};
pub use constants::{
    ARTIFACT_EXTENSION, FORMAT_VERSION, HEADER_SIZE, LANGUAGE_VERSION, MAGIC,
    MIN_COMPATIBLE_LANGUAGE_VERSION,
};
pub use dump::dump;
pub use emit::emit;
pub use header::Header;
pub use tables::{
    END_SYMBOL, FieldId, GrammarTables, SymbolId, SymbolInfo, TableError, is_valid_name,
};
