//! Artifact emission.

use super::artifact::ArtifactError;
use super::constants::HEADER_SIZE;
use super::header::Header;
use super::tables::GrammarTables;

/// Encode validated tables into artifact bytes.
///
/// Invalid tables are rejected here so that every emitted artifact loads.
pub fn emit(tables: &GrammarTables) -> Result<Vec<u8>, ArtifactError> {
    tables.validate()?;

    let payload = postcard::to_allocvec(tables).map_err(ArtifactError::Encode)?;
    let total = HEADER_SIZE + payload.len();
    let total_size = u32::try_from(total).map_err(|_| ArtifactError::TooLarge(total))?;

    let header = Header {
        checksum: crc32fast::hash(&payload),
        total_size,
        language_version: tables.language_version,
        symbol_count: tables.symbol_count(),
        state_count: tables.state_count,
        field_count: tables.field_count(),
        ..Header::default()
    };

    let mut output = Vec::with_capacity(total);
    output.extend_from_slice(&header.to_bytes());
    output.extend_from_slice(&payload);
    Ok(output)
}
