//! Artifact file header (32 bytes).
//!
//! The header repeats the table sizes that a loader checks before it decodes
//! the payload, so version mismatches are reported without touching the tables.

use super::constants::{FORMAT_VERSION, HEADER_SIZE, MAGIC};

/// File header - first 32 bytes of an artifact.
///
/// Layout:
/// - 0-15: identity and sizes (magic, format version, checksum, total_size)
/// - 16-23: table counts (4 × u16)
/// - 24-31: reserved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Magic bytes: b"DCGT"
    pub magic: [u8; 4],
    /// Container format version (currently 1)
    pub format_version: u32,
    /// CRC32 checksum of everything after the header
    pub checksum: u32,
    /// Total file size in bytes
    pub total_size: u32,

    /// Parser ABI version of the tables.
    pub language_version: u16,
    pub symbol_count: u16,
    pub state_count: u16,
    pub field_count: u16,

    pub _reserved: [u8; 8],
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            format_version: FORMAT_VERSION,
            checksum: 0,
            total_size: 0,
            language_version: 0,
            symbol_count: 0,
            state_count: 0,
            field_count: 0,
            _reserved: [0; 8],
        }
    }
}

impl Header {
    /// Decode header from the first 32 bytes, or `None` if `bytes` is shorter.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes = bytes.get(..HEADER_SIZE)?;

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&bytes[24..32]);

        Some(Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            format_version: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            checksum: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            total_size: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
            language_version: u16::from_le_bytes([bytes[16], bytes[17]]),
            symbol_count: u16::from_le_bytes([bytes[18], bytes[19]]),
            state_count: u16::from_le_bytes([bytes[20], bytes[21]]),
            field_count: u16::from_le_bytes([bytes[22], bytes[23]]),
            _reserved: reserved,
        })
    }

    /// Encode header to 32 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.format_version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.total_size.to_le_bytes());
        bytes[16..18].copy_from_slice(&self.language_version.to_le_bytes());
        bytes[18..20].copy_from_slice(&self.symbol_count.to_le_bytes());
        bytes[20..22].copy_from_slice(&self.state_count.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.field_count.to_le_bytes());
        bytes[24..32].copy_from_slice(&self._reserved);
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.format_version == FORMAT_VERSION
    }

    pub fn validate_reserved(&self) -> bool {
        self._reserved == [0; 8]
    }
}
