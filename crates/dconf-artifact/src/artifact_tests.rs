use crate::test_utils::sample_tables;
use crate::{
    ArtifactError, CompiledGrammar, FORMAT_VERSION, GrammarTables, HEADER_SIZE, Header,
    TableError, emit,
};

/// Build an artifact around an arbitrary payload with a correct checksum.
fn wrap_payload(header: Header, payload: &[u8]) -> Vec<u8> {
    let header = Header {
        checksum: crc32fast::hash(payload),
        total_size: (HEADER_SIZE + payload.len()) as u32,
        ..header
    };
    let mut bytes = header.to_bytes().to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

#[test]
fn emitted_artifact_loads() {
    let tables = sample_tables();
    let bytes = emit(&tables).unwrap();

    let grammar = CompiledGrammar::from_bytes(&bytes).unwrap();
    assert_eq!(grammar.name(), "sample");
    assert_eq!(grammar.tables(), &tables);
    assert_eq!(grammar.header().total_size as usize, bytes.len());
    assert_eq!(grammar.header().language_version, 14);
    assert_eq!(grammar.header().symbol_count, 5);
    assert_eq!(grammar.header().state_count, 5);
    assert_eq!(grammar.header().field_count, 1);
}

#[test]
fn emit_is_deterministic() {
    let a = emit(&sample_tables()).unwrap();
    let b = emit(&sample_tables()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        CompiledGrammar::from_bytes(&a).unwrap().checksum(),
        CompiledGrammar::from_bytes(&b).unwrap().checksum()
    );
}

#[test]
fn emit_rejects_invalid_tables() {
    let tables = GrammarTables {
        root: 1,
        ..sample_tables()
    };
    let err = emit(&tables).unwrap_err();
    assert!(matches!(
        err,
        ArtifactError::Invalid(TableError::RootIsTerminal(1))
    ));
}

#[test]
fn empty_input() {
    let err = CompiledGrammar::from_bytes(&[]).unwrap_err();
    assert!(matches!(err, ArtifactError::Empty));
}

#[test]
fn every_truncation_fails() {
    let bytes = emit(&sample_tables()).unwrap();
    for len in 0..bytes.len() {
        let result = CompiledGrammar::from_bytes(&bytes[..len]);
        assert!(result.is_err(), "prefix of {len} bytes loaded");
    }
}

#[test]
fn short_input_is_too_small() {
    let bytes = emit(&sample_tables()).unwrap();
    let err = CompiledGrammar::from_bytes(&bytes[..HEADER_SIZE - 1]).unwrap_err();
    assert!(matches!(err, ArtifactError::TooSmall(n) if n == HEADER_SIZE - 1));
}

#[test]
fn truncated_payload_is_size_mismatch() {
    let bytes = emit(&sample_tables()).unwrap();
    let err = CompiledGrammar::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, ArtifactError::SizeMismatch { .. }));
}

#[test]
fn wrong_magic() {
    let mut bytes = emit(&sample_tables()).unwrap();
    bytes[0] = b'X';
    let err = CompiledGrammar::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArtifactError::InvalidMagic));
}

#[test]
fn future_format_version() {
    let mut bytes = emit(&sample_tables()).unwrap();
    bytes[4..8].copy_from_slice(&(FORMAT_VERSION + 1).to_le_bytes());
    let err = CompiledGrammar::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArtifactError::UnsupportedVersion(v) if v == FORMAT_VERSION + 1));
}

#[test]
fn nonzero_reserved_bytes() {
    let mut bytes = emit(&sample_tables()).unwrap();
    bytes[HEADER_SIZE - 1] = 0x01;
    let err = CompiledGrammar::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArtifactError::NonZeroReserved));
}

#[test]
fn flipped_payload_byte_fails_checksum() {
    let mut bytes = emit(&sample_tables()).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    let err = CompiledGrammar::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArtifactError::ChecksumMismatch { .. }));
}

#[test]
fn garbage_payload_fails_decode() {
    let bytes = wrap_payload(Header::default(), &[0xFF; 8]);
    let err = CompiledGrammar::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArtifactError::Decode(_)));
}

#[test]
fn trailing_payload_bytes() {
    let tables = sample_tables();
    let mut payload = postcard::to_allocvec(&tables).unwrap();
    payload.extend_from_slice(&[0, 0]);

    let header = Header {
        language_version: 14,
        symbol_count: 5,
        state_count: 5,
        field_count: 1,
        ..Header::default()
    };
    let err = CompiledGrammar::from_bytes(&wrap_payload(header, &payload)).unwrap_err();
    assert!(matches!(err, ArtifactError::TrailingBytes(2)));
}

#[test]
fn header_must_agree_with_tables() {
    let payload = postcard::to_allocvec(&sample_tables()).unwrap();
    let header = Header {
        language_version: 14,
        symbol_count: 6,
        state_count: 5,
        field_count: 1,
        ..Header::default()
    };

    let err = CompiledGrammar::from_bytes(&wrap_payload(header, &payload)).unwrap_err();
    assert!(matches!(
        err,
        ArtifactError::HeaderMismatch {
            field: "symbol_count",
            header: 6,
            tables: 5
        }
    ));
}

#[test]
fn decoded_tables_are_validated() {
    let tables = GrammarTables {
        large_state_count: 9,
        ..sample_tables()
    };
    let payload = postcard::to_allocvec(&tables).unwrap();
    let header = Header {
        language_version: 14,
        symbol_count: 5,
        state_count: 5,
        field_count: 1,
        ..Header::default()
    };

    let err = CompiledGrammar::from_bytes(&wrap_payload(header, &payload)).unwrap_err();
    assert!(matches!(
        err,
        ArtifactError::Invalid(TableError::LargeStateCountOutOfRange { large: 9, states: 5 })
    ));
}

#[test]
fn artifact_error_display() {
    let err = ArtifactError::InvalidMagic;
    assert_eq!(err.to_string(), "invalid magic: expected DCGT");

    let err = ArtifactError::UnsupportedVersion(99);
    assert!(err.to_string().contains("99"));

    let err = ArtifactError::TooSmall(12);
    assert_eq!(err.to_string(), "artifact too small: 12 bytes (minimum 32)");

    let err = ArtifactError::SizeMismatch {
        header: 100,
        actual: 50,
    };
    assert!(err.to_string().contains("100"));
    assert!(err.to_string().contains("50"));

    let err = ArtifactError::ChecksumMismatch {
        expected: 0xDEAD_BEEF,
        actual: 1,
    };
    assert_eq!(
        err.to_string(),
        "checksum mismatch: header says 0xdeadbeef, payload hashes to 0x00000001"
    );
}

#[test]
fn from_path_reports_io_errors() {
    let err = CompiledGrammar::from_path("/nonexistent/dir/sample.grammar").unwrap_err();
    assert!(matches!(err, ArtifactError::Io(_)));
}
