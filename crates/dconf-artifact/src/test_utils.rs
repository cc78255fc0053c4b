use crate::{GrammarTables, SymbolInfo};

/// Small grammar shaped like a generated key-path parser:
/// `end`, two keywords, a `setting` supertype and the `document` root.
pub fn sample_tables() -> GrammarTables {
    GrammarTables {
        name: "sample".to_owned(),
        language_version: 14,
        symbols: vec![
            SymbolInfo::end(),
            SymbolInfo::keyword("width", "/sample/width"),
            SymbolInfo::keyword("height", "/sample/height"),
            SymbolInfo {
                supertype: true,
                ..SymbolInfo::rule("setting")
            },
            SymbolInfo::rule("document"),
        ],
        token_count: 3,
        external_token_count: 0,
        state_count: 5,
        large_state_count: 2,
        production_id_count: 1,
        max_alias_sequence_length: 1,
        fields: vec!["key".to_owned()],
        root: 4,
    }
}
