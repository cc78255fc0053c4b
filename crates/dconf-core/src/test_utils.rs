use crate::{GrammarArtifact, GrammarTables, SymbolInfo};

/// Tables of a small key-path grammar named `name`.
pub fn tables(name: &str) -> GrammarTables {
    GrammarTables {
        name: name.to_owned(),
        language_version: 14,
        symbols: vec![
            SymbolInfo::end(),
            SymbolInfo::keyword("gap", format!("/dotfiles/{name}/gap")),
            SymbolInfo::keyword("border", format!("/dotfiles/{name}/border")),
            SymbolInfo {
                named: false,
                ..SymbolInfo::keyword("=", "=")
            },
            SymbolInfo {
                visible: false,
                ..SymbolInfo::rule("_setting")
            },
            SymbolInfo {
                supertype: true,
                ..SymbolInfo::rule("setting")
            },
            SymbolInfo::rule("source_file"),
        ],
        token_count: 4,
        external_token_count: 0,
        state_count: 4,
        large_state_count: 2,
        production_id_count: 1,
        max_alias_sequence_length: 1,
        fields: vec!["key".to_owned(), "value".to_owned()],
        root: 6,
    }
}

pub fn artifact(name: &str) -> GrammarArtifact {
    GrammarArtifact::from_tables(&tables(name)).unwrap()
}
