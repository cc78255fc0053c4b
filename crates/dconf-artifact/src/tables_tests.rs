use crate::test_utils::sample_tables;
use crate::{GrammarTables, SymbolInfo, TableError, is_valid_name};

fn check(tables: &GrammarTables) -> Result<(), TableError> {
    tables.validate()
}

#[test]
fn sample_is_valid() {
    assert_eq!(check(&sample_tables()), Ok(()));
}

#[test]
fn counts_and_lookup() {
    let tables = sample_tables();
    assert_eq!(tables.symbol_count(), 5);
    assert_eq!(tables.field_count(), 1);
    assert_eq!(tables.symbol(1).unwrap().name, "width");
    assert!(tables.symbol(5).is_none());
    assert!(tables.is_terminal(2));
    assert!(!tables.is_terminal(3));
}

#[test]
fn grammar_name_rule() {
    assert!(is_valid_name("dconfdwl"));
    assert!(is_valid_name("dconf_2"));
    for name in ["", "Dwl", "../dwl", "a/b", "dwl.grammar"] {
        assert!(!is_valid_name(name), "{name:?}");
    }
}

#[test]
fn rejects_bad_names() {
    for name in ["", "Dwl", "dconf-dwl", "dwl grammar"] {
        let tables = GrammarTables {
            name: name.to_owned(),
            ..sample_tables()
        };
        assert_eq!(check(&tables), Err(TableError::InvalidName(name.to_owned())));
    }
}

#[test]
fn rejects_empty_symbol_table() {
    let tables = GrammarTables {
        symbols: vec![],
        ..sample_tables()
    };
    assert_eq!(check(&tables), Err(TableError::NoSymbols));
}

#[test]
fn requires_hidden_end_symbol_first() {
    let mut tables = sample_tables();
    tables.symbols[0] = SymbolInfo::rule("end");
    assert_eq!(check(&tables), Err(TableError::MissingEndSymbol));

    let mut tables = sample_tables();
    tables.symbols.swap(0, 1);
    assert_eq!(check(&tables), Err(TableError::MissingEndSymbol));
}

#[test]
fn rejects_token_count_out_of_range() {
    let tables = GrammarTables {
        token_count: 0,
        ..sample_tables()
    };
    assert!(matches!(
        check(&tables),
        Err(TableError::TokenCountOutOfRange { token_count: 0, .. })
    ));

    let tables = GrammarTables {
        token_count: 6,
        ..sample_tables()
    };
    assert!(matches!(
        check(&tables),
        Err(TableError::TokenCountOutOfRange {
            token_count: 6,
            symbol_count: 5
        })
    ));
}

#[test]
fn rejects_external_tokens_beyond_tokens() {
    let tables = GrammarTables {
        external_token_count: 4,
        ..sample_tables()
    };
    assert_eq!(
        check(&tables),
        Err(TableError::ExternalTokenCountOutOfRange {
            external: 4,
            tokens: 3
        })
    );
}

#[test]
fn rejects_bad_state_counts() {
    let tables = GrammarTables {
        state_count: 0,
        large_state_count: 0,
        ..sample_tables()
    };
    assert_eq!(check(&tables), Err(TableError::NoStates));

    let tables = GrammarTables {
        large_state_count: 6,
        ..sample_tables()
    };
    assert_eq!(
        check(&tables),
        Err(TableError::LargeStateCountOutOfRange {
            large: 6,
            states: 5
        })
    );
}

#[test]
fn rejects_empty_symbol_name() {
    let mut tables = sample_tables();
    tables.symbols[3].name.clear();
    assert_eq!(check(&tables), Err(TableError::EmptySymbolName(3)));
}

#[test]
fn literals_belong_to_unique_terminals() {
    let mut tables = sample_tables();
    tables.symbols[4].literal = Some("/sample/document".to_owned());
    assert_eq!(check(&tables), Err(TableError::LiteralOnNonTerminal(4)));

    let mut tables = sample_tables();
    tables.symbols[2].literal = Some("/sample/width".to_owned());
    assert_eq!(
        check(&tables),
        Err(TableError::DuplicateLiteral("/sample/width".to_owned()))
    );
}

#[test]
fn supertypes_must_be_non_terminals() {
    let mut tables = sample_tables();
    tables.symbols[1].supertype = true;
    assert_eq!(check(&tables), Err(TableError::SupertypeOnTerminal(1)));
}

#[test]
fn root_must_be_an_in_range_non_terminal() {
    let tables = GrammarTables {
        root: 5,
        ..sample_tables()
    };
    assert_eq!(check(&tables), Err(TableError::RootOutOfRange(5)));

    let tables = GrammarTables {
        root: 2,
        ..sample_tables()
    };
    assert_eq!(check(&tables), Err(TableError::RootIsTerminal(2)));
}

#[test]
fn field_names_are_non_empty_and_unique() {
    let tables = GrammarTables {
        fields: vec!["key".to_owned(), String::new()],
        ..sample_tables()
    };
    assert_eq!(check(&tables), Err(TableError::EmptyFieldName(2)));

    let tables = GrammarTables {
        fields: vec!["key".to_owned(), "key".to_owned()],
        ..sample_tables()
    };
    assert_eq!(
        check(&tables),
        Err(TableError::DuplicateField("key".to_owned()))
    );
}

#[test]
fn table_error_display() {
    let err = TableError::InvalidName("Dwl".to_owned());
    assert_eq!(err.to_string(), r#"invalid grammar name "Dwl""#);

    let err = TableError::LargeStateCountOutOfRange {
        large: 6,
        states: 5,
    };
    assert_eq!(err.to_string(), "large state count 6 exceeds state count 5");
}
