//! Grammar table model.
//!
//! Mirrors the constants and symbol metadata a generated parser carries:
//! symbol names and flags, table sizes, field names and the root symbol.

use std::collections::HashSet;
use std::num::NonZeroU16;

use serde::{Deserialize, Serialize};

/// Symbol ID (index into the symbol table).
pub type SymbolId = u16;

/// Field ID (1-based, like a generated parser's field map).
pub type FieldId = NonZeroU16;

/// Name of the built-in end-of-input symbol at ID 0.
pub const END_SYMBOL: &str = "end";

/// Compiled tables of one grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarTables {
    /// Grammar name (e.g., "dconfdwl").
    pub name: String,
    /// Parser ABI version the tables were generated for.
    pub language_version: u16,
    /// Symbol table; the index is the symbol ID.
    pub symbols: Vec<SymbolInfo>,
    /// Number of terminal symbols (IDs `0..token_count`).
    pub token_count: u16,
    /// Number of terminals produced by an external scanner.
    pub external_token_count: u16,
    pub state_count: u16,
    pub large_state_count: u16,
    pub production_id_count: u16,
    pub max_alias_sequence_length: u16,
    /// Field names; field ID `n` names `fields[n - 1]`.
    pub fields: Vec<String>,
    /// Root non-terminal.
    pub root: SymbolId,
}

/// Metadata of a single symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    pub visible: bool,
    pub named: bool,
    pub supertype: bool,
    /// Exact text matched by a literal terminal.
    pub literal: Option<String>,
}

impl SymbolInfo {
    /// The hidden end-of-input symbol every table starts with.
    pub fn end() -> Self {
        Self {
            name: END_SYMBOL.to_owned(),
            visible: false,
            named: true,
            supertype: false,
            literal: None,
        }
    }

    /// A visible, named terminal matching `literal` exactly.
    pub fn keyword(name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            named: true,
            supertype: false,
            literal: Some(literal.into()),
        }
    }

    /// A visible, named non-terminal.
    pub fn rule(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            named: true,
            supertype: false,
            literal: None,
        }
    }
}

/// Structural defect in grammar tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid grammar name {0:?}")]
    InvalidName(String),
    #[error("symbol table is empty")]
    NoSymbols,
    #[error("symbol 0 must be the hidden `end` symbol")]
    MissingEndSymbol,
    #[error("too many symbols: {0} (maximum 65535)")]
    TooManySymbols(usize),
    #[error("too many fields: {0} (maximum 65535)")]
    TooManyFields(usize),
    #[error("symbol {0} has an empty name")]
    EmptySymbolName(SymbolId),
    #[error("token count {token_count} out of range for {symbol_count} symbols")]
    TokenCountOutOfRange {
        token_count: u16,
        symbol_count: usize,
    },
    #[error("external token count {external} exceeds token count {tokens}")]
    ExternalTokenCountOutOfRange { external: u16, tokens: u16 },
    #[error("state table is empty")]
    NoStates,
    #[error("large state count {large} exceeds state count {states}")]
    LargeStateCountOutOfRange { large: u16, states: u16 },
    #[error("symbol {0} is not a terminal but has a literal")]
    LiteralOnNonTerminal(SymbolId),
    #[error("literal {0:?} is matched by more than one symbol")]
    DuplicateLiteral(String),
    #[error("symbol {0} is a terminal but marked as supertype")]
    SupertypeOnTerminal(SymbolId),
    #[error("root symbol {0} is out of range")]
    RootOutOfRange(SymbolId),
    #[error("root symbol {0} is a terminal")]
    RootIsTerminal(SymbolId),
    #[error("field {0} has an empty name")]
    EmptyFieldName(u16),
    #[error("field name {0:?} is declared twice")]
    DuplicateField(String),
}

impl GrammarTables {
    /// Check every structural invariant a loader relies on.
    pub fn validate(&self) -> Result<(), TableError> {
        if !is_valid_name(&self.name) {
            return Err(TableError::InvalidName(self.name.clone()));
        }

        let Some(first) = self.symbols.first() else {
            return Err(TableError::NoSymbols);
        };
        if first.name != END_SYMBOL || first.visible {
            return Err(TableError::MissingEndSymbol);
        }
        if self.symbols.len() > usize::from(u16::MAX) {
            return Err(TableError::TooManySymbols(self.symbols.len()));
        }
        if self.fields.len() > usize::from(u16::MAX) {
            return Err(TableError::TooManyFields(self.fields.len()));
        }

        if self.token_count == 0 || usize::from(self.token_count) > self.symbols.len() {
            return Err(TableError::TokenCountOutOfRange {
                token_count: self.token_count,
                symbol_count: self.symbols.len(),
            });
        }
        if self.external_token_count > self.token_count {
            return Err(TableError::ExternalTokenCountOutOfRange {
                external: self.external_token_count,
                tokens: self.token_count,
            });
        }

        if self.state_count == 0 {
            return Err(TableError::NoStates);
        }
        if self.large_state_count > self.state_count {
            return Err(TableError::LargeStateCountOutOfRange {
                large: self.large_state_count,
                states: self.state_count,
            });
        }

        let mut literals = HashSet::new();
        for (id, symbol) in self.symbols.iter().enumerate() {
            let id = id as SymbolId;
            if symbol.name.is_empty() {
                return Err(TableError::EmptySymbolName(id));
            }
            let terminal = id < self.token_count;
            if let Some(literal) = &symbol.literal {
                if !terminal {
                    return Err(TableError::LiteralOnNonTerminal(id));
                }
                if !literals.insert(literal.as_str()) {
                    return Err(TableError::DuplicateLiteral(literal.clone()));
                }
            }
            if symbol.supertype && terminal {
                return Err(TableError::SupertypeOnTerminal(id));
            }
        }

        if usize::from(self.root) >= self.symbols.len() {
            return Err(TableError::RootOutOfRange(self.root));
        }
        if self.root < self.token_count {
            return Err(TableError::RootIsTerminal(self.root));
        }

        let mut fields = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.is_empty() {
                return Err(TableError::EmptyFieldName(index as u16 + 1));
            }
            if !fields.insert(field.as_str()) {
                return Err(TableError::DuplicateField(field.clone()));
            }
        }

        Ok(())
    }

    /// Number of symbols, saturating at `u16::MAX`.
    pub fn symbol_count(&self) -> u16 {
        u16::try_from(self.symbols.len()).unwrap_or(u16::MAX)
    }

    /// Number of fields, saturating at `u16::MAX`.
    pub fn field_count(&self) -> u16 {
        u16::try_from(self.fields.len()).unwrap_or(u16::MAX)
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolInfo> {
        self.symbols.get(usize::from(id))
    }

    pub fn is_terminal(&self, id: SymbolId) -> bool {
        id < self.token_count
    }
}

/// Grammar names are identifiers: lowercase ASCII letters, digits, `_`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
