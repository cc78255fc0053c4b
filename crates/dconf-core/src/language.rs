use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dconf_artifact::{CompiledGrammar, FieldId, GrammarTables, SymbolId};

/// Language descriptor: a validated grammar, ready to hand to a parsing engine.
///
/// Cloning is cheap and clones share the same immutable tables, so a
/// descriptor can be read from any number of threads once loaded. Two
/// descriptors are equal when they carry the same name and checksum,
/// i.e. they were loaded from equivalent artifacts.
#[derive(Clone)]
pub struct Language {
    inner: Arc<LanguageInner>,
}

struct LanguageInner {
    tables: GrammarTables,
    checksum: u32,
    named_ids: HashMap<String, SymbolId>,
    anonymous_ids: HashMap<String, SymbolId>,
    literal_ids: HashMap<String, SymbolId>,
}

impl Language {
    /// Build the lookup indexes of an already validated grammar.
    pub(crate) fn from_compiled(grammar: CompiledGrammar) -> Self {
        let checksum = grammar.checksum();
        let tables = grammar.into_tables();

        let mut named_ids = HashMap::new();
        let mut anonymous_ids = HashMap::new();
        let mut literal_ids = HashMap::new();

        for (id, symbol) in tables.symbols.iter().enumerate() {
            let id = id as SymbolId;
            if symbol.visible {
                let index = if symbol.named {
                    &mut named_ids
                } else {
                    &mut anonymous_ids
                };
                // Aliased symbols share a name; the lowest ID is canonical.
                index.entry(symbol.name.clone()).or_insert(id);
            }
            if let Some(literal) = &symbol.literal {
                literal_ids.insert(literal.clone(), id);
            }
        }

        Self {
            inner: Arc::new(LanguageInner {
                tables,
                checksum,
                named_ids,
                anonymous_ids,
                literal_ids,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.tables.name
    }

    /// Parser ABI version the tables were generated for.
    pub fn abi_version(&self) -> u16 {
        self.inner.tables.language_version
    }

    /// Checksum of the artifact payload this descriptor was loaded from.
    pub fn checksum(&self) -> u32 {
        self.inner.checksum
    }

    pub fn tables(&self) -> &GrammarTables {
        &self.inner.tables
    }

    pub fn symbol_count(&self) -> usize {
        self.inner.tables.symbols.len()
    }

    pub fn token_count(&self) -> usize {
        usize::from(self.inner.tables.token_count)
    }

    pub fn external_token_count(&self) -> usize {
        usize::from(self.inner.tables.external_token_count)
    }

    pub fn state_count(&self) -> usize {
        usize::from(self.inner.tables.state_count)
    }

    pub fn large_state_count(&self) -> usize {
        usize::from(self.inner.tables.large_state_count)
    }

    pub fn field_count(&self) -> usize {
        self.inner.tables.fields.len()
    }

    pub fn node_kind_for_id(&self, id: SymbolId) -> Option<&str> {
        self.inner.tables.symbol(id).map(|s| s.name.as_str())
    }

    /// Resolve a visible node kind.
    ///
    /// The hidden `end` symbol is never resolved, so `None` is unambiguous.
    pub fn id_for_node_kind(&self, kind: &str, named: bool) -> Option<SymbolId> {
        let index = if named {
            &self.inner.named_ids
        } else {
            &self.inner.anonymous_ids
        };
        index.get(kind).copied()
    }

    pub fn node_kind_is_named(&self, id: SymbolId) -> bool {
        self.inner.tables.symbol(id).is_some_and(|s| s.named)
    }

    pub fn node_kind_is_visible(&self, id: SymbolId) -> bool {
        self.inner.tables.symbol(id).is_some_and(|s| s.visible)
    }

    pub fn node_kind_is_supertype(&self, id: SymbolId) -> bool {
        self.inner.tables.symbol(id).is_some_and(|s| s.supertype)
    }

    pub fn is_terminal(&self, id: SymbolId) -> bool {
        self.inner.tables.is_terminal(id)
    }

    /// Root non-terminal of every syntax tree.
    pub fn root(&self) -> SymbolId {
        self.inner.tables.root
    }

    /// Exact text a literal terminal matches.
    pub fn literal_for_id(&self, id: SymbolId) -> Option<&str> {
        self.inner
            .tables
            .symbol(id)
            .and_then(|s| s.literal.as_deref())
    }

    /// Terminal that matches `text` exactly.
    pub fn id_for_literal(&self, text: &str) -> Option<SymbolId> {
        self.inner.literal_ids.get(text).copied()
    }

    pub fn field_name_for_id(&self, id: FieldId) -> Option<&str> {
        self.inner
            .tables
            .fields
            .get(usize::from(id.get()) - 1)
            .map(String::as_str)
    }

    pub fn field_id_for_name(&self, name: &str) -> Option<FieldId> {
        let index = self.inner.tables.fields.iter().position(|f| f == name)?;
        u16::try_from(index + 1).ok().and_then(FieldId::new)
    }

    /// Visible named node kinds in ID order.
    pub fn node_kinds(&self) -> Vec<&str> {
        self.inner
            .tables
            .symbols
            .iter()
            .filter(|s| s.visible && s.named)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Human-readable listing of the symbol table.
    pub fn dump(&self) -> String {
        dconf_artifact::dump(&self.inner.tables)
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.checksum() == other.checksum() && self.name() == other.name())
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name())
            .field("abi_version", &self.abi_version())
            .field("symbols", &self.symbol_count())
            .field("states", &self.state_count())
            .field("checksum", &format_args!("{:#010x}", self.checksum()))
            .finish()
    }
}
