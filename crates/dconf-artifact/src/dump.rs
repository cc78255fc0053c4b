//! Human-readable listing of grammar tables.

use std::fmt::Write as _;

use super::tables::GrammarTables;

/// Render tables as text, one symbol per line.
///
/// ```text
/// grammar dconfsomebar (abi 14)
/// states 4 (2 large)
/// symbols 24 (23 tokens, 0 external)
///    0 end [hidden]
///    1 font = "/dotfiles/somebar/font"
/// ```
pub fn dump(tables: &GrammarTables) -> String {
    let mut out = String::new();

    writeln!(out, "grammar {} (abi {})", tables.name, tables.language_version).unwrap();
    writeln!(
        out,
        "states {} ({} large)",
        tables.state_count, tables.large_state_count
    )
    .unwrap();
    writeln!(
        out,
        "symbols {} ({} tokens, {} external)",
        tables.symbols.len(),
        tables.token_count,
        tables.external_token_count
    )
    .unwrap();

    let width = width_for_count(tables.symbols.len());
    for (id, symbol) in tables.symbols.iter().enumerate() {
        write!(out, "  {id:>width$} {}", symbol.name).unwrap();
        if let Some(literal) = &symbol.literal {
            write!(out, " = {literal:?}").unwrap();
        }

        let mut tags = Vec::new();
        if !symbol.visible {
            tags.push("hidden");
        } else if !symbol.named {
            tags.push("anonymous");
        }
        if symbol.supertype {
            tags.push("supertype");
        }
        if id == usize::from(tables.root) {
            tags.push("root");
        }
        if !tags.is_empty() {
            write!(out, " [{}]", tags.join(", ")).unwrap();
        }
        out.push('\n');
    }

    if !tables.fields.is_empty() {
        writeln!(out, "fields {}", tables.fields.len()).unwrap();
        let width = width_for_count(tables.fields.len() + 1);
        for (index, field) in tables.fields.iter().enumerate() {
            writeln!(out, "  {:>width$} {field}", index + 1).unwrap();
        }
    }

    out
}

/// Digits needed to print the largest index below `count`.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).ilog10() as usize + 1
}
