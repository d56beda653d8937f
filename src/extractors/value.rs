// src/extractors/value.rs

// --- Imports ---
use crate::pubchem::models::Value;

/// Resolves a value node to its best single textual representation.
///
/// Priority order: the first `StringWithMarkup` entry (trimmed) if it is
/// non-blank, otherwise the first `Number` formatted as a decimal string
/// with the unit appended when present. Returns `None` when no shape
/// yields a non-blank string; absence is not an error.
pub fn resolve(value: &Value) -> Option<String> {
    if let Some(markup) = value.string_with_markup.as_deref() {
        if let Some(first) = markup.first() {
            let text = first.string.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    // No usable markup text; fall back to Number + Unit
    let number = value.number.as_deref().and_then(|numbers| numbers.first())?;
    let mut rendered = number.to_string();
    if let Some(unit) = value.unit.as_deref() {
        rendered.push(' ');
        rendered.push_str(unit);
    }
    Some(rendered)
}

/// Resolves every `StringWithMarkup` entry of a value node, in order,
/// skipping blank/whitespace-only entries. Entries are appended verbatim
/// (no trimming) so narrative text keeps its original spacing.
pub fn resolve_all(value: &Value) -> Vec<String> {
    value
        .string_with_markup
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|entry| !entry.string.trim().is_empty())
        .map(|entry| entry.string.clone())
        .collect()
}
