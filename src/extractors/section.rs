// src/extractors/section.rs

// --- Imports ---
use crate::pubchem::models::{Information, Section};

/// Finds the section addressed by a heading path, searching the given
/// top-level sections depth-first in document order.
///
/// Each path segment is matched case-sensitively against headings at its
/// level; the first match wins and the search commits to it. If the
/// remaining path fails inside the matched section, siblings sharing the
/// heading are NOT reconsidered — callers must be aware that a heading
/// collision elsewhere in the tree is never reached.
pub fn find_section<'a>(sections: &'a [Section], path: &[&str]) -> Option<&'a Section> {
    let (head, rest) = path.split_first()?;

    let matched = sections.iter().find(|s| s.toc_heading == *head)?;
    tracing::trace!("Matched heading '{}' ({} segments remaining)", head, rest.len());

    if rest.is_empty() {
        Some(matched)
    } else {
        find_section(matched.subsections.as_deref().unwrap_or_default(), rest)
    }
}

/// Returns the section's own information items in original order, or an
/// empty slice when absent. No recursion into subsections; callers that
/// need nested items walk `subsections` themselves.
pub fn collect_information(section: &Section) -> &[Information] {
    section.information.as_deref().unwrap_or_default()
}
