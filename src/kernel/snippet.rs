//! Snippet windows: a few words of context either side of a match.

use crate::kernel::services::ports::SearchResultItem;
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnippetWindow {
    pub before: String,
    pub matched: String,
    pub after: String,
}

impl SnippetWindow {
    fn whole_paragraph(paragraph: &str) -> Self {
        Self {
            before: paragraph.to_string(),
            matched: String::new(),
            after: String::new(),
        }
    }
}

/// Builds the window around the `occurrence`-th case-insensitive occurrence of
/// `item.match_text` in `item.paragraph_text`.
///
/// Falls back to the whole paragraph in `before` when the match text is blank
/// or the paragraph has fewer occurrences than requested.
pub fn window(
    item: &SearchResultItem,
    occurrence: usize,
    words_before: usize,
    words_after: usize,
) -> SnippetWindow {
    let paragraph = item.paragraph_text.as_str();
    if item.match_text.trim().is_empty() {
        return SnippetWindow::whole_paragraph(paragraph);
    }
    let Some((start, end)) = find_occurrence(paragraph, &item.match_text, occurrence) else {
        return SnippetWindow::whole_paragraph(paragraph);
    };

    let before: Vec<&str> = paragraph[..start].split_whitespace().collect();
    let before = before[before.len().saturating_sub(words_before)..].join(" ");
    let after = paragraph[end..]
        .split_whitespace()
        .take(words_after)
        .collect::<Vec<_>>()
        .join(" ");

    SnippetWindow {
        before,
        matched: paragraph[start..end].to_string(),
        after,
    }
}

/// For each item, how many earlier items share its paragraph text.
pub fn occurrence_indices(items: &[SearchResultItem]) -> Vec<usize> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    items
        .iter()
        .map(|item| {
            let count = seen.entry(item.paragraph_text.as_str()).or_insert(0);
            let index = *count;
            *count += 1;
            index
        })
        .collect()
}

/// Byte range of the `occurrence`-th non-overlapping case-insensitive match.
pub fn find_occurrence(haystack: &str, needle: &str, occurrence: usize) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let mut pos = 0usize;
    let mut seen = 0usize;
    while let Some((start, end)) = next_match(haystack, pos, needle) {
        if seen == occurrence {
            return Some((start, end));
        }
        seen += 1;
        pos = end;
    }
    None
}

fn next_match(haystack: &str, from: usize, needle: &str) -> Option<(usize, usize)> {
    haystack[from..]
        .char_indices()
        .find_map(|(i, _)| match_at(haystack, from + i, needle).map(|end| (from + i, end)))
}

// Compares char by char so offsets stay valid in the original text even when
// lowercasing would change byte lengths.
fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut hay = haystack[start..].char_indices();
    let mut end = start;
    for n in needle.chars() {
        let (i, h) = hay.next()?;
        if h != n && !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        end = start + i + h.len_utf8();
    }
    Some(end)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/snippet.rs"]
mod tests;
