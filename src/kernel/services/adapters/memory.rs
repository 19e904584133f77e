//! In-memory document.
//!
//! Paragraph-based implementation of [`DocumentService`]: literal search with
//! case and whole-word options, generation-checked handles, and highlight
//! state that can be inspected afterwards.

use crate::kernel::services::ports::document::{
    DocumentError, DocumentService, MatchHandle, QueryOptions, ResolvedMatch, Result,
};
use crate::kernel::services::ports::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub paragraph: usize,
    pub start: usize,
    pub end: usize,
    pub color: String,
}

#[derive(Default)]
struct Paragraph {
    text: String,
    highlights: Vec<HighlightSpan>,
}

#[derive(Default)]
struct DocumentState {
    generation: u64,
    paragraphs: Vec<Paragraph>,
    selection: Option<MatchHandle>,
}

impl DocumentState {
    fn paragraph_for(&self, handle: &MatchHandle) -> Result<&Paragraph> {
        if handle.generation() != self.generation {
            return Err(DocumentError::StaleHandle);
        }
        let paragraph = self
            .paragraphs
            .get(handle.paragraph())
            .ok_or(DocumentError::StaleHandle)?;
        if handle.end() > paragraph.text.len() || handle.start() > handle.end() {
            return Err(DocumentError::StaleHandle);
        }
        Ok(paragraph)
    }
}

pub struct MemoryDocument {
    state: Mutex<DocumentState>,
    available: AtomicBool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DocumentState::default()),
            available: AtomicBool::new(true),
        }
    }

    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let doc = Self::new();
        if let Ok(mut state) = doc.state.lock() {
            state.paragraphs = paragraphs
                .into_iter()
                .map(|text| Paragraph {
                    text: text.into(),
                    highlights: Vec::new(),
                })
                .collect();
        }
        doc
    }

    /// One paragraph per line.
    pub fn from_text(text: &str) -> Self {
        Self::from_paragraphs(text.lines().map(|line| line.trim_end_matches('\r')))
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    pub fn paragraphs(&self) -> Vec<String> {
        self.lock()
            .map(|state| state.paragraphs.iter().map(|p| p.text.clone()).collect())
            .unwrap_or_default()
    }

    /// Highlighted spans in document order.
    pub fn highlights(&self) -> Vec<HighlightSpan> {
        self.lock()
            .map(|state| {
                state
                    .paragraphs
                    .iter()
                    .flat_map(|p| p.highlights.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selection(&self) -> Option<MatchHandle> {
        self.lock().ok().and_then(|state| state.selection)
    }

    pub fn find(&self, query: &str, options: QueryOptions) -> Result<Vec<MatchHandle>> {
        self.ensure_available()?;
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let regex = regex::RegexBuilder::new(&regex::escape(query))
            .case_insensitive(!options.match_case)
            .build()
            .map_err(|e| DocumentError::Rejected(e.to_string()))?;

        let state = self.lock()?;
        let mut out = Vec::new();
        for (index, paragraph) in state.paragraphs.iter().enumerate() {
            let text = paragraph.text.as_str();
            let mut pos = 0usize;
            while pos <= text.len() {
                let Some(m) = regex.find_at(text, pos) else {
                    break;
                };
                if options.match_whole_word && !is_whole_word(text, m.start(), m.end()) {
                    // Retry one char later so an overlapping whole-word hit is not skipped.
                    pos = m.start()
                        + text[m.start()..]
                            .chars()
                            .next()
                            .map(char::len_utf8)
                            .unwrap_or(1);
                    continue;
                }
                out.push(MatchHandle::new(state.generation, index, m.start(), m.end()));
                pos = m.end().max(m.start() + 1);
            }
        }
        Ok(out)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(DocumentError::Unavailable)
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, DocumentState>> {
        self.state
            .lock()
            .map_err(|_| DocumentError::Rejected("document state poisoned".to_string()))
    }

    fn resolve_now(&self, handles: &[MatchHandle]) -> Result<Vec<ResolvedMatch>> {
        self.ensure_available()?;
        let state = self.lock()?;
        handles
            .iter()
            .map(|handle| {
                let paragraph = state.paragraph_for(handle)?;
                Ok(ResolvedMatch {
                    text: paragraph.text[handle.start()..handle.end()].to_string(),
                    paragraph_text: paragraph.text.clone(),
                })
            })
            .collect()
    }

    fn select_now(&self, handle: MatchHandle) -> Result<()> {
        self.ensure_available()?;
        let mut state = self.lock()?;
        state.paragraph_for(&handle)?;
        state.selection = Some(handle);
        Ok(())
    }

    fn set_highlight_now(&self, handle: MatchHandle, color: Option<String>) -> Result<()> {
        self.ensure_available()?;
        let mut state = self.lock()?;
        state.paragraph_for(&handle)?;
        let paragraph = &mut state.paragraphs[handle.paragraph()];
        paragraph
            .highlights
            .retain(|span| span.start != handle.start() || span.end != handle.end());
        if let Some(color) = color {
            paragraph.highlights.push(HighlightSpan {
                paragraph: handle.paragraph(),
                start: handle.start(),
                end: handle.end(),
                color,
            });
            paragraph.highlights.sort_by_key(|span| span.start);
        }
        Ok(())
    }

    fn set_body_highlight_now(&self, color: Option<String>) -> Result<()> {
        self.ensure_available()?;
        let mut state = self.lock()?;
        for (index, paragraph) in state.paragraphs.iter_mut().enumerate() {
            paragraph.highlights.clear();
            if let Some(color) = &color {
                paragraph.highlights.push(HighlightSpan {
                    paragraph: index,
                    start: 0,
                    end: paragraph.text.len(),
                    color: color.clone(),
                });
            }
        }
        Ok(())
    }

    fn insert_now(&self, paragraphs: Vec<String>) -> Result<usize> {
        self.ensure_available()?;
        let mut state = self.lock()?;
        let count = paragraphs.len();
        state
            .paragraphs
            .extend(paragraphs.into_iter().map(|text| Paragraph {
                text,
                highlights: Vec::new(),
            }));
        state.generation += 1;
        state.selection = None;
        Ok(count)
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentService for MemoryDocument {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    fn search(
        &self,
        query: String,
        options: QueryOptions,
    ) -> BoxFuture<'_, Result<Vec<MatchHandle>>> {
        Box::pin(std::future::ready(self.find(&query, options)))
    }

    fn resolve(&self, handles: Vec<MatchHandle>) -> BoxFuture<'_, Result<Vec<ResolvedMatch>>> {
        Box::pin(std::future::ready(self.resolve_now(&handles)))
    }

    fn select(&self, handle: MatchHandle) -> BoxFuture<'_, Result<()>> {
        Box::pin(std::future::ready(self.select_now(handle)))
    }

    fn set_highlight(
        &self,
        handle: MatchHandle,
        color: Option<String>,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(std::future::ready(self.set_highlight_now(handle, color)))
    }

    fn set_body_highlight(&self, color: Option<String>) -> BoxFuture<'_, Result<()>> {
        Box::pin(std::future::ready(self.set_body_highlight_now(color)))
    }

    fn insert_paragraphs(&self, paragraphs: Vec<String>) -> BoxFuture<'_, Result<usize>> {
        Box::pin(std::future::ready(self.insert_now(paragraphs)))
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
