//! Title and abstract heuristics over rendered page text

use std::sync::LazyLock;

use regex::Regex;

/// Best-effort metadata for one document.
///
/// Either field may be absent; extraction failure is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub abstract_text: Option<String>,
}

impl Metadata {
    /// Metadata with both fields absent (extraction failed or found nothing).
    pub fn none() -> Self {
        Self::default()
    }

    /// Both fields present, the precondition for classification.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.abstract_text.is_some()
    }
}

/// "Abstract" marker with trailing whitespace/colons consumed
static ABSTRACT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)abstract[\s:]*").expect("valid regex"));

/// Numbered-section start on a fresh line ("\n1 ...")
static SECTION_ONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n1\s").expect("valid regex"));

/// "Introduction" heading, any casing
static INTRODUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)introduction").expect("valid regex"));

/// Title rule: the literal first line of the first page's text, trimmed.
///
/// A page with no text, or whose first line trims to empty, yields no
/// title; later lines are never consulted.
pub fn title_from_page(text: &str) -> Option<String> {
    let first = text.lines().next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Abstract rule: capture from the "Abstract" marker up to the earliest
/// terminator. Terminators are an explicit ordered list so the boundary
/// policy stays auditable and testable in isolation:
///   1. a blank line
///   2. a numbered-section start ("\n1 ")
///   3. the word "Introduction"
/// No terminator means the span runs to the end of the page text.
pub fn abstract_from_page(text: &str) -> Option<String> {
    let marker = ABSTRACT_MARKER.find(text)?;
    let rest = &text[marker.end()..];

    let mut end = rest.len();
    let stops = [
        rest.find("\n\n"),
        SECTION_ONE.find(rest).map(|m| m.start()),
        INTRODUCTION.find(rest).map(|m| m.start()),
    ];
    for stop in stops.into_iter().flatten() {
        end = end.min(stop);
    }

    let span = rest[..end].trim();
    if span.is_empty() {
        None
    } else {
        Some(span.to_string())
    }
}
