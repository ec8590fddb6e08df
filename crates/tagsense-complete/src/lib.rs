//! tagsense completion engine
//!
//! Given the text of an HTML document, its structural model and a cursor
//! offset, produces completion candidates with the exact edit each one
//! applies.
//!
//! ```text
//! text ──▶ Scanner ──▶ classify(offset) ──▶ Context ──▶ Resolver ──▶ Vec<Candidate>
//!                                                         ▲
//!                               Document + Vocabulary ────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tagsense_complete::complete;
//! use tagsense_parser::Document;
//! use tagsense_vocab::Configuration;
//!
//! let text = "<LI></";
//! let document = Document::parse(text);
//! let items = complete(text, 6, &document, &Configuration::default());
//! assert_eq!(items[0].label, "/LI");
//! assert_eq!(items[0].edit.apply(text), "<LI></LI>");
//! ```

pub mod context;
pub mod resolver;
pub mod tag_pair;

use serde::Serialize;
use tagsense_lexer::{Scanner, Span};
use tagsense_parser::Document;
use tagsense_vocab::{Configuration, Vocabulary};
use tracing::debug;

pub use context::{classify, Context};
pub use resolver::Resolver;
pub use tag_pair::{quote_complete, tag_complete};

/// What a candidate completes, for icon selection in editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKind {
    /// Tag names, end tags and closing tags.
    Property,
    /// Attribute names.
    Value,
    /// Event handler attributes.
    Function,
    /// Attribute values.
    Unit,
    /// Character entities.
    Keyword,
}

/// Replace the characters in `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Span, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Apply the edit to `text`. Snippet placeholders are kept verbatim.
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let start = self.range.start.min(chars.len());
        let end = self.range.end.clamp(start, chars.len());
        let mut out: String = chars[..start].iter().collect();
        out.push_str(&self.new_text);
        out.extend(&chars[end..]);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub label: String,
    pub kind: CompletionKind,
    pub documentation: Option<String>,
    pub edit: TextEdit,
    /// Whether `edit.new_text` contains `$n` tab stops.
    pub snippet: bool,
}

/// Candidates at `offset` using the builtin vocabulary.
pub fn complete(
    text: &str,
    offset: usize,
    document: &Document,
    config: &Configuration,
) -> Vec<Candidate> {
    complete_with(text, offset, document, config, Vocabulary::global())
}

/// Candidates at `offset` drawn from `vocabulary`.
pub fn complete_with(
    text: &str,
    offset: usize,
    document: &Document,
    config: &Configuration,
    vocabulary: &Vocabulary,
) -> Vec<Candidate> {
    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());
    let context = classify(&Scanner::tokenize(text), offset);
    let candidates = Resolver::new(&chars, offset, document, config, vocabulary).resolve(&context);
    debug!(offset, ?context, candidates = candidates.len(), "completion");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_replaces_range() {
        let edit = TextEdit::new(Span::new(1, 3), "header");
        assert_eq!(edit.apply("<he>"), "<header>");
    }

    #[test]
    fn test_apply_insert() {
        let edit = TextEdit::new(Span::new(5, 5), "$0</div>");
        assert_eq!(edit.apply("<div>"), "<div>$0</div>");
    }

    #[test]
    fn test_apply_counts_characters() {
        let edit = TextEdit::new(Span::new(3, 4), "b");
        assert_eq!(edit.apply("éé a"), "éé b");
    }

    #[test]
    fn test_apply_clamps_range() {
        let edit = TextEdit::new(Span::new(10, 20), "!");
        assert_eq!(edit.apply("ab"), "ab!");
    }

    #[test]
    fn test_custom_vocabulary() {
        use tagsense_vocab::provider::ProviderTable;
        use tagsense_vocab::{html5, Provider, Subset};

        const TINY: ProviderTable = ProviderTable {
            tags: &[("blink", "", &[])],
            globals: &[],
            value_sets: &[],
        };
        let vocabulary = Vocabulary::new(vec![
            Provider::from_table(Subset::Html5, &TINY),
            html5::provider(),
        ]);
        let text = "<bl";
        let items = complete_with(
            text,
            3,
            &Document::parse(text),
            &Configuration::default(),
            &vocabulary,
        );
        let labels: Vec<_> = items.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["blink", "blockquote"]);
    }

    #[test]
    fn test_offset_past_end() {
        let text = "<div>";
        let items = complete(text, 42, &Document::parse(text), &Configuration::default());
        assert_eq!(items[0].label, "</div>");
    }
}
