//! Candidate resolution and edit building.
//!
//! Turns a [`Context`] into candidates, each carrying the minimal edit that
//! applies it. Edits only ever replace the name, value word or entity being
//! typed; surrounding quotes and brackets are left alone unless the context
//! says they are missing.

use std::collections::HashSet;

use tagsense_lexer::{is_void_element, Span};
use tagsense_parser::{Document, NodeId};
use tagsense_vocab::{
    entities_with_prefix, Configuration, Provider, Quotes, ValueDomain, Vocabulary,
};

use crate::context::Context;
use crate::{Candidate, CompletionKind, TextEdit};

const DATA_PREFIX: &str = "data-";

pub struct Resolver<'a> {
    chars: &'a [char],
    offset: usize,
    document: &'a Document,
    config: &'a Configuration,
    vocabulary: &'a Vocabulary,
    seen: HashSet<String>,
    out: Vec<Candidate>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        chars: &'a [char],
        offset: usize,
        document: &'a Document,
        config: &'a Configuration,
        vocabulary: &'a Vocabulary,
    ) -> Self {
        Self {
            chars,
            offset,
            document,
            config,
            vocabulary,
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    pub fn resolve(mut self, context: &Context) -> Vec<Candidate> {
        match context {
            Context::TagName { start, end } => self.tag_names(*start, *end),
            Context::EndTagName { start, end } => self.end_tag_names(*start, *end),
            Context::AttributeName {
                tag,
                start,
                end,
                existing,
            } => self.attribute_names(tag, *start, *end, existing),
            Context::AttributeValueUnset {
                tag,
                attribute,
                offset,
            } => self.values(tag, attribute, Span::new(*offset, *offset), "", None),
            Context::AttributeValue {
                tag,
                attribute,
                start,
                end,
                quote,
            } => self.attribute_value(tag, attribute, *start, *end, *quote),
            Context::EntityReference { start, end } => self.entities(*start, *end),
            Context::AfterStartTag { tag, offset } => self.auto_close(tag, *offset),
            Context::None => {}
        }
        self.out
    }

    fn providers(&self) -> impl Iterator<Item = &'a Provider> {
        self.vocabulary.enabled(self.config)
    }

    /// Text typed so far in a replaced range, without leading whitespace.
    fn typed(&self, start: usize) -> String {
        let start = start.min(self.offset);
        self.chars[start..self.offset]
            .iter()
            .collect::<String>()
            .trim_start()
            .to_string()
    }

    /// Next non-whitespace character at or after `at`.
    fn next_significant(&self, at: usize) -> Option<char> {
        self.chars.get(at..)?.iter().copied().find(|c| !c.is_whitespace())
    }

    /// Record a candidate if `key` starts with `typed` and its label is new.
    fn offer(&mut self, typed: &str, key: &str, candidate: Candidate) {
        if !starts_with_ignore_case(key, typed) {
            return;
        }
        if self.seen.insert(candidate.label.to_ascii_lowercase()) {
            self.out.push(candidate);
        }
    }

    // --- Tags ---

    fn tag_names(&mut self, start: usize, end: usize) {
        let typed = self.typed(start);
        let range = Span::new(start, end);
        for provider in self.providers() {
            for tag in provider.tags() {
                let candidate = Candidate {
                    label: tag.name.to_string(),
                    kind: CompletionKind::Property,
                    documentation: tag.description.map(str::to_string),
                    edit: TextEdit::new(range, tag.name),
                    snippet: false,
                };
                self.offer(&typed, tag.name, candidate);
            }
        }

        // `<` sits right before the typed range
        if let Some(id) = start.checked_sub(1).and_then(|lt| self.document.node_before(lt)) {
            if let Some(open) = self.open_ancestor(id) {
                let tag = self.document.node(open).tag.clone();
                let label = format!("/{tag}");
                let edit = TextEdit::new(range, format!("{label}{}", self.bracket_after(end)));
                let candidate = Candidate {
                    label: label.clone(),
                    kind: CompletionKind::Property,
                    documentation: None,
                    edit,
                    snippet: false,
                };
                self.offer(&typed, &label, candidate);
            }
        }
    }

    fn end_tag_names(&mut self, start: usize, end: usize) {
        let typed = self.typed(start);
        let range = Span::new(start, end);
        let bracket = self.bracket_after(end);

        let open = self.matched_end_tag().or_else(|| {
            self.document
                .node_before(self.offset)
                .and_then(|id| self.open_ancestor(id))
        });
        if let Some(open) = open {
            let tag = self.document.node(open).tag.clone();
            let candidate = Candidate {
                label: format!("/{tag}"),
                kind: CompletionKind::Property,
                documentation: None,
                edit: TextEdit::new(range, format!("{tag}{bracket}")),
                snippet: false,
            };
            self.offer(&typed, &tag, candidate);
            return;
        }

        for provider in self.providers() {
            for tag in provider.tags().iter().filter(|t| !is_void_element(t.name)) {
                let candidate = Candidate {
                    label: format!("/{}", tag.name),
                    kind: CompletionKind::Property,
                    documentation: tag.description.map(str::to_string),
                    edit: TextEdit::new(range, format!("{}{bracket}", tag.name)),
                    snippet: false,
                };
                self.offer(&typed, tag.name, candidate);
            }
        }
    }

    /// The element whose end tag is being edited at the offset.
    fn matched_end_tag(&self) -> Option<NodeId> {
        self.document.iter().find_map(|(id, node)| {
            let span = node.end_tag?;
            (span.start < self.offset && self.offset <= span.end).then_some(id)
        })
    }

    /// The nearest element, starting at `id`, still waiting for its end tag
    /// at the offset.
    fn open_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.document.ancestors(id).find(|&a| {
            let node = self.document.node(a);
            !node.closed() || node.end_tag_start().is_some_and(|s| s > self.offset)
        })
    }

    /// `>` unless one already follows.
    fn bracket_after(&self, at: usize) -> &'static str {
        if self.next_significant(at) == Some('>') {
            ""
        } else {
            ">"
        }
    }

    fn auto_close(&mut self, tag: &str, offset: usize) {
        if self.config.hide_auto_complete_proposals || is_void_element(tag) {
            return;
        }
        let label = format!("</{tag}>");
        let candidate = Candidate {
            label: label.clone(),
            kind: CompletionKind::Property,
            documentation: None,
            edit: TextEdit::new(Span::new(offset, offset), format!("$0{label}")),
            snippet: true,
        };
        self.offer("", &label, candidate);
    }

    // --- Attributes ---

    fn attribute_names(&mut self, tag: &str, start: usize, end: usize, existing: &[String]) {
        let typed = self.typed(start);
        let range = Span::new(start, end);
        let has_assign = self.next_significant(end) == Some('=');
        let quotes = self.config.attribute_default_value;
        for name in existing {
            self.seen.insert(name.to_ascii_lowercase());
        }

        for provider in self.providers() {
            for attr in provider.attributes(tag) {
                let (new_text, snippet) = if has_assign || !attr.takes_value() {
                    (attr.name.to_string(), false)
                } else {
                    (format!("{}{}", attr.name, value_stub(quotes, 1)), true)
                };
                let kind = match attr.domain {
                    ValueDomain::Handler => CompletionKind::Function,
                    _ => CompletionKind::Value,
                };
                let candidate = Candidate {
                    label: attr.name.to_string(),
                    kind,
                    documentation: None,
                    edit: TextEdit::new(range, new_text),
                    snippet,
                };
                self.offer(&typed, attr.name, candidate);
            }
        }

        let stub = |n| if has_assign { String::new() } else { value_stub(quotes, n) };
        let wildcard = Candidate {
            label: DATA_PREFIX.to_string(),
            kind: CompletionKind::Value,
            documentation: None,
            edit: TextEdit::new(range, format!("{DATA_PREFIX}$1{}", stub(2))),
            snippet: true,
        };
        self.offer(&typed, DATA_PREFIX, wildcard);

        let mut observed: Vec<String> = self
            .document
            .attribute_names()
            .filter(|name| name.starts_with(DATA_PREFIX) && name.len() > DATA_PREFIX.len())
            .map(str::to_string)
            .collect();
        // the name under the cursor is itself an attribute of the document
        let current: String = self.chars[start..end].iter().collect();
        if let Some(i) = observed.iter().position(|n| n == current.trim()) {
            observed.remove(i);
        }
        for name in observed {
            let candidate = Candidate {
                label: name.clone(),
                kind: CompletionKind::Value,
                documentation: None,
                edit: TextEdit::new(range, format!("{name}{}", stub(1))),
                snippet: !has_assign,
            };
            self.offer(&typed, &name, candidate);
        }
    }

    // --- Values ---

    fn attribute_value(
        &mut self,
        tag: &str,
        attribute: &str,
        start: usize,
        end: usize,
        quote: Option<char>,
    ) {
        let Some(q) = quote else {
            return self.values(tag, attribute, Span::new(start, end), &self.typed(start), None);
        };
        if self.offset == start {
            return self.values(tag, attribute, Span::new(start, end), "", Some(q));
        }

        let content_start = start + 1;
        let content_end = if end - start >= 2 && self.chars[end - 1] == q {
            end - 1
        } else {
            end
        };
        let mut word_start = self.offset;
        while word_start > content_start && !self.chars[word_start - 1].is_whitespace() {
            word_start -= 1;
        }
        let mut word_end = self.offset;
        while word_end < content_end && !self.chars[word_end].is_whitespace() {
            word_end += 1;
        }
        let typed = self.typed(word_start);
        self.values(tag, attribute, Span::new(word_start, word_end), &typed, None);
    }

    /// Offer the value domain of `tag`/`attribute`, wrapping each value in
    /// `quote` when given.
    fn values(
        &mut self,
        tag: &str,
        attribute: &str,
        range: Span,
        typed: &str,
        quote: Option<char>,
    ) {
        let values: Vec<&'static str> = self
            .providers()
            .flat_map(|p| p.values(tag, attribute).iter().copied())
            .collect();
        for value in values {
            let new_text = match quote {
                Some(q) => format!("{q}{value}{q}"),
                None => value.to_string(),
            };
            let candidate = Candidate {
                label: value.to_string(),
                kind: CompletionKind::Unit,
                documentation: None,
                edit: TextEdit::new(range, new_text),
                snippet: false,
            };
            self.offer(typed, value, candidate);
        }
    }

    // --- Entities ---

    fn entities(&mut self, start: usize, end: usize) {
        let typed = self.typed(start + 1);
        let range = Span::new(start, end);
        for entity in entities_with_prefix(&typed) {
            let label = format!("&{};", entity.name);
            let candidate = Candidate {
                label: label.clone(),
                kind: CompletionKind::Keyword,
                documentation: Some(format!(
                    "Character entity representing '{}'",
                    entity.expansion
                )),
                edit: TextEdit::new(range, label),
                snippet: false,
            };
            // entity names are case-sensitive, so dedupe on the exact label
            if self.seen.insert(candidate.label.clone()) {
                self.out.push(candidate);
            }
        }
    }
}

/// `="$n"`, `='$n'` or `=$n`.
fn value_stub(quotes: Quotes, n: u8) -> String {
    match quotes.as_char() {
        Some(q) => format!("={q}${n}{q}"),
        None => format!("=${n}"),
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut chars = text.chars();
    prefix.chars().all(|p| {
        chars
            .next()
            .is_some_and(|c| c.to_lowercase().eq(p.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagsense_lexer::Scanner;

    use crate::context::classify;

    /// Helper: resolve at the `|` marker with `config`.
    fn resolve_with(marked: &str, config: &Configuration) -> Vec<Candidate> {
        let offset = marked.chars().position(|c| c == '|').unwrap();
        let source = marked.replacen('|', "", 1);
        let chars: Vec<char> = source.chars().collect();
        let document = Document::parse(&source);
        let context = classify(&Scanner::tokenize(&source), offset);
        Resolver::new(&chars, offset, &document, config, Vocabulary::global()).resolve(&context)
    }

    fn resolve(marked: &str) -> Vec<Candidate> {
        resolve_with(marked, &Configuration::default())
    }

    fn find<'c>(candidates: &'c [Candidate], label: &str) -> &'c Candidate {
        candidates
            .iter()
            .find(|c| c.label == label)
            .unwrap_or_else(|| panic!("no candidate {label}"))
    }

    fn labels(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    // =========================================================================
    // Tag names
    // =========================================================================

    #[test]
    fn test_tag_prefix_filter() {
        let items = resolve("<he|");
        assert_eq!(labels(&items), vec!["head", "header"]);
        assert_eq!(find(&items, "header").edit, TextEdit::new(Span::new(1, 3), "header"));
    }

    #[test]
    fn test_tag_prefix_ignores_case() {
        assert!(labels(&resolve("<DI|")).contains(&"div"));
    }

    #[test]
    fn test_tag_candidates_carry_descriptions() {
        let items = resolve("<p|");
        assert_eq!(
            find(&items, "p").documentation.as_deref(),
            Some("A paragraph.")
        );
    }

    #[test]
    fn test_ionic_tags_toggle() {
        assert!(labels(&resolve("<ion-li|")).contains(&"ion-list"));
        let config = Configuration {
            ionic: false,
            ..Configuration::default()
        };
        assert!(resolve_with("<ion-li|", &config).is_empty());
    }

    #[test]
    fn test_open_tag_offers_close_of_parent() {
        let items = resolve("<ul><|");
        let close = find(&items, "/ul");
        assert_eq!(close.edit, TextEdit::new(Span::new(5, 5), "/ul>"));
    }

    #[test]
    fn test_close_of_parent_skips_closed_siblings() {
        let items = resolve("<div><span></span><|");
        assert!(labels(&items).contains(&"/div"));
        assert!(!labels(&items).contains(&"/span"));
    }

    // =========================================================================
    // End tags
    // =========================================================================

    #[test]
    fn test_end_tag_keeps_case() {
        let items = resolve("<LI></|");
        assert_eq!(labels(&items), vec!["/LI"]);
        assert_eq!(items[0].edit, TextEdit::new(Span::new(6, 6), "LI>"));
    }

    #[test]
    fn test_end_tag_bracket_already_present() {
        let items = resolve("<div></|>");
        assert_eq!(items[0].edit.new_text, "div");
    }

    #[test]
    fn test_end_tag_replaces_typed_name() {
        let items = resolve("<section></se|");
        assert_eq!(items[0].edit, TextEdit::new(Span::new(11, 13), "section>"));
    }

    #[test]
    fn test_end_tag_skips_void_and_closed() {
        assert_eq!(labels(&resolve("<div><br></|")), vec!["/div"]);
        assert_eq!(labels(&resolve("<p><i></i></|")), vec!["/p"]);
    }

    #[test]
    fn test_end_tag_without_open_element_lists_all_tags() {
        let items = resolve("</bl|");
        assert_eq!(labels(&items), vec!["/blockquote"]);
        assert_eq!(items[0].edit.new_text, "blockquote>");
    }

    #[test]
    fn test_end_tag_without_open_element_skips_void_tags() {
        let items = resolve("</l|");
        let names = labels(&items);
        assert!(names.contains(&"/li"));
        assert!(!names.contains(&"/link"));
    }

    #[test]
    fn test_matched_end_tag_keeps_case() {
        let items = resolve("<LI></LI|");
        assert_eq!(labels(&items), vec!["/LI"]);
        assert_eq!(items[0].edit, TextEdit::new(Span::new(6, 8), "LI>"));

        let items = resolve("<LI></L|I>");
        assert_eq!(labels(&items), vec!["/LI"]);
        assert_eq!(items[0].edit, TextEdit::new(Span::new(6, 8), "LI"));
    }

    #[test]
    fn test_matched_end_tag_lowercase() {
        assert_eq!(labels(&resolve("<div></di|v>")), vec!["/div"]);
    }

    // =========================================================================
    // Attribute names
    // =========================================================================

    #[test]
    fn test_attribute_snippet_default_quotes() {
        let items = resolve("<div cla|");
        assert_eq!(
            find(&items, "class").edit,
            TextEdit::new(Span::new(5, 8), "class=\"$1\"")
        );
        assert!(find(&items, "class").snippet);
    }

    #[test]
    fn test_attribute_quote_styles() {
        let single = Configuration {
            attribute_default_value: Quotes::Single,
            ..Configuration::default()
        };
        let empty = Configuration {
            attribute_default_value: Quotes::Empty,
            ..Configuration::default()
        };
        assert_eq!(
            find(&resolve_with("<div cla|", &single), "class").edit.new_text,
            "class='$1'"
        );
        assert_eq!(
            find(&resolve_with("<div cla|", &empty), "class").edit.new_text,
            "class=$1"
        );
    }

    #[test]
    fn test_flag_attribute_inserted_bare() {
        let items = resolve("<input disa|");
        let disabled = find(&items, "disabled");
        assert_eq!(disabled.edit.new_text, "disabled");
        assert!(!disabled.snippet);
    }

    #[test]
    fn test_attribute_before_assign_inserted_bare() {
        let items = resolve(r#"<div cl|ass="x">"#);
        assert_eq!(
            find(&items, "class").edit,
            TextEdit::new(Span::new(5, 10), "class")
        );
    }

    #[test]
    fn test_existing_attributes_excluded() {
        let items = resolve(r#"<input type="text" | id="a">"#);
        let names = labels(&items);
        assert!(!names.contains(&"type"));
        assert!(!names.contains(&"id"));
        assert!(names.contains(&"size"));
    }

    #[test]
    fn test_handlers_are_functions() {
        let items = resolve("<div onc|");
        assert_eq!(find(&items, "onclick").kind, CompletionKind::Function);
    }

    #[test]
    fn test_angular_offered_regardless_of_flag() {
        let config = Configuration {
            angular1: false,
            ..Configuration::default()
        };
        assert!(labels(&resolve_with("<div ng-rep|", &config)).contains(&"ng-repeat"));
    }

    #[test]
    fn test_data_attributes() {
        let items = resolve(r#"<div data-role="x"></div><p data-id="1" da|"#);
        assert_eq!(labels(&items), vec!["data-", "data-role"]);
        assert_eq!(items[0].edit.new_text, "data-$1=\"$2\"");
        assert_eq!(items[1].edit.new_text, "data-role=\"$1\"");
    }

    #[test]
    fn test_data_attribute_being_typed_not_offered() {
        assert!(resolve("<div data-fo|").is_empty());

        let items = resolve(r#"<p data-foo="1"></p><div data-fo|"#);
        assert_eq!(labels(&items), vec!["data-foo"]);
        assert_eq!(items[0].edit.new_text, "data-foo=\"$1\"");
    }

    // =========================================================================
    // Values
    // =========================================================================

    #[test]
    fn test_unset_value_inserted_bare() {
        let items = resolve("<input type=|");
        assert_eq!(
            find(&items, "text").edit,
            TextEdit::new(Span::new(12, 12), "text")
        );
    }

    #[test]
    fn test_quoted_value_replaces_word() {
        let items = resolve(r#"<input type="te|">"#);
        assert_eq!(labels(&items), vec!["text", "tel"]);
        assert_eq!(
            find(&items, "text").edit,
            TextEdit::new(Span::new(13, 15), "text")
        );
    }

    #[test]
    fn test_quoted_value_word_extends_right() {
        let items = resolve(r#"<input type="c|ol">"#);
        assert_eq!(
            find(&items, "color").edit,
            TextEdit::new(Span::new(13, 16), "color")
        );
    }

    #[test]
    fn test_value_before_opening_quote_adds_quotes() {
        let items = resolve(r#"<input type=|"x">"#);
        assert_eq!(
            find(&items, "text").edit,
            TextEdit::new(Span::new(12, 15), "\"text\"")
        );
    }

    #[test]
    fn test_bare_value_replaced_without_quotes() {
        let items = resolve("<input type=ch|");
        assert_eq!(
            find(&items, "checkbox").edit,
            TextEdit::new(Span::new(12, 14), "checkbox")
        );
    }

    #[test]
    fn test_unknown_attribute_has_no_values() {
        assert!(resolve(r#"<div title="|"#).is_empty());
    }

    // =========================================================================
    // Entities
    // =========================================================================

    #[test]
    fn test_entities() {
        let items = resolve("a &co|");
        assert_eq!(labels(&items), vec!["&copy;", "&cong;"]);
        assert_eq!(items[0].edit, TextEdit::new(Span::new(2, 5), "&copy;"));
    }

    #[test]
    fn test_entity_replaces_semicolon_run() {
        let items = resolve("&am|p;");
        assert_eq!(items[0].edit, TextEdit::new(Span::new(0, 5), "&amp;"));
    }

    // =========================================================================
    // Auto close
    // =========================================================================

    #[test]
    fn test_auto_close() {
        let items = resolve("<div>|");
        assert_eq!(labels(&items), vec!["</div>"]);
        assert_eq!(items[0].edit, TextEdit::new(Span::new(5, 5), "$0</div>"));
        assert!(items[0].snippet);
    }

    #[test]
    fn test_auto_close_hidden() {
        let config = Configuration {
            hide_auto_complete_proposals: true,
            ..Configuration::default()
        };
        assert!(resolve_with("<div>|", &config).is_empty());
    }

    #[test]
    fn test_no_auto_close_for_void() {
        assert!(resolve("<img>|").is_empty());
    }

    #[test]
    fn test_prefix_match() {
        assert!(starts_with_ignore_case("Header", "hEa"));
        assert!(starts_with_ignore_case("x", ""));
        assert!(!starts_with_ignore_case("h", "he"));
    }
}
