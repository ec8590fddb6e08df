//! End-to-end completion scenarios over whole documents.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tagsense_complete::{complete, quote_complete, tag_complete, Candidate};
use tagsense_lexer::Span;
use tagsense_parser::Document;
use tagsense_vocab::Configuration;

/// Split a `|` cursor marker out of `marked`.
fn cursor(marked: &str) -> (String, usize) {
    let offset = marked.chars().position(|c| c == '|').unwrap();
    (marked.replacen('|', "", 1), offset)
}

fn complete_at(marked: &str, config: &Configuration) -> (String, Vec<Candidate>) {
    let (text, offset) = cursor(marked);
    let items = complete(&text, offset, &Document::parse(&text), config);
    (text, items)
}

fn labels(items: &[Candidate]) -> Vec<&str> {
    items.iter().map(|c| c.label.as_str()).collect()
}

fn apply(text: &str, items: &[Candidate], label: &str) -> String {
    let item = items
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| panic!("no candidate {label}"));
    item.edit.apply(text)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn tag_names_after_partial_name() {
    let (text, items) = complete_at("<h|", &Configuration::default());
    let names = labels(&items);
    for expected in ["html", "h1", "header"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    assert!(names.iter().all(|n| n.starts_with('h')));
    assert_eq!(apply(&text, &items, "header"), "<header");
}

#[test]
fn attribute_names_after_existing_attribute() {
    let (text, items) = complete_at(r#"<input type="text" |"#, &Configuration::default());
    let names = labels(&items);
    assert!(names.contains(&"style"));
    assert!(names.contains(&"size"));
    assert!(!names.contains(&"type"));
    assert_eq!(
        apply(&text, &items, "style"),
        r#"<input type="text" style="$1""#
    );
}

#[test]
fn closing_tag_after_start_tag() {
    let (text, items) = complete_at("<div>|", &Configuration::default());
    assert_eq!(labels(&items), vec!["</div>"]);
    assert!(items[0].snippet);
    assert_eq!(apply(&text, &items, "</div>"), "<div>$0</div>");

    let hidden = Configuration {
        hide_auto_complete_proposals: true,
        ..Configuration::default()
    };
    let (_, items) = complete_at("<div>|", &hidden);
    assert!(items.is_empty());
}

#[test]
fn end_tag_echoes_ancestor_case() {
    let (text, items) = complete_at("<LI></|", &Configuration::default());
    assert_eq!(labels(&items), vec!["/LI"]);
    assert_eq!(apply(&text, &items, "/LI"), "<LI></LI>");
}

#[test]
fn tag_pair_skips_void_child() {
    let (text, offset) = cursor("<div><br></|");
    assert_eq!(
        tag_complete(&text, offset, &Document::parse(&text)),
        Some("div>".to_string())
    );
}

#[test]
fn tag_pair_after_self_close_slash() {
    let (text, offset) = cursor("<li/|>");
    assert_eq!(tag_complete(&text, offset, &Document::parse(&text)), None);
}

#[test]
fn sandbox_tokens_complete_word_by_word() {
    let (text, items) = complete_at(r#"<iframe sandbox="allow-forms |"#, &Configuration::default());
    assert!(labels(&items).contains(&"allow-modals"));
    assert_eq!(
        apply(&text, &items, "allow-modals"),
        r#"<iframe sandbox="allow-forms allow-modals"#
    );
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn void_elements_get_no_closing() {
    for marked in ["<img>|", "<BR>|", "<input type=\"x\">|"] {
        let (text, items) = complete_at(marked, &Configuration::default());
        assert!(items.is_empty(), "{marked}");
        let (_, offset) = cursor(marked);
        assert_eq!(tag_complete(&text, offset, &Document::parse(&text)), None);
    }
}

#[test]
fn self_closed_elements_get_no_closing() {
    let (text, items) = complete_at("<my-el/>|", &Configuration::default());
    assert!(items.is_empty());
    assert_eq!(tag_complete(&text, 8, &Document::parse(&text)), None);
}

#[test]
fn nested_end_tag_picks_innermost_open() {
    let (text, items) = complete_at("<Section><Article><p></p></|", &Configuration::default());
    assert_eq!(labels(&items), vec!["/Article"]);
    assert_eq!(
        apply(&text, &items, "/Article"),
        "<Section><Article><p></p></Article>"
    );
}

#[test]
fn quoted_value_keeps_quotes() {
    let (text, items) = complete_at(r#"<input type="ch|">"#, &Configuration::default());
    assert_eq!(apply(&text, &items, "checkbox"), r#"<input type="checkbox">"#);

    let (text, items) = complete_at("<input type='ra|'>", &Configuration::default());
    assert_eq!(apply(&text, &items, "radio"), "<input type='radio'>");
}

#[test]
fn spacing_around_assign_is_preserved() {
    let (text, items) = complete_at(r#"<input type= "ch|">"#, &Configuration::default());
    assert_eq!(apply(&text, &items, "checkbox"), r#"<input type= "checkbox">"#);
}

#[test]
fn matched_end_tag_name_keeps_case() {
    let (text, items) = complete_at("<LI></LI|", &Configuration::default());
    assert_eq!(labels(&items), vec!["/LI"]);
    assert_eq!(apply(&text, &items, "/LI"), "<LI></LI>");

    let (text, items) = complete_at("<LI></L|I>", &Configuration::default());
    assert_eq!(labels(&items), vec!["/LI"]);
    assert_eq!(apply(&text, &items, "/LI"), "<LI></LI>");
}

#[test]
fn entity_in_text_and_attribute() {
    let (text, items) = complete_at("Tom &amp Jerry &nbs|", &Configuration::default());
    assert_eq!(labels(&items), vec!["&nbsp;"]);
    assert_eq!(apply(&text, &items, "&nbsp;"), "Tom &amp Jerry &nbsp;");

    let (text, items) = complete_at(r#"<a title="&hel|">"#, &Configuration::default());
    assert_eq!(apply(&text, &items, "&hellip;"), r#"<a title="&hellip;">"#);
}

#[test]
fn ampersand_after_bracket_is_not_an_entity() {
    let (_, items) = complete_at("<&|", &Configuration::default());
    assert!(items.is_empty());
}

#[test]
fn subset_toggles_are_independent() {
    let no_html = Configuration {
        html5: false,
        ..Configuration::default()
    };
    let (_, items) = complete_at("<|", &no_html);
    assert!(!items.is_empty());
    assert!(items.iter().all(|c| c.label.starts_with("ion-")));

    let (_, items) = complete_at("<ion-list |", &no_html);
    let names = labels(&items);
    assert!(names.contains(&"show-delete"));
    assert!(names.contains(&"ng-click"));
    assert!(!names.contains(&"class"));
}

#[test]
fn quote_insertion_after_assign() {
    let (text, offset) = cursor("<div id=|");
    assert_eq!(
        quote_complete(&text, offset, &Document::parse(&text), &Configuration::default()),
        Some("\"$1\"".to_string())
    );
}

#[test]
fn edits_never_touch_surrounding_punctuation() {
    let (_, items) = complete_at(r#"<div class="a b|c" id="x">"#, &Configuration::default());
    assert!(items.is_empty());

    let (text, items) = complete_at(r#"<div d|ir="x">"#, &Configuration::default());
    let dir = items.iter().find(|c| c.label == "dir").unwrap();
    assert_eq!(dir.edit.range, Span::new(5, 8));
    assert_eq!(dir.edit.apply(&text), r#"<div dir="x">"#);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn edit_ranges_stay_around_the_cursor(
        text in r#"[<>/="' a-z&;!-]{0,40}"#,
        offset in 0usize..48,
    ) {
        let len = text.chars().count();
        let at = offset.min(len);
        let document = Document::parse(&text);
        for item in complete(&text, offset, &document, &Configuration::default()) {
            let range = item.edit.range;
            prop_assert!(range.start <= at, "{:?} starts after {}", range, at);
            prop_assert!(at <= range.end, "{:?} ends before {}", range, at);
            prop_assert!(range.end <= len);
            prop_assert!(!item.edit.new_text.is_empty());
        }
    }

    #[test]
    fn insertions_never_panic(
        text in r#"[<>/="' a-zA-Z&;]{0,40}"#,
        offset in 0usize..48,
    ) {
        let document = Document::parse(&text);
        let _ = tag_complete(&text, offset, &document);
        let _ = quote_complete(&text, offset, &document, &Configuration::default());
    }
}
