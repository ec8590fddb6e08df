//! Insertions triggered by typing `>`, `/` or `=`.

use tagsense_lexer::{Scanner, Token, TokenKind};
use tagsense_parser::Document;
use tagsense_vocab::Configuration;
use tracing::debug;

/// Token ending exactly at `offset`.
fn token_ending_at(tokens: &[Token], offset: usize) -> Option<(usize, &Token)> {
    tokens.iter().enumerate().find(|(_, t)| t.end() == offset)
}

/// Closing text to insert after typing `>` or `</`.
///
/// After the `>` of a start tag this is the snippet `$0</tag>`; after `</`
/// it is the name of the nearest open element followed by `>` (omitted when
/// one already follows). Void and self-closed elements never get one.
pub fn tag_complete(text: &str, offset: usize, document: &Document) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());
    let before = *chars.get(offset.checked_sub(1)?)?;
    let tokens = Scanner::tokenize(text);
    let (_, token) = token_ending_at(&tokens, offset)?;

    let insertion = match (before, token.kind) {
        ('>', TokenKind::StartTagClose) => {
            let node = document.node(document.node_before(offset)?);
            let ended = node.end_tag_start().is_some_and(|s| s <= offset);
            if node.is_void || node.self_closed || ended || node.start_tag_end != Some(offset) {
                return None;
            }
            format!("$0</{}>", node.tag)
        }
        ('/', TokenKind::EndTagOpen) => {
            let open = document.ancestors(document.node_before(offset)?).find(|&id| {
                let node = document.node(id);
                !node.closed() || node.end_tag_start().is_some_and(|s| s > offset)
            })?;
            let tag = &document.node(open).tag;
            if chars.get(offset) == Some(&'>') {
                tag.clone()
            } else {
                format!("{tag}>")
            }
        }
        _ => return None,
    };
    debug!(offset, %insertion, "tag completion");
    Some(insertion)
}

/// Quotes to insert after typing the `=` of an attribute that has no value
/// yet, as the snippet `"$1"` or `'$1'`.
pub fn quote_complete(
    text: &str,
    offset: usize,
    document: &Document,
    config: &Configuration,
) -> Option<String> {
    let quote = config.attribute_default_value.as_char()?;
    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());
    if chars.get(offset.checked_sub(1)?) != Some(&'=') {
        return None;
    }

    let tokens = Scanner::tokenize(text);
    let (i, assign) = token_ending_at(&tokens, offset)?;
    if assign.kind != TokenKind::DelimiterAssign {
        return None;
    }
    let name = tokens.get(i.checked_sub(1)?)?;
    if name.kind != TokenKind::AttributeName || name.end() != assign.start() {
        return None;
    }
    if let Some(next) = tokens.get(i + 1) {
        if matches!(next.kind, TokenKind::AttributeValue { .. } | TokenKind::Unknown) {
            return None;
        }
    }

    let node = document.node(document.node_before(offset)?);
    if !node.start_tag_span().touches(offset) {
        return None;
    }
    Some(format!("{quote}$1{quote}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagsense_vocab::Quotes;

    /// Helper: run `tag_complete` at the `|` marker.
    fn tag_at(marked: &str) -> Option<String> {
        let offset = marked.chars().position(|c| c == '|').unwrap();
        let source = marked.replacen('|', "", 1);
        tag_complete(&source, offset, &Document::parse(&source))
    }

    fn quote_at(marked: &str, quotes: Quotes) -> Option<String> {
        let offset = marked.chars().position(|c| c == '|').unwrap();
        let source = marked.replacen('|', "", 1);
        let config = Configuration {
            attribute_default_value: quotes,
            ..Configuration::default()
        };
        quote_complete(&source, offset, &Document::parse(&source), &config)
    }

    // =========================================================================
    // After `>`
    // =========================================================================

    #[test]
    fn test_close_after_start_tag() {
        assert_eq!(tag_at("<div>|"), Some("$0</div>".into()));
        assert_eq!(tag_at(r#"<a href="x">|"#), Some("$0</a>".into()));
    }

    #[test]
    fn test_close_keeps_case() {
        assert_eq!(tag_at("<MyWidget>|"), Some("$0</MyWidget>".into()));
    }

    #[test]
    fn test_nested_start_tag() {
        assert_eq!(tag_at("<ul><li>|</ul>"), Some("$0</li>".into()));
    }

    #[test]
    fn test_no_close_for_void() {
        assert_eq!(tag_at("<br>|"), None);
        assert_eq!(tag_at("<INPUT>|"), None);
    }

    #[test]
    fn test_no_close_when_end_tag_exists() {
        assert_eq!(tag_at("<div>|</div>"), None);
    }

    #[test]
    fn test_no_close_after_end_tag() {
        assert_eq!(tag_at("<div></div>|"), None);
    }

    #[test]
    fn test_no_close_after_gt_in_content() {
        assert_eq!(tag_at("a >|"), None);
    }

    // =========================================================================
    // After `</`
    // =========================================================================

    #[test]
    fn test_end_tag_name() {
        assert_eq!(tag_at("<div></|"), Some("div>".into()));
        assert_eq!(tag_at("<div><br></|"), Some("div>".into()));
    }

    #[test]
    fn test_end_tag_name_before_bracket() {
        assert_eq!(tag_at("<div></|>"), Some("div".into()));
    }

    #[test]
    fn test_end_tag_skips_closed_children() {
        assert_eq!(tag_at("<ul><li></li></|"), Some("ul>".into()));
    }

    #[test]
    fn test_end_tag_with_nothing_open() {
        assert_eq!(tag_at("<p></p></|"), None);
    }

    #[test]
    fn test_self_close_slash() {
        assert_eq!(tag_at("<li/|>"), None);
    }

    #[test]
    fn test_start_of_document() {
        assert_eq!(tag_at("|<div>"), None);
    }

    // =========================================================================
    // Quotes
    // =========================================================================

    #[test]
    fn test_quotes_after_assign() {
        assert_eq!(quote_at("<div class=|", Quotes::Double), Some("\"$1\"".into()));
        assert_eq!(quote_at("<div class=|>", Quotes::Single), Some("'$1'".into()));
    }

    #[test]
    fn test_no_quotes_when_empty_style() {
        assert_eq!(quote_at("<div class=|", Quotes::Empty), None);
    }

    #[test]
    fn test_no_quotes_when_value_follows() {
        assert_eq!(quote_at(r#"<div class=|"a">"#, Quotes::Double), None);
        assert_eq!(quote_at("<div class=|a>", Quotes::Double), None);
    }

    #[test]
    fn test_no_quotes_with_space_before_assign() {
        assert_eq!(quote_at("<div class =|", Quotes::Double), None);
    }

    #[test]
    fn test_no_quotes_in_content() {
        assert_eq!(quote_at("<div>a=|", Quotes::Double), None);
    }
}
