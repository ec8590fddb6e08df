//! Cursor classification.
//!
//! Maps an offset to the syntactic position it sits in by walking the tokens
//! that start before it. The first token whose extent reaches the offset
//! decides; an offset equal to a token's end belongs to that token.

use serde::Serialize;
use tagsense_lexer::scanner::is_entity_char;
use tagsense_lexer::{Token, TokenKind};

/// Where the cursor is, with the ranges a completion may replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Context {
    /// Typing a tag name after `<`. `start..end` is the name being replaced.
    TagName { start: usize, end: usize },
    /// Typing an attribute name inside a start tag.
    AttributeName {
        tag: String,
        start: usize,
        end: usize,
        /// Other attributes already on the tag.
        existing: Vec<String>,
    },
    /// Right after `=` with no value written yet.
    AttributeValueUnset {
        tag: String,
        attribute: String,
        offset: usize,
    },
    /// Inside (or at the opening quote of) an attribute value token.
    AttributeValue {
        tag: String,
        attribute: String,
        start: usize,
        end: usize,
        quote: Option<char>,
    },
    /// Typing an end tag name after `</`.
    EndTagName { start: usize, end: usize },
    /// After `&`; `start` is the ampersand, `end` the end of the reference.
    EntityReference { start: usize, end: usize },
    /// Right after the `>` that ends a start tag.
    AfterStartTag { tag: String, offset: usize },
    None,
}

/// Classify `offset` against a token stream. Offsets past the end are
/// clamped to the end of the last token.
pub fn classify(tokens: &[Token], offset: usize) -> Context {
    let len = tokens.last().map_or(0, Token::end);
    let offset = offset.min(len);
    Classifier {
        tokens,
        offset,
        tag: None,
        attribute: None,
        prev: None,
    }
    .run()
}

struct Classifier<'a> {
    tokens: &'a [Token],
    offset: usize,
    /// Index and name of the start tag currently being read.
    tag: Option<(usize, &'a str)>,
    attribute: Option<&'a str>,
    /// Last token that was not whitespace.
    prev: Option<TokenKind>,
}

impl<'a> Classifier<'a> {
    fn run(mut self) -> Context {
        let offset = self.offset;
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            if token.start() >= offset {
                break;
            }
            let end = token.end();
            match token.kind {
                TokenKind::StartTagOpen => {
                    self.tag = None;
                    self.attribute = None;
                    if end == offset {
                        let end = self.name_end_at(i + 1, TokenKind::StartTag);
                        return Context::TagName { start: offset, end };
                    }
                }
                TokenKind::StartTag => {
                    if offset <= end {
                        return Context::TagName {
                            start: token.start(),
                            end,
                        };
                    }
                    self.tag = Some((i, token.text.as_str()));
                }
                TokenKind::AttributeName => {
                    if offset <= end {
                        return self.attribute_name(token.start(), end, Some(i));
                    }
                    self.attribute = Some(token.text.as_str());
                }
                TokenKind::DelimiterAssign => {
                    if end == offset {
                        return self.value_at(i + 1);
                    }
                }
                TokenKind::AttributeValue { quote } => {
                    if offset <= end {
                        return self.inside_value(token, quote);
                    }
                }
                TokenKind::Whitespace => {
                    if offset <= end {
                        return self.in_whitespace(token, i);
                    }
                }
                TokenKind::StartTagClose => {
                    if offset == end {
                        if let Some((_, tag)) = self.tag {
                            return Context::AfterStartTag {
                                tag: tag.to_string(),
                                offset,
                            };
                        }
                    }
                    self.tag = None;
                }
                TokenKind::StartTagSelfClose => {
                    if offset <= end {
                        return Context::None;
                    }
                    self.tag = None;
                }
                TokenKind::EndTagOpen => {
                    self.tag = None;
                    if offset < end {
                        return Context::None;
                    }
                    if offset == end {
                        let end = self.name_end_at(i + 1, TokenKind::EndTag);
                        return Context::EndTagName { start: offset, end };
                    }
                }
                TokenKind::EndTag => {
                    if offset <= end {
                        return Context::EndTagName {
                            start: token.start(),
                            end,
                        };
                    }
                }
                TokenKind::EntityReference => {
                    if offset <= end {
                        // past the terminating `;` the reference is complete
                        if offset == end && token.text.ends_with(';') {
                            return Context::None;
                        }
                        return Context::EntityReference {
                            start: token.start(),
                            end,
                        };
                    }
                }
                TokenKind::Content
                | TokenKind::RawText
                | TokenKind::Comment
                | TokenKind::Doctype
                | TokenKind::EndTagClose
                | TokenKind::Unknown => {
                    if offset <= end {
                        return Context::None;
                    }
                }
            }
            if token.kind != TokenKind::Whitespace {
                self.prev = Some(token.kind);
            }
        }
        Context::None
    }

    /// End of a name token of `kind` starting exactly at the offset, or the
    /// offset itself.
    fn name_end_at(&self, index: usize, kind: TokenKind) -> usize {
        match self.tokens.get(index) {
            Some(next) if next.kind == kind && next.start() == self.offset => next.end(),
            _ => self.offset,
        }
    }

    fn in_whitespace(&self, token: &Token, index: usize) -> Context {
        match self.prev {
            Some(TokenKind::StartTagOpen) => Context::TagName {
                start: token.start(),
                end: self.name_end_at(index + 1, TokenKind::StartTag),
            },
            Some(TokenKind::EndTagOpen) => Context::EndTagName {
                start: self.offset,
                end: self.name_end_at(index + 1, TokenKind::EndTag),
            },
            Some(TokenKind::DelimiterAssign) => self.value_at(index + 1),
            Some(TokenKind::EndTag) => Context::None,
            _ if self.tag.is_some() => match self.tokens.get(index + 1) {
                Some(next)
                    if next.kind == TokenKind::AttributeName && next.start() == self.offset =>
                {
                    self.attribute_name(self.offset, next.end(), Some(index + 1))
                }
                _ => self.attribute_name(self.offset, self.offset, None),
            },
            _ => Context::None,
        }
    }

    fn attribute_name(&self, start: usize, end: usize, typed: Option<usize>) -> Context {
        let Some((tag_index, tag)) = self.tag else {
            return Context::None;
        };
        let existing = self.tokens[tag_index + 1..]
            .iter()
            .enumerate()
            .take_while(|(_, t)| t.kind.is_start_tag_interior())
            .filter(|(j, t)| {
                t.kind == TokenKind::AttributeName && Some(tag_index + 1 + j) != typed
            })
            .map(|(_, t)| t.text.clone())
            .collect();
        Context::AttributeName {
            tag: tag.to_string(),
            start,
            end,
            existing,
        }
    }

    /// The cursor sits right after `=` (possibly followed by whitespace).
    fn value_at(&self, index: usize) -> Context {
        let (Some((_, tag)), Some(attribute)) = (self.tag, self.attribute) else {
            return Context::None;
        };
        match self.tokens.get(index) {
            Some(next) if next.start() == self.offset => {
                if let TokenKind::AttributeValue { quote } = next.kind {
                    return Context::AttributeValue {
                        tag: tag.to_string(),
                        attribute: attribute.to_string(),
                        start: next.start(),
                        end: next.end(),
                        quote,
                    };
                }
            }
            _ => {}
        }
        Context::AttributeValueUnset {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            offset: self.offset,
        }
    }

    fn inside_value(&self, token: &Token, quote: Option<char>) -> Context {
        let (Some((_, tag)), Some(attribute)) = (self.tag, self.attribute) else {
            return Context::None;
        };
        let chars: Vec<char> = token.text.chars().collect();
        let rel = self.offset - token.start();
        let closed = quote.is_some() && chars.len() >= 2 && chars.last() == quote.as_ref();
        if closed && rel == chars.len() {
            return Context::None;
        }

        if let Some(amp) = entity_start(&chars, rel, quote.is_some()) {
            let content_end = if closed { chars.len() - 1 } else { chars.len() };
            let mut end = rel;
            while end < content_end && is_entity_char(chars[end]) {
                end += 1;
            }
            if end < content_end && chars[end] == ';' {
                end += 1;
            }
            return Context::EntityReference {
                start: token.start() + amp,
                end: token.start() + end,
            };
        }

        Context::AttributeValue {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            start: token.start(),
            end: token.end(),
            quote,
        }
    }
}

/// Position of the `&` starting an entity name that runs up to `rel`.
fn entity_start(chars: &[char], rel: usize, quoted: bool) -> Option<usize> {
    let floor = usize::from(quoted);
    let mut i = rel;
    while i > floor && is_entity_char(chars[i - 1]) {
        i -= 1;
    }
    (i > floor && chars[i - 1] == '&').then(|| i - 1)
}
