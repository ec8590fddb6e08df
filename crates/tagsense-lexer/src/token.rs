use serde::Serialize;

/// A half-open range of character offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `offset` lies inside the span or on either edge.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Token classification for HTML source.
///
/// Only attribute values carry data (the quote they were written with);
/// everything else is recovered from the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    // Start tags
    StartTagOpen,      // <
    StartTag,          // div
    StartTagClose,     // >
    StartTagSelfClose, // />

    // End tags
    EndTagOpen,  // </
    EndTag,      // div
    EndTagClose, // >

    // Attributes
    AttributeName,
    DelimiterAssign,
    AttributeValue { quote: Option<char> },

    // Content
    Content,
    EntityReference,
    RawText,

    // Markup trivia
    Whitespace,
    Comment,
    Doctype,
    Unknown,
}

impl TokenKind {
    /// Kinds that belong to the inside of a start tag (after the name).
    pub fn is_start_tag_interior(&self) -> bool {
        matches!(
            self,
            TokenKind::AttributeName
                | TokenKind::DelimiterAssign
                | TokenKind::AttributeValue { .. }
                | TokenKind::Whitespace
                | TokenKind::Unknown
        )
    }
}

/// A token produced by the scanner. `text` is the exact source slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// HTML void elements (never have an end tag).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Check if a tag name is a void element. HTML tag names are ASCII
/// case-insensitive, so `<BR>` counts.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Elements whose body is scanned as opaque raw text.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}
