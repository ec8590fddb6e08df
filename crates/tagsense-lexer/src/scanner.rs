use crate::token::{is_raw_text_element, Span, Token, TokenKind};
use tracing::trace;

/// Scanner state determines how the next character is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScannerState {
    /// Text between tags.
    WithinContent,
    /// Right after `<`, before the tag name.
    AfterOpeningStartTag,
    /// Inside a start tag, between attributes.
    WithinTag,
    /// After an attribute name, before a possible `=`.
    AfterAttributeName,
    /// After `=`, before the value.
    BeforeAttributeValue,
    /// Right after `</`, before the tag name.
    AfterOpeningEndTag,
    /// Inside an end tag, after the name.
    WithinEndTag,
    /// Body of `<script>` or `<style>`.
    WithinRawText,
}

/// Error-tolerant HTML scanner.
///
/// Tokenizes markup into a contiguous token stream. It never fails:
/// unterminated tags, values and comments simply end at end of input, and
/// characters that fit nowhere become `Unknown` tokens.
///
/// - `Vec<char>` source for index-based navigation (offsets are characters)
/// - Explicit state machine, one state per position inside a tag
/// - Every consumed character lands in exactly one token
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    state: ScannerState,
    tokens: Vec<Token>,
    last_tag: Option<String>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            state: ScannerState::WithinContent,
            tokens: Vec::new(),
            last_tag: None,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        scanner.tokens
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    /// Scan the next token. Some branches only change state; the following
    /// call then consumes the character in the new state.
    fn scan_token(&mut self) {
        match self.state {
            ScannerState::WithinContent => self.scan_content(),
            ScannerState::AfterOpeningStartTag => self.scan_after_open_start_tag(),
            ScannerState::WithinTag => self.scan_within_tag(),
            ScannerState::AfterAttributeName => self.scan_after_attribute_name(),
            ScannerState::BeforeAttributeValue => self.scan_before_attribute_value(),
            ScannerState::AfterOpeningEndTag => self.scan_after_open_end_tag(),
            ScannerState::WithinEndTag => self.scan_within_end_tag(),
            ScannerState::WithinRawText => self.scan_raw_text(),
        }
    }

    // --- Content ---

    fn scan_content(&mut self) {
        let start = self.pos;

        if self.starts_with("<!--") {
            self.advance_by(4);
            while !self.is_at_end() && !self.starts_with("-->") {
                self.advance();
            }
            self.advance_by(3);
            self.emit(TokenKind::Comment, start);
            return;
        }

        if self.starts_with("<!") {
            while !self.is_at_end() && self.peek() != '>' {
                self.advance();
            }
            self.advance();
            self.emit(TokenKind::Doctype, start);
            return;
        }

        if self.starts_with("</") {
            self.advance_by(2);
            self.emit(TokenKind::EndTagOpen, start);
            self.state = ScannerState::AfterOpeningEndTag;
            return;
        }

        match self.peek() {
            '<' => {
                self.advance();
                self.emit(TokenKind::StartTagOpen, start);
                self.last_tag = None;
                self.state = ScannerState::AfterOpeningStartTag;
            }
            '&' => {
                self.advance();
                while !self.is_at_end() && is_entity_char(self.peek()) {
                    self.advance();
                }
                if self.peek() == ';' {
                    self.advance();
                }
                self.emit(TokenKind::EntityReference, start);
            }
            _ => {
                while !self.is_at_end() && self.peek() != '<' && self.peek() != '&' {
                    self.advance();
                }
                self.emit(TokenKind::Content, start);
            }
        }
    }

    /// Scan a raw-text body up to the matching end tag (or end of input).
    fn scan_raw_text(&mut self) {
        let start = self.pos;
        let tag = self.last_tag.take().unwrap_or_default();

        while !self.is_at_end() && !self.at_end_tag_for(&tag) {
            self.advance();
        }
        if self.pos > start {
            self.emit(TokenKind::RawText, start);
        }
        self.state = ScannerState::WithinContent;
    }

    // --- Start tags ---

    fn scan_after_open_start_tag(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if is_tag_name_char(ch) {
            self.consume_while(is_tag_name_char);
            self.emit(TokenKind::StartTag, start);
            self.last_tag = Some(self.slice(start, self.pos));
            self.state = ScannerState::WithinTag;
        } else if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if ch == '>' {
            self.advance();
            self.emit(TokenKind::StartTagClose, start);
            self.state = ScannerState::WithinContent;
        } else if ch == '<' {
            self.state = ScannerState::WithinContent;
        } else {
            self.advance();
            self.emit(TokenKind::Unknown, start);
            self.state = ScannerState::WithinTag;
        }
    }

    fn scan_within_tag(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if self.starts_with("/>") {
            self.advance_by(2);
            self.emit(TokenKind::StartTagSelfClose, start);
            self.last_tag = None;
            self.state = ScannerState::WithinContent;
        } else if ch == '>' {
            self.advance();
            self.emit(TokenKind::StartTagClose, start);
            self.state = match &self.last_tag {
                Some(tag) if is_raw_text_element(tag) => ScannerState::WithinRawText,
                _ => ScannerState::WithinContent,
            };
        } else if ch == '<' {
            self.state = ScannerState::WithinContent;
        } else if is_attribute_name_char(ch) {
            self.consume_while(is_attribute_name_char);
            self.emit(TokenKind::AttributeName, start);
            self.state = ScannerState::AfterAttributeName;
        } else {
            self.advance();
            self.emit(TokenKind::Unknown, start);
        }
    }

    fn scan_after_attribute_name(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if ch == '=' {
            self.advance();
            self.emit(TokenKind::DelimiterAssign, start);
            self.state = ScannerState::BeforeAttributeValue;
        } else {
            self.state = ScannerState::WithinTag;
        }
    }

    fn scan_before_attribute_value(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if ch == '"' || ch == '\'' {
            self.advance(); // opening quote
            while !self.is_at_end() && self.peek() != ch {
                self.advance();
            }
            self.advance(); // closing quote, if any
            self.emit(TokenKind::AttributeValue { quote: Some(ch) }, start);
            self.state = ScannerState::WithinTag;
        } else if ch == '>' || ch == '<' {
            self.state = ScannerState::WithinTag;
        } else {
            self.consume_while(is_bare_value_char);
            self.emit(TokenKind::AttributeValue { quote: None }, start);
            self.state = ScannerState::WithinTag;
        }
    }

    // --- End tags ---

    fn scan_after_open_end_tag(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if is_tag_name_char(ch) {
            self.consume_while(is_tag_name_char);
            self.emit(TokenKind::EndTag, start);
            self.state = ScannerState::WithinEndTag;
        } else if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if ch == '>' {
            self.advance();
            self.emit(TokenKind::EndTagClose, start);
            self.state = ScannerState::WithinContent;
        } else if ch == '<' {
            self.state = ScannerState::WithinContent;
        } else {
            self.advance();
            self.emit(TokenKind::Unknown, start);
            self.state = ScannerState::WithinEndTag;
        }
    }

    fn scan_within_end_tag(&mut self) {
        let start = self.pos;
        let ch = self.peek();

        if ch.is_whitespace() {
            self.consume_while(char::is_whitespace);
            self.emit(TokenKind::Whitespace, start);
        } else if ch == '>' {
            self.advance();
            self.emit(TokenKind::EndTagClose, start);
            self.state = ScannerState::WithinContent;
        } else if ch == '<' {
            self.state = ScannerState::WithinContent;
        } else {
            self.consume_while(|c| !c.is_whitespace() && c != '>' && c != '<');
            self.emit(TokenKind::Unknown, start);
        }
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind, start: usize) {
        let span = Span::new(start, self.pos);
        let text = self.slice(start, self.pos);
        trace!(?kind, ?span, text = %text, "token");
        self.tokens.push(Token::new(kind, span, text));
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn starts_with(&self, prefix: &str) -> bool {
        let mut i = self.pos;
        for expected in prefix.chars() {
            if self.chars.get(i) != Some(&expected) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True at `</tag` followed by a non-name character or end of input.
    fn at_end_tag_for(&self, tag: &str) -> bool {
        if !self.starts_with("</") {
            return false;
        }
        let name_start = self.pos + 2;
        let mut i = name_start;
        for expected in tag.chars() {
            match self.chars.get(i) {
                Some(c) if c.eq_ignore_ascii_case(&expected) => i += 1,
                _ => return false,
            }
        }
        !self.chars.get(i).copied().is_some_and(is_tag_name_char)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Tag names: letters, digits and the separators custom elements use.
pub fn is_tag_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Attribute names allow framework syntax like `(click)`, `[value]`, `*ngIf`.
pub fn is_attribute_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&' | '\0')
}

fn is_bare_value_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '"' | '\'' | '<' | '>' | '`')
}

/// Characters of an entity name after `&` (`#` covers numeric references).
pub fn is_entity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '#'
}
