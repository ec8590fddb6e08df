//! Structural model builder.
//!
//! Walks the token stream once, keeping a stack of open elements. There is
//! no error recovery beyond what HTML authors expect from an editor: end tags
//! match the nearest open element with exactly the same name, elements
//! skipped over by such a match stay without an end tag, and unmatched end
//! tags are ignored.

use tagsense_lexer::{is_void_element, Span, Token, TokenKind};
use tracing::debug;

use crate::model::{Attribute, Document, Node, NodeId};

/// Builds a [`Document`] from a token stream.
pub struct Builder {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    stack: Vec<NodeId>,
    len: usize,
    /// Offset of the last `<` whose tag name has not been seen yet.
    open_bracket: Option<usize>,
    /// Element whose start tag is still being read.
    opening: Option<NodeId>,
    /// Offset of the last `</`.
    end_bracket: Option<usize>,
    /// Element whose end tag is still being read.
    closing: Option<NodeId>,
}

impl Builder {
    fn new(len: usize) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            stack: Vec::new(),
            len,
            open_bracket: None,
            opening: None,
            end_bracket: None,
            closing: None,
        }
    }

    /// Build the element forest. `len` is the document length in characters.
    pub fn build(tokens: &[Token], len: usize) -> Document {
        let mut builder = Builder::new(len);
        for token in tokens {
            builder.visit(token);
        }
        builder.finish()
    }

    fn visit(&mut self, token: &Token) {
        match token.kind {
            TokenKind::StartTagOpen => {
                self.abandon_void_start_tag(token.start());
                self.open_bracket = Some(token.start());
                self.opening = None;
                self.closing = None;
            }
            TokenKind::StartTag => {
                if let Some(start) = self.open_bracket.take() {
                    let id = self.push_node(&token.text, start);
                    self.opening = Some(id);
                }
            }
            TokenKind::AttributeName => {
                if let Some(id) = self.opening {
                    self.nodes[id.0].attributes.push(Attribute {
                        name: token.text.clone(),
                        value: None,
                    });
                }
            }
            TokenKind::AttributeValue { .. } => {
                if let Some(id) = self.opening {
                    if let Some(attr) = self.nodes[id.0].attributes.last_mut() {
                        attr.value.get_or_insert_with(|| token.text.clone());
                    }
                }
            }
            TokenKind::StartTagClose => {
                if let Some(id) = self.opening.take() {
                    let node = &mut self.nodes[id.0];
                    node.start_tag_end = Some(token.end());
                    if node.is_void {
                        node.end = token.end();
                        self.pop(id);
                    }
                }
                self.open_bracket = None;
            }
            TokenKind::StartTagSelfClose => {
                if let Some(id) = self.opening.take() {
                    let node = &mut self.nodes[id.0];
                    node.start_tag_end = Some(token.end());
                    node.self_closed = true;
                    node.end = token.end();
                    self.pop(id);
                }
            }
            TokenKind::EndTagOpen => {
                self.abandon_void_start_tag(token.start());
                self.opening = None;
                self.open_bracket = None;
                self.closing = None;
                self.end_bracket = Some(token.start());
            }
            TokenKind::EndTag => {
                if let Some(start) = self.end_bracket.take() {
                    self.closing = self.close_matching(&token.text, start, token.end());
                }
            }
            TokenKind::EndTagClose => {
                if let Some(id) = self.closing.take() {
                    let node = &mut self.nodes[id.0];
                    if let Some(span) = node.end_tag.as_mut() {
                        span.end = token.end();
                    }
                    node.end = token.end();
                }
                self.end_bracket = None;
            }
            TokenKind::Whitespace | TokenKind::Unknown | TokenKind::DelimiterAssign => {}
            TokenKind::Content
            | TokenKind::EntityReference
            | TokenKind::RawText
            | TokenKind::Comment
            | TokenKind::Doctype => {
                self.closing = None;
                self.end_bracket = None;
            }
        }
    }

    fn push_node(&mut self, tag: &str, start: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.stack.last().copied();
        self.nodes.push(Node {
            tag: tag.to_string(),
            start,
            start_tag_end: None,
            end_tag: None,
            end: self.len,
            self_closed: false,
            is_void: is_void_element(tag),
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        self.stack.push(id);
        id
    }

    /// Close the nearest open element named exactly `tag`. Elements above it
    /// on the stack end where the end tag begins, without an end tag.
    fn close_matching(&mut self, tag: &str, start: usize, name_end: usize) -> Option<NodeId> {
        let index = self
            .stack
            .iter()
            .rposition(|&id| self.nodes[id.0].tag == tag)?;

        for &id in &self.stack[index + 1..] {
            self.nodes[id.0].end = start;
        }
        let id = self.stack[index];
        self.stack.truncate(index);

        let node = &mut self.nodes[id.0];
        node.end_tag = Some(Span::new(start, name_end));
        node.end = name_end;
        Some(id)
    }

    /// A void element whose start tag was never terminated cannot contain
    /// what follows; end it where the next tag begins.
    fn abandon_void_start_tag(&mut self, at: usize) {
        if let Some(id) = self.opening {
            if self.nodes[id.0].is_void {
                self.nodes[id.0].end = at;
                self.pop(id);
                self.opening = None;
            }
        }
    }

    fn pop(&mut self, id: NodeId) {
        if self.stack.last() == Some(&id) {
            self.stack.pop();
        }
    }

    fn finish(self) -> Document {
        debug!(
            nodes = self.nodes.len(),
            unclosed = self.stack.len(),
            "built structural model"
        );
        Document {
            nodes: self.nodes,
            roots: self.roots,
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: (tag, parent tag) for every node in document order.
    fn shape(source: &str) -> Vec<(String, Option<String>)> {
        let doc = Document::parse(source);
        doc.iter()
            .map(|(_, n)| {
                (
                    n.tag.clone(),
                    n.parent.map(|p| doc.node(p).tag.clone()),
                )
            })
            .collect()
    }

    fn first(source: &str) -> Node {
        Document::parse(source).iter().next().unwrap().1.clone()
    }

    fn s(tag: &str, parent: Option<&str>) -> (String, Option<String>) {
        (tag.to_string(), parent.map(str::to_string))
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert!(doc.roots().is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_text_only_document() {
        assert!(Document::parse("hello &amp; bye").roots().is_empty());
    }

    #[test]
    fn test_nested_elements() {
        assert_eq!(
            shape("<ul><li>a</li><li>b</li></ul>"),
            vec![s("ul", None), s("li", Some("ul")), s("li", Some("ul"))]
        );
    }

    #[test]
    fn test_siblings_at_root() {
        let doc = Document::parse("<p></p><div></div>");
        assert_eq!(doc.roots().len(), 2);
    }

    #[test]
    fn test_void_element_takes_no_children() {
        assert_eq!(
            shape("<div><br><span></span></div>"),
            vec![
                s("div", None),
                s("br", Some("div")),
                s("span", Some("div")),
            ]
        );
    }

    #[test]
    fn test_self_closed_element_takes_no_children() {
        assert_eq!(
            shape("<div><x/><y></y></div>"),
            vec![s("div", None), s("x", Some("div")), s("y", Some("div"))]
        );
    }

    #[test]
    fn test_unterminated_void_start_tag_ends_at_next_tag() {
        assert_eq!(
            shape("<br <p>"),
            vec![s("br", None), s("p", None)]
        );
    }

    // =========================================================================
    // Ranges
    // =========================================================================

    #[test]
    fn test_start_and_end_tag_ranges() {
        let div = first("<div>x</div>");
        assert_eq!(div.start, 0);
        assert_eq!(div.start_tag_end, Some(5));
        assert_eq!(div.end_tag, Some(Span::new(6, 12)));
        assert_eq!(div.end, 12);
        assert!(div.closed());
    }

    #[test]
    fn test_end_tag_without_close_bracket() {
        let div = first("<div></div");
        assert_eq!(div.end_tag, Some(Span::new(5, 10)));
    }

    #[test]
    fn test_unclosed_element_extends_to_document_end() {
        let div = first("<div>abc");
        assert_eq!(div.end_tag, None);
        assert_eq!(div.end, 8);
    }

    #[test]
    fn test_unterminated_start_tag() {
        let div = first("<div class=");
        assert_eq!(div.start_tag_end, None);
        assert_eq!(div.start_tag_span(), Span::new(0, 11));
    }

    // =========================================================================
    // End tag matching
    // =========================================================================

    #[test]
    fn test_end_tag_match_is_case_sensitive() {
        let li = first("<LI></li>");
        assert_eq!(li.end_tag, None);
        assert!(!li.closed());
    }

    #[test]
    fn test_tag_case_preserved() {
        assert_eq!(first("<LI>").tag, "LI");
    }

    #[test]
    fn test_skipped_elements_stay_without_end_tag() {
        let doc = Document::parse("<div><p><b></div>");
        let nodes: Vec<_> = doc.iter().map(|(_, n)| n.clone()).collect();
        assert!(nodes[0].end_tag.is_some());
        assert_eq!(nodes[1].end_tag, None);
        assert_eq!(nodes[1].end, 11);
        assert_eq!(nodes[2].end_tag, None);
        assert_eq!(nodes[2].end, 11);
    }

    #[test]
    fn test_unmatched_end_tag_ignored() {
        assert_eq!(
            shape("<div></span><p>"),
            vec![s("div", None), s("p", Some("div"))]
        );
    }

    #[test]
    fn test_after_implicit_close_new_elements_attach_to_outer() {
        assert_eq!(
            shape("<div><p></div><span>"),
            vec![s("div", None), s("p", Some("div")), s("span", None)]
        );
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    #[test]
    fn test_attributes_recorded_with_raw_values() {
        let input = first(r#"<input type="text" disabled size=3>"#);
        assert_eq!(
            input.attributes,
            vec![
                Attribute {
                    name: "type".into(),
                    value: Some("\"text\"".into()),
                },
                Attribute {
                    name: "disabled".into(),
                    value: None,
                },
                Attribute {
                    name: "size".into(),
                    value: Some("3".into()),
                },
            ]
        );
    }

    #[test]
    fn test_void_and_self_closed_flags() {
        let br = first("<br>");
        assert!(br.is_void);
        assert!(!br.self_closed);
        assert_eq!(br.end_tag, None);

        let li = first("<li/>");
        assert!(li.self_closed);
        assert!(!li.is_void);
    }

    #[test]
    fn test_uppercase_void_element() {
        assert!(first("<BR>").is_void);
    }

    #[test]
    fn test_end_tag_for_void_element_is_ignored() {
        let br = first("<br></br>");
        assert_eq!(br.end_tag, None);
    }
}
