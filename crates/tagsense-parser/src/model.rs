//! Structural model for HTML documents.
//!
//! Elements live in an arena owned by [`Document`]; parents own their
//! children through index lists and every node keeps a plain index back to
//! its parent. Nothing here is reference counted, so the whole model is
//! `Clone` and serializable.

use serde::Serialize;
use tagsense_lexer::{Scanner, Span};

use crate::builder::Builder;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// An attribute as written on a start tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    /// Raw value text including quotes, if the attribute has one.
    pub value: Option<String>,
}

/// One element occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Tag name exactly as written.
    pub tag: String,
    /// Offset of the `<` that opens the start tag.
    pub start: usize,
    /// Offset just past the `>` or `/>` ending the start tag, if typed yet.
    pub start_tag_end: Option<usize>,
    /// Range of the matching end tag, from `</` through `>` (or the name
    /// when the `>` is missing).
    pub end_tag: Option<Span>,
    /// End of the element's extent. For elements that were never closed this
    /// is where an ancestor's end tag begins, or the document length.
    pub end: usize,
    pub self_closed: bool,
    pub is_void: bool,
    pub attributes: Vec<Attribute>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    /// Range of the start tag. An unterminated start tag runs to the end of
    /// the element's extent.
    pub fn start_tag_span(&self) -> Span {
        Span::new(self.start, self.start_tag_end.unwrap_or(self.end))
    }

    pub fn end_tag_start(&self) -> Option<usize> {
        self.end_tag.map(|span| span.start)
    }

    /// Whether no end tag is expected anymore: either one was written, or the
    /// start tag is complete and the element is void or self-closed.
    pub fn closed(&self) -> bool {
        self.end_tag.is_some()
            || (self.start_tag_end.is_some() && (self.is_void || self.self_closed))
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }
}

/// The element forest of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) len: usize,
}

impl Document {
    /// Tokenize and build the model for `source`.
    pub fn parse(source: &str) -> Self {
        let tokens = Scanner::tokenize(source);
        Builder::build(&tokens, source.chars().count())
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Document length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All nodes in document order (order of their start tags).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// The node itself followed by its ancestors, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.node(current).parent)
    }

    /// The deepest node whose start tag begins before `offset` and whose
    /// extent still reaches it. Descends into an element that ends exactly at
    /// `offset` only when its last child ends there too, so a position right
    /// after `<a><b>` resolves to `b`.
    pub fn node_before(&self, offset: usize) -> Option<NodeId> {
        let mut found = None;
        let mut children = &self.roots;

        loop {
            let idx = children.partition_point(|&c| self.node(c).start < offset);
            if idx == 0 {
                return found;
            }
            let id = children[idx - 1];
            let node = self.node(id);

            let descend = offset < node.end
                || node
                    .children
                    .last()
                    .is_some_and(|&last| self.node(last).end == node.end);
            if !descend {
                return Some(id);
            }
            found = Some(id);
            children = &node.children;
        }
    }

    /// Every attribute name in the document, in document order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().flat_map(|n| n.attribute_names())
    }
}
