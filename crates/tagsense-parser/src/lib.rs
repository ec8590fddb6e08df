//! tagsense parser
//!
//! Builds the structural model of an HTML document: which elements are open,
//! which were closed, which are void or self-closed, and how they nest. The
//! model is an arena of nodes addressed by [`NodeId`], rebuilt from scratch
//! for every request.
//!
//! ```
//! use tagsense_parser::Document;
//!
//! let doc = Document::parse("<ul><li>");
//! let li = doc.node_before(8).unwrap();
//! assert_eq!(doc.node(li).tag, "li");
//! assert!(!doc.node(li).closed());
//! ```

pub mod builder;
pub mod model;

pub use builder::Builder;
pub use model::{Attribute, Document, Node, NodeId};
