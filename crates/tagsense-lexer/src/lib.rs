//! tagsense lexer
//!
//! Tokenizes HTML source into a contiguous stream of tokens. The scanner is
//! total: partially typed markup (the normal state of a document while the
//! user is editing) always tokenizes, and concatenating the token texts
//! gives back the input.
//!
//! # Example
//!
//! ```
//! use tagsense_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("<div cla");
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::AttributeName);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_void_element, Span, Token, TokenKind};
