#![warn(missing_docs)]
//! Tree-sitter integration for `sheet-editor`.
//!
//! [`JavaSyntaxProcessor`] connects the external grammar engine
//! (tree-sitter with the Java grammar) to the declarative tables in
//! `sheet-editor-java`: it re-parses incrementally as the session buffer
//! changes and emits the highlight spans and fold regions the session
//! applies to its derived state.

mod processor;

pub use processor::{JavaSyntaxProcessor, SyntaxError, SyntaxUpdateMode};
