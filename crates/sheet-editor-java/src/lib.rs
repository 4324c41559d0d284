#![warn(missing_docs)]
//! `sheet-editor-java` - the Java language definition for `sheet-editor`.
//!
//! Three declarative tables keyed by [`JavaNodeKind`], all pure and total:
//!
//! - [`classify`] maps a node kind (plus its immediate structural context) to
//!   a semantic [`StyleCategory`](sheet_editor_lang::StyleCategory), or to
//!   nothing for kinds that render as plain text;
//! - [`indent_rule`] / [`indent_for`] compute the indentation of the line
//!   following a construct;
//! - [`fold_rule`] / [`fold_range_for`] resolve collapsible ranges.
//!
//! This crate knows nothing about any concrete parser. An integration crate
//! (`sheet-editor-treesitter`) maps grammar node names to [`JavaNodeKind`]
//! at the tree boundary and drives the tables from a syntax tree.

mod classify;
mod fold;
mod indent;
mod kind;

use once_cell::sync::Lazy;
use regex::Regex;
use sheet_editor_lang::{CommentConfig, LanguageData};

pub use classify::{ClassifyContext, classify};
pub use fold::{fold_range_for, fold_rule};
pub use indent::{indent_for, indent_rule};
pub use kind::JavaNodeKind;

static INDENT_ON_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:case |default:|\{|\})$").expect("indent trigger pattern"));

/// The Java [`LanguageData`]: comment tokens and the re-indent trigger.
///
/// The trigger fires when typing turns the current line into a closing brace,
/// an opening brace, or a `case `/`default:` label, the constructs whose
/// indentation depends on content typed *after* the line was opened.
pub fn language() -> LanguageData {
    LanguageData {
        name: "java",
        comments: CommentConfig::line_and_block("//", "/*", "*/"),
        indent_on_input: Some(INDENT_ON_INPUT.clone()),
    }
}
