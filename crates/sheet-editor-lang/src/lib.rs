#![warn(missing_docs)]
//! `sheet-editor-lang` - language configuration vocabulary for `sheet-editor`.
//!
//! This crate carries the small, engine-agnostic types a language definition is
//! expressed in: semantic style categories, indentation rules, fold rules, and
//! comment tokens. It does **not** depend on any parser or highlighting engine;
//! a language crate (e.g. `sheet-editor-java`) builds its tables out of these
//! types and an integration crate wires them to a concrete syntax tree.

pub mod fold;
pub mod indent;
pub mod style;

use regex::Regex;

pub use fold::FoldRule;
pub use indent::{CustomIndentFn, IndentRule};
pub use style::StyleCategory;

/// Block comment delimiter pair (e.g. `/*` and `*/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCommentTokens {
    /// Opening delimiter.
    pub open: String,
    /// Closing delimiter.
    pub close: String,
}

/// Comment tokens for a language.
///
/// The editor kernel can use this to implement comment toggling in a
/// UI-agnostic way; fold resolvers use the delimiter widths when trimming
/// block comment ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`), if the language has one.
    pub line: Option<String>,
    /// Block comment delimiters, if the language has them.
    pub block: Option<BlockCommentTokens>,
}

impl CommentConfig {
    /// A config with both a line token and block delimiters.
    pub fn line_and_block(
        line: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block: Some(BlockCommentTokens {
                open: open.into(),
                close: close.into(),
            }),
        }
    }

    /// A config with only a line comment token.
    pub fn line_only(line: impl Into<String>) -> Self {
        Self {
            line: Some(line.into()),
            block: None,
        }
    }

    /// Returns `true` if a non-empty line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block delimiters are configured and non-empty.
    pub fn has_block(&self) -> bool {
        self.block
            .as_ref()
            .is_some_and(|b| !b.open.is_empty() && !b.close.is_empty())
    }
}

/// Declarative per-language editing data.
///
/// This is the bundle a language definition hands to the host surface:
/// comment tokens plus the "re-indent on input" trigger. The trigger is a
/// pattern the *current line* is matched against after every keystroke; when
/// newly typed text makes the line match, the host should recompute the
/// line's indentation (e.g. typing `}` or `case ` in Java).
#[derive(Debug, Clone)]
pub struct LanguageData {
    /// Language name (e.g. `"java"`).
    pub name: &'static str,
    /// Comment tokens.
    pub comments: CommentConfig,
    /// Re-indent trigger pattern, if the language declares one.
    pub indent_on_input: Option<Regex>,
}

impl LanguageData {
    /// Returns `true` if typing has turned `line` into an indent trigger.
    pub fn reindent_on_input(&self, line: &str) -> bool {
        self.indent_on_input
            .as_ref()
            .is_some_and(|re| re.is_match(line))
    }
}
