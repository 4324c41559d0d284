//! Indentation table.
//!
//! Associates node kinds with [`IndentRule`]s. Statement-like constructs get
//! a continuation indent unless the next line opens their brace; `if` and
//! `try` additionally keep their continuation keywords (`else`, `catch`,
//! `finally`) aligned with the statement start; switch bodies indent case
//! labels one level and case bodies two; block comments dedent one unit so
//! `*` continuation lines sit under the opening `/*`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::JavaNodeKind;
use sheet_editor_lang::IndentRule;

static IF_RULE: Lazy<IndentRule> =
    Lazy::new(|| IndentRule::continued(r"^\s*(\{|else\b)").expect("if indent pattern"));

static TRY_RULE: Lazy<IndentRule> =
    Lazy::new(|| IndentRule::continued(r"^\s*(\{|catch\b|finally\b)").expect("try indent pattern"));

static STATEMENT_RULE: Lazy<IndentRule> =
    Lazy::new(|| IndentRule::continued(r"^\s*\{").expect("statement indent pattern"));

static FLAT_RULE: IndentRule = IndentRule::Flat;

static COMMENT_RULE: IndentRule = IndentRule::Units(-1);

static SWITCH_RULE: IndentRule = IndentRule::Custom(switch_block_indent);

static SWITCH_CLOSED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\}").expect("switch close pattern"));

static SWITCH_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(case|default)\b").expect("switch label pattern"));

/// Switch bodies are the one context-sensitive case: the closing brace stays
/// flat, `case`/`default` labels indent one unit, and the statements under a
/// label indent two.
fn switch_block_indent(text_after: &str, unit: i32) -> i32 {
    if SWITCH_CLOSED.is_match(text_after) {
        0
    } else if SWITCH_LABEL.is_match(text_after) {
        unit
    } else {
        2 * unit
    }
}

/// Look up the indent rule for a node kind.
///
/// Kinds without an entry have no indentation opinion (the host falls back to
/// copying the previous line's indent).
pub fn indent_rule(kind: JavaNodeKind) -> Option<&'static IndentRule> {
    use JavaNodeKind as K;
    Some(match kind {
        K::IfStatement => &IF_RULE,
        K::TryStatement => &TRY_RULE,
        K::LabeledStatement => &FLAT_RULE,
        K::SwitchBlock => &SWITCH_RULE,
        K::BlockComment => &COMMENT_RULE,
        K::WhileStatement
        | K::DoStatement
        | K::ForStatement
        | K::EnhancedForStatement
        | K::ReturnStatement
        | K::ThrowStatement
        | K::AssertStatement
        | K::YieldStatement
        | K::SynchronizedStatement
        | K::BreakStatement
        | K::ContinueStatement
        | K::ExpressionStatement
        | K::LocalVariableDeclaration
        | K::FieldDeclaration
        | K::SwitchStatement
        | K::PackageDeclaration
        | K::ImportDeclaration => &STATEMENT_RULE,
        _ => return None,
    })
}

/// Indentation delta, in columns, for the line following a construct.
///
/// `text_after` is the (whitespace-trimmed-at-most-leading) text already
/// typed on the line being indented; `unit` is the indent unit in columns.
/// Kinds without a rule contribute no delta.
pub fn indent_for(kind: JavaNodeKind, text_after: &str, unit: i32) -> i32 {
    indent_rule(kind).map_or(0, |rule| rule.indent_delta(text_after, unit))
}
