//! Folding table.
//!
//! Container bodies (class/interface/enum/constructor/module bodies, plain
//! blocks, switch bodies, array initializers) fold their own span. Block
//! comments fold the text between `/*` and `*/` so the delimiters stay
//! visible around the collapsed placeholder. Everything else does not fold.

use std::ops::Range;

use crate::kind::JavaNodeKind;
use sheet_editor_lang::FoldRule;

/// Look up the fold rule for a node kind.
pub fn fold_rule(kind: JavaNodeKind) -> Option<FoldRule> {
    use JavaNodeKind as K;
    match kind {
        K::Block
        | K::SwitchBlock
        | K::ClassBody
        | K::InterfaceBody
        | K::EnumBody
        | K::ConstructorBody
        | K::ModuleBody
        | K::ArrayInitializer
        | K::ElementValueArrayInitializer => Some(FoldRule::Span),
        K::BlockComment => Some(FoldRule::TrimDelimiters { open: 2, close: 2 }),
        _ => None,
    }
}

/// Resolve the collapsible range for a node of `kind` spanning `[start, end)`.
pub fn fold_range_for(kind: JavaNodeKind, start: usize, end: usize) -> Option<Range<usize>> {
    fold_rule(kind)?.apply(start, end)
}
