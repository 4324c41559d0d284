use sheet_editor_java::{JavaNodeKind, indent_for, indent_rule};

#[test]
fn test_if_statement_aligns_else_and_brace() {
    assert_eq!(indent_for(JavaNodeKind::IfStatement, "else", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::IfStatement, "  else return;", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::IfStatement, "{", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::IfStatement, "doSomething();", 2), 2);
    // `else` must be a word on its own; an identifier that merely starts
    // with it still gets the continuation indent.
    assert_eq!(indent_for(JavaNodeKind::IfStatement, "elseWhere = 1;", 2), 2);
}

#[test]
fn test_try_statement_aligns_catch_and_finally() {
    assert_eq!(indent_for(JavaNodeKind::TryStatement, "catch (Exception e) {", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::TryStatement, "finally {", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::TryStatement, "  {", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::TryStatement, "cleanup();", 2), 2);
}

#[test]
fn test_labels_stay_flat() {
    assert_eq!(indent_for(JavaNodeKind::LabeledStatement, "anything", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::LabeledStatement, "", 4), 0);
}

#[test]
fn test_switch_block_is_context_sensitive() {
    assert_eq!(indent_for(JavaNodeKind::SwitchBlock, "}", 2), 0);
    assert_eq!(indent_for(JavaNodeKind::SwitchBlock, "case 1:", 2), 2);
    assert_eq!(indent_for(JavaNodeKind::SwitchBlock, "default:", 2), 2);
    assert_eq!(indent_for(JavaNodeKind::SwitchBlock, "x = 1;", 2), 4);
    // Scales with the unit.
    assert_eq!(indent_for(JavaNodeKind::SwitchBlock, "x = 1;", 4), 8);
}

#[test]
fn test_block_comments_dedent_one_unit() {
    assert_eq!(indent_for(JavaNodeKind::BlockComment, "* continuation", 2), -2);
    assert_eq!(indent_for(JavaNodeKind::BlockComment, "", 2), -2);
    assert_eq!(indent_for(JavaNodeKind::BlockComment, "anything", 4), -4);
}

#[test]
fn test_statement_kinds_use_continuation_indent() {
    for kind in [
        JavaNodeKind::WhileStatement,
        JavaNodeKind::ForStatement,
        JavaNodeKind::ReturnStatement,
        JavaNodeKind::LocalVariableDeclaration,
        JavaNodeKind::ExpressionStatement,
    ] {
        assert_eq!(indent_for(kind, "next();", 2), 2, "{kind:?}");
        assert_eq!(indent_for(kind, "{", 2), 0, "{kind:?}");
    }
}

#[test]
fn test_unmapped_kinds_have_no_rule() {
    assert!(indent_rule(JavaNodeKind::Identifier).is_none());
    assert!(indent_rule(JavaNodeKind::ClassBody).is_none());
    assert_eq!(indent_for(JavaNodeKind::Identifier, "x", 2), 0);
}
