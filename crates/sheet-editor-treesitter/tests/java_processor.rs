use sheet_editor::{
    EditorSession, ProcessingEdit, SessionConfig, StyleTheme,
};
use sheet_editor_lang::StyleCategory;
use sheet_editor_treesitter::{JavaSyntaxProcessor, SyntaxUpdateMode};

fn sample_session() -> EditorSession {
    EditorSession::new(include_str!("fixtures/Sample.java"), SessionConfig::default())
}

fn categories_of(session: &EditorSession) -> Vec<StyleCategory> {
    session
        .highlight_spans()
        .iter()
        .map(|s| s.category)
        .collect()
}

fn span_text(session: &EditorSession, start: usize, end: usize) -> String {
    session.text().chars().skip(start).take(end - start).collect()
}

#[test]
fn test_initial_process_produces_highlights_and_folds() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();

    session.apply_processor(&mut processor).unwrap();
    assert_eq!(processor.last_update_mode(), SyntaxUpdateMode::Initial);

    let categories = categories_of(&session);
    assert!(categories.contains(&StyleCategory::ControlKeyword));
    assert!(categories.contains(&StyleCategory::DefinitionKeyword));
    assert!(categories.contains(&StyleCategory::Modifier));
    assert!(categories.contains(&StyleCategory::TypeName));
    assert!(categories.contains(&StyleCategory::StringLiteral));
    assert!(categories.contains(&StyleCategory::NumberLiteral));
    assert!(categories.contains(&StyleCategory::BlockComment));
    assert!(!session.fold_regions().is_empty());
}

#[test]
fn test_invocation_names_classify_as_calls() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    let calls: Vec<String> = session
        .highlight_spans()
        .iter()
        .filter(|s| s.category == StyleCategory::FunctionCall)
        .map(|s| span_text(&session, s.start, s.end))
        .collect();
    assert!(calls.iter().any(|name| name == "println"), "calls: {calls:?}");
    assert!(calls.iter().any(|name| name == "isEmpty"), "calls: {calls:?}");
    // The receiver of a call is not a call.
    assert!(!calls.iter().any(|name| name == "name"), "calls: {calls:?}");

    let definitions: Vec<String> = session
        .highlight_spans()
        .iter()
        .filter(|s| s.category == StyleCategory::FunctionDefinition)
        .map(|s| span_text(&session, s.start, s.end))
        .collect();
    assert!(definitions.iter().any(|name| name == "main"));
}

#[test]
fn test_spans_are_sorted_and_non_overlapping() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    let spans = session.highlight_spans();
    assert!(!spans.is_empty());
    for pair in spans.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        assert!(pair[0].end <= pair[1].start, "overlap: {pair:?}");
    }
}

#[test]
fn test_incremental_update_after_single_edit() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    // Append a line comment at the very end of the buffer.
    let end = session.len_chars();
    session.edit(end..end, "// trailing note\n").unwrap();
    session.apply_processor(&mut processor).unwrap();
    assert_eq!(processor.last_update_mode(), SyntaxUpdateMode::Incremental);
    assert!(categories_of(&session).contains(&StyleCategory::LineComment));

    // Nothing changed since: the processor skips.
    session.apply_processor(&mut processor).unwrap();
    assert_eq!(processor.last_update_mode(), SyntaxUpdateMode::Skipped);
}

#[test]
fn test_missed_revision_falls_back_to_full_reparse() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    // Two edits back to back: only the latest delta survives, so the
    // processor cannot catch up incrementally.
    session.edit(0..0, "// one\n").unwrap();
    session.edit(0..0, "// two\n").unwrap();
    session.apply_processor(&mut processor).unwrap();
    assert_eq!(processor.last_update_mode(), SyntaxUpdateMode::FullReparse);
    assert!(!session.highlight_spans().is_empty());
}

#[test]
fn test_theme_swap_does_not_reparse() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    session.set_theme(StyleTheme::new().with(StyleCategory::ControlKeyword, 3));
    session.apply_processor(&mut processor).unwrap();
    assert_eq!(processor.last_update_mode(), SyntaxUpdateMode::Skipped);

    // The swapped theme resolves at query time.
    let styled = session.styled_spans();
    assert!(!styled.is_empty());
    assert!(styled.iter().all(|s| s.style == 3));
}

#[test]
fn test_block_comment_fold_excludes_delimiters() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    // The fixture opens with a block comment on lines 4..=6; the fold region
    // keeps `/*` and `*/` visible, so it covers lines 4..=5.
    assert!(
        session
            .fold_regions()
            .iter()
            .any(|r| r.start_line == 4 && r.end_line == 5),
        "regions: {:?}",
        session.fold_regions()
    );
}

#[test]
fn test_collapsed_fold_survives_unrelated_edit() {
    let mut session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    session.apply_processor(&mut processor).unwrap();

    let comment_fold_line = 4;
    assert!(session.toggle_fold_at_line(comment_fold_line));
    assert!(session.collapsed_line_count() > 0);

    // Editing at the end of the buffer leaves the comment's lines untouched.
    let end = session.len_chars();
    session.edit(end..end, "// more\n").unwrap();
    session.apply_processor(&mut processor).unwrap();

    let region = session
        .fold_regions()
        .iter()
        .find(|r| r.start_line == comment_fold_line)
        .expect("comment fold survives reparse");
    assert!(region.is_collapsed);
}

#[test]
fn test_malformed_source_is_tolerated() {
    let mut session = EditorSession::new(
        "public class { if ( \"unterminated\n int x = ;",
        SessionConfig::default(),
    );
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    // Error-recovery nodes classify like any unmapped kind: no panic, and
    // whatever tokens the parser salvages still highlight.
    session.apply_processor(&mut processor).unwrap();
    assert!(!categories_of(&session).is_empty());
}

#[test]
fn test_processor_emits_both_edit_kinds() {
    let session = sample_session();
    let mut processor = JavaSyntaxProcessor::new().unwrap();
    let edits = {
        use sheet_editor::DocumentProcessor;
        processor.process(&session).unwrap()
    };

    let mut saw_highlights = false;
    let mut saw_folds = false;
    for edit in edits {
        match edit {
            ProcessingEdit::ReplaceHighlights { spans } => {
                assert!(!spans.is_empty());
                saw_highlights = true;
            }
            ProcessingEdit::ReplaceFoldRegions { regions, .. } => {
                assert!(!regions.is_empty());
                saw_folds = true;
            }
            _ => {}
        }
    }
    assert!(saw_highlights);
    assert!(saw_folds);
}
