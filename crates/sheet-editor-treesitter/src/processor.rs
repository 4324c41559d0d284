use std::ops::Range;

use sheet_editor::{
    DocumentProcessor, EditorSession, FoldRegion, HighlightSpan, LineIndex, ProcessingEdit,
    TextDelta,
};
use sheet_editor_java::{ClassifyContext, JavaNodeKind, classify, fold_range_for, fold_rule};
use sheet_editor_lang::{FoldRule, LanguageData};
use tree_sitter::{InputEdit, Parser, Point, Tree, TreeCursor};

/// Errors produced by [`JavaSyntaxProcessor`].
#[derive(Debug)]
pub enum SyntaxError {
    /// Loading the Java grammar into the parser failed.
    Language(String),
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Language(msg) => write!(f, "java grammar error: {msg}"),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// How the processor updated its parse tree for the last `process()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxUpdateMode {
    /// First parse for this processor instance.
    Initial,
    /// Applied the session's text delta and re-parsed incrementally.
    Incremental,
    /// Fell back to re-syncing the full text and re-parsing from scratch.
    FullReparse,
    /// Nothing to do (this content version was already processed).
    Skipped,
}

/// Internal marker: the session delta did not line up with our text copy.
struct DeltaMismatch;

/// An incremental Java document processor.
///
/// Owns a tree-sitter parser configured with the Java grammar plus a private
/// copy of the session text. On each [`DocumentProcessor::process`] call it
/// brings its parse tree up to date (incrementally when the session's
/// [`TextDelta`] matches, from scratch otherwise), then walks the tree once,
/// driving the `sheet-editor-java` tables to produce non-overlapping
/// highlight spans and fold regions.
///
/// Error-recovery nodes in partial/invalid source have no mapped kind and
/// fall through the same total table lookups as any unknown construct, so
/// malformed input degrades to plain text instead of failing.
pub struct JavaSyntaxProcessor {
    parser: Parser,
    tree: Option<Tree>,
    text: String,
    line_index: LineIndex,
    language_data: LanguageData,
    preserve_collapsed_folds: bool,
    last_content_version: Option<u64>,
    last_update_mode: SyntaxUpdateMode,
}

impl JavaSyntaxProcessor {
    /// Create a processor with the Java grammar loaded.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| SyntaxError::Language(e.to_string()))?;
        Ok(Self {
            parser,
            tree: None,
            text: String::new(),
            line_index: LineIndex::new(),
            language_data: sheet_editor_java::language(),
            preserve_collapsed_folds: true,
            last_content_version: None,
            last_update_mode: SyntaxUpdateMode::FullReparse,
        })
    }

    /// The Java [`LanguageData`] (comment tokens, indent trigger), for hosts
    /// that wire editing behavior alongside highlighting.
    pub fn language_data(&self) -> &LanguageData {
        &self.language_data
    }

    /// Control whether fold replacement keeps surviving regions collapsed.
    pub fn set_preserve_collapsed_folds(&mut self, preserve: bool) {
        self.preserve_collapsed_folds = preserve;
    }

    /// The update mode of the last `process()` call (for tests and
    /// instrumentation).
    pub fn last_update_mode(&self) -> SyntaxUpdateMode {
        self.last_update_mode
    }

    fn sync_from_session_full(&mut self, session: &EditorSession) {
        self.text = session.text();
        self.line_index = LineIndex::from_text(&self.text);
    }

    fn parse(&mut self) -> Option<Tree> {
        self.parser.parse(&self.text, self.tree.as_ref())
    }

    fn advance_point(mut point: Point, text: &str) -> Point {
        let mut parts = text.split('\n');
        let Some(first) = parts.next() else {
            return point;
        };
        point.column = point.column.saturating_add(first.len());
        for part in parts {
            point.row = point.row.saturating_add(1);
            point.column = part.len();
        }
        point
    }

    /// Apply the session's delta to our text copy and the old tree.
    ///
    /// Any disagreement between the delta and the copy means we missed a
    /// revision; the caller falls back to a full re-sync.
    fn apply_delta(&mut self, delta: &TextDelta) -> Result<(), DeltaMismatch> {
        if self.line_index.char_count() != delta.before_len || self.tree.is_none() {
            return Err(DeltaMismatch);
        }

        for edit in &delta.edits {
            let start_char = edit.start;
            let deleted_chars = edit.deleted.chars().count();

            let start_byte = self.line_index.char_to_byte(start_char);
            let old_end_byte = start_byte.saturating_add(edit.deleted.len());
            let new_end_byte = start_byte.saturating_add(edit.inserted.len());

            let Some(old_slice) = self.text.get(start_byte..old_end_byte) else {
                return Err(DeltaMismatch);
            };
            if old_slice != edit.deleted {
                return Err(DeltaMismatch);
            }

            let (row, column) = self.line_index.char_to_point(start_char);
            let start_position = Point { row, column };
            let old_end_position = Self::advance_point(start_position, &edit.deleted);
            let new_end_position = Self::advance_point(start_position, &edit.inserted);

            if let Some(tree) = self.tree.as_mut() {
                tree.edit(&InputEdit {
                    start_byte,
                    old_end_byte,
                    new_end_byte,
                    start_position,
                    old_end_position,
                    new_end_position,
                });
            }

            self.text
                .replace_range(start_byte..old_end_byte, &edit.inserted);
            self.line_index.delete(start_char, deleted_chars);
            self.line_index.insert(start_char, &edit.inserted);
        }

        if self.line_index.char_count() != delta.after_len {
            return Err(DeltaMismatch);
        }
        Ok(())
    }

    fn byte_to_line(&self, byte_offset: usize) -> usize {
        self.line_index
            .char_to_line(self.line_index.byte_to_char(byte_offset))
    }

    /// Line range a foldable node collapses to.
    ///
    /// Container bodies fold through their closing line. Delimiter-trimmed
    /// ranges (block comments) stop one line short of the trimmed end, so the
    /// line carrying the closing delimiter stays visible next to the fold
    /// placeholder.
    fn fold_lines(&self, kind: JavaNodeKind, node: &tree_sitter::Node<'_>) -> Option<(usize, usize)> {
        match fold_rule(kind)? {
            FoldRule::Span => Some((node.start_position().row, node.end_position().row)),
            FoldRule::TrimDelimiters { .. } => {
                let range: Range<usize> =
                    fold_range_for(kind, node.start_byte(), node.end_byte())?;
                let start_line = self.byte_to_line(range.start);
                let end_line = self.byte_to_line(range.end).saturating_sub(1);
                Some((start_line, end_line))
            }
        }
    }

    fn collect(&self, tree: &Tree) -> (Vec<HighlightSpan>, Vec<FoldRegion>) {
        let mut spans = Vec::new();
        let mut regions = Vec::new();
        let mut cursor = tree.walk();
        self.visit(&mut cursor, None, None, &mut spans, &mut regions);

        spans.sort_by_key(|s| (s.start, s.end));
        regions.sort_by_key(|r| (r.start_line, r.end_line));
        regions.dedup_by(|a, b| a.start_line == b.start_line && a.end_line == b.end_line);
        (spans, regions)
    }

    fn visit(
        &self,
        cursor: &mut TreeCursor<'_>,
        parent: Option<JavaNodeKind>,
        grandparent: Option<JavaNodeKind>,
        spans: &mut Vec<HighlightSpan>,
        regions: &mut Vec<FoldRegion>,
    ) {
        let node = cursor.node();
        let kind = JavaNodeKind::from_grammar_name(node.kind());

        if let Some(kind) = kind {
            if let Some((start_line, end_line)) = self.fold_lines(kind, &node) {
                if end_line > start_line {
                    regions.push(FoldRegion::new(start_line, end_line));
                }
            }

            let ctx = ClassifyContext {
                parent,
                grandparent,
                field: cursor.field_name(),
            };
            if let Some(category) = classify(kind, &ctx) {
                let start = self.line_index.byte_to_char(node.start_byte());
                let end = self.line_index.byte_to_char(node.end_byte());
                if end > start {
                    spans.push(HighlightSpan::new(start, end, category));
                }
                // The first classified ancestor styles its whole span;
                // descending further would double-style the subtree.
                return;
            }
        }

        if cursor.goto_first_child() {
            loop {
                self.visit(cursor, kind, parent, spans, regions);
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
            cursor.goto_parent();
        }
    }
}

impl DocumentProcessor for JavaSyntaxProcessor {
    type Error = SyntaxError;

    fn process(&mut self, session: &EditorSession) -> Result<Vec<ProcessingEdit>, Self::Error> {
        let version = session.content_version();
        if self.last_content_version == Some(version) {
            self.last_update_mode = SyntaxUpdateMode::Skipped;
            return Ok(Vec::new());
        }

        let update_mode = if self.tree.is_none() {
            self.sync_from_session_full(session);
            self.tree = self.parse();
            SyntaxUpdateMode::Initial
        } else if let Some(delta) = session.last_text_delta() {
            match self.apply_delta(delta) {
                Ok(()) => {
                    self.tree = self.parse();
                    SyntaxUpdateMode::Incremental
                }
                Err(DeltaMismatch) => {
                    self.sync_from_session_full(session);
                    self.tree = self.parser.parse(&self.text, None);
                    SyntaxUpdateMode::FullReparse
                }
            }
        } else {
            self.sync_from_session_full(session);
            self.tree = self.parser.parse(&self.text, None);
            SyntaxUpdateMode::FullReparse
        };
        tracing::debug!(?update_mode, version, "java syntax update");

        let Some(tree) = self.tree.as_ref() else {
            self.last_content_version = Some(version);
            self.last_update_mode = update_mode;
            return Ok(Vec::new());
        };

        let (spans, regions) = self.collect(tree);
        let edits = vec![
            ProcessingEdit::ReplaceHighlights { spans },
            ProcessingEdit::ReplaceFoldRegions {
                regions,
                preserve_collapsed: self.preserve_collapsed_folds,
            },
        ];

        self.last_content_version = Some(version);
        self.last_update_mode = update_mode;
        Ok(edits)
    }
}
