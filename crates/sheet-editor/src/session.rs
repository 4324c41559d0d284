//! Editor sessions.
//!
//! An [`EditorSession`] owns exactly one live buffer for its lifetime: the
//! source text, cursor/selection, viewport scroll, and the derived highlight
//! and fold state a [`DocumentProcessor`] keeps up to date. Sessions are
//! normally created through [`EditorHost::mount`](crate::EditorHost::mount)
//! and destroyed on unmount; no two sessions ever share a buffer.
//!
//! All operations are synchronous and run on the caller's thread. Reentrant
//! calls into the same session are not supported; the caller sequences them.

use std::fmt;
use std::ops::Range;

use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::intervals::{FoldRegion, FoldingManager, HighlightSet, HighlightSpan, StyledSpan};
use crate::line_ending::LineEnding;
use crate::processing::{DocumentProcessor, ProcessingEdit};
use crate::theme::StyleTheme;

/// Errors from session buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An edit range does not lie inside the buffer.
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "invalid edit range: {start}..{end}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Per-session editing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Columns per indentation level.
    pub indent_unit: i32,
    /// Display cells a tab character occupies.
    pub tab_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            tab_width: 2,
        }
    }
}

/// Everything needed to create a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Editing options.
    pub options: SessionOptions,
    /// Initial style theme.
    pub theme: StyleTheme,
}

/// A logical cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column, in characters.
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// What changed in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Buffer content changed.
    DocumentModified,
    /// Cursor moved.
    CursorMoved,
    /// Selection changed.
    SelectionChanged,
    /// Scroll position changed.
    ViewportChanged,
    /// Fold regions or collapse state changed.
    FoldingChanged,
    /// Highlights or theme changed.
    StyleChanged,
}

/// A change notification delivered to subscribers.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// What changed.
    pub change_type: StateChangeType,
    /// Session version before the change.
    pub old_version: u64,
    /// Session version after the change.
    pub new_version: u64,
    /// Affected character range, when the change is localized.
    pub affected_region: Option<Range<usize>>,
}

type StateChangeCallback = Box<dyn FnMut(&StateChange)>;

struct EditRecord {
    start: usize,
    removed: String,
    inserted: String,
}

/// One live, mutable source buffer plus its derived editor state.
pub struct EditorSession {
    rope: Rope,
    line_ending: LineEnding,
    options: SessionOptions,
    theme: StyleTheme,
    version: u64,
    content_version: u64,
    cursor: usize,
    selection: Option<Range<usize>>,
    scroll_top: usize,
    highlights: HighlightSet,
    folding: FoldingManager,
    last_delta: Option<TextDelta>,
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
    subscribers: Vec<StateChangeCallback>,
}

impl EditorSession {
    /// Create a session over `initial_text`.
    ///
    /// CRLF (and stray CR) line endings are normalized to LF; the detected
    /// convention is kept for [`EditorSession::text_for_export`].
    pub fn new(initial_text: &str, config: SessionConfig) -> Self {
        let line_ending = LineEnding::detect(initial_text);
        let normalized = LineEnding::normalize(initial_text);
        Self {
            rope: Rope::from_str(&normalized),
            line_ending,
            options: config.options,
            theme: config.theme,
            version: 0,
            content_version: 0,
            cursor: 0,
            selection: None,
            scroll_top: 0,
            highlights: HighlightSet::new(),
            folding: FoldingManager::new(),
            last_delta: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    // --- Content ---

    /// The buffer content (LF newlines).
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The buffer content with the detected line-ending convention
    /// re-applied.
    pub fn text_for_export(&self) -> String {
        self.line_ending.apply(&self.rope.to_string())
    }

    /// Character count of the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Line count of the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of `line` without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// The line-ending convention the content arrived with.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Replace the whole buffer.
    ///
    /// A full replace, not a patch: derived highlight/fold state is dropped
    /// until the next processor run, and no undo-history merging is attempted
    /// (the replace itself is undoable as a single step).
    pub fn replace_content(&mut self, new_text: &str) {
        self.line_ending = LineEnding::detect(new_text);
        let normalized = LineEnding::normalize(new_text);
        let record = self.splice(0, self.rope.len_chars(), &normalized);
        tracing::debug!(
            chars = self.rope.len_chars(),
            "session content replaced wholesale"
        );
        self.highlights.clear();
        self.folding.clear();
        self.finish_edit(record);
    }

    /// Apply an incremental edit: replace the characters in `range` with
    /// `text`.
    pub fn edit(&mut self, range: Range<usize>, text: &str) -> Result<(), SessionError> {
        if range.start > range.end || range.end > self.rope.len_chars() {
            return Err(SessionError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        let record = self.splice(range.start, range.end, text);
        self.finish_edit(record);
        Ok(())
    }

    /// Undo the most recent edit. Returns `false` when the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.undo_stack.pop() else {
            return false;
        };
        let performed = self.splice(
            record.start,
            record.start + record.inserted.chars().count(),
            &record.removed,
        );
        self.emit_document_change(&performed);
        self.redo_stack.push(performed);
        true
    }

    /// Redo the most recently undone edit. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.redo_stack.pop() else {
            return false;
        };
        let performed = self.splice(
            record.start,
            record.start + record.inserted.chars().count(),
            &record.removed,
        );
        self.emit_document_change(&performed);
        self.undo_stack.push(performed);
        true
    }

    /// Returns `true` if an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns `true` if a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn splice(&mut self, start: usize, end: usize, text: &str) -> EditRecord {
        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        EditRecord {
            start,
            removed,
            inserted: text.to_string(),
        }
    }

    fn finish_edit(&mut self, record: EditRecord) {
        self.emit_document_change(&record);
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Record the delta, fix up cursor/selection, and notify for an edit
    /// that has already been spliced into the rope.
    fn emit_document_change(&mut self, performed: &EditRecord) {
        let inserted_len = performed.inserted.chars().count();
        let removed_len = performed.removed.chars().count();
        let after_len = self.rope.len_chars();
        let before_len = after_len.saturating_add(removed_len).saturating_sub(inserted_len);
        self.last_delta = Some(TextDelta::single(
            before_len,
            after_len,
            TextDeltaEdit {
                start: performed.start,
                deleted: performed.removed.clone(),
                inserted: performed.inserted.clone(),
            },
        ));
        self.adjust_cursor_for(performed);
        self.content_version += 1;
        self.bump(
            StateChangeType::DocumentModified,
            Some(performed.start..performed.start + inserted_len),
        );
    }

    fn adjust_cursor_for(&mut self, record: &EditRecord) {
        let removed_len = record.removed.chars().count();
        let inserted_len = record.inserted.chars().count();
        let end = record.start + removed_len;
        if self.cursor >= end {
            self.cursor = self.cursor - removed_len + inserted_len;
        } else if self.cursor > record.start {
            self.cursor = record.start + inserted_len;
        }
        self.cursor = self.cursor.min(self.rope.len_chars());
        if let Some(selection) = self.selection.take() {
            let len = self.rope.len_chars();
            let clamped = selection.start.min(len)..selection.end.min(len);
            if clamped.start < clamped.end {
                self.selection = Some(clamped);
            }
        }
    }

    // --- Versioning and notifications ---

    /// Monotonic version covering any state change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Monotonic version covering buffer content changes only. Processors
    /// key on this so that style/viewport changes do not trigger reparses.
    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    /// The delta of the most recent content change, for incremental
    /// consumers.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_delta.as_ref()
    }

    /// Subscribe to state change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(&StateChange) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn bump(&mut self, change_type: StateChangeType, affected_region: Option<Range<usize>>) {
        let old_version = self.version;
        self.version += 1;
        let change = StateChange {
            change_type,
            old_version,
            new_version: self.version,
            affected_region,
        };
        for callback in &mut self.subscribers {
            callback(&change);
        }
    }

    // --- Cursor, selection, viewport ---

    /// Cursor character offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to a character offset.
    ///
    /// The offset is clamped to the buffer and snapped left onto a grapheme
    /// cluster boundary, so a cursor can never land inside an emoji or a
    /// combining sequence.
    pub fn set_cursor(&mut self, offset: usize) {
        let snapped = self.snap_to_grapheme(offset.min(self.rope.len_chars()));
        if snapped != self.cursor {
            self.cursor = snapped;
            self.bump(StateChangeType::CursorMoved, None);
        }
    }

    /// Cursor position as `(line, column)` in characters.
    pub fn cursor_position(&self) -> Position {
        let line = self.rope.char_to_line(self.cursor);
        let column = self.cursor - self.rope.line_to_char(line);
        Position::new(line, column)
    }

    /// Cursor column in display cells, accounting for tabs and wide
    /// characters.
    pub fn cursor_display_column(&self) -> usize {
        let line = self.rope.char_to_line(self.cursor);
        let line_start = self.rope.line_to_char(line);
        let mut column = 0usize;
        for c in self.rope.slice(line_start..self.cursor).chars() {
            if c == '\t' {
                column = (column / self.options.tab_width + 1) * self.options.tab_width;
            } else {
                column += UnicodeWidthChar::width(c).unwrap_or(0);
            }
        }
        column
    }

    fn snap_to_grapheme(&self, offset: usize) -> usize {
        if offset == 0 || offset >= self.rope.len_chars() {
            return offset;
        }
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        let line_text = self.rope.line(line).to_string();
        let local = offset - line_start;
        let target_byte = line_text
            .char_indices()
            .nth(local)
            .map_or(line_text.len(), |(b, _)| b);
        let boundary_byte = line_text
            .grapheme_indices(true)
            .map(|(b, _)| b)
            .take_while(|&b| b <= target_byte)
            .last()
            .unwrap_or(0);
        line_start + line_text[..boundary_byte].chars().count()
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Set or clear the selection (clamped to the buffer; empty ranges clear).
    pub fn set_selection(&mut self, selection: Option<Range<usize>>) {
        let len = self.rope.len_chars();
        let clamped = selection
            .map(|s| s.start.min(len)..s.end.min(len))
            .filter(|s| s.start < s.end);
        if clamped != self.selection {
            self.selection = clamped;
            self.bump(StateChangeType::SelectionChanged, None);
        }
    }

    /// Scroll position, in visual lines.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Set the scroll position.
    pub fn set_scroll_top(&mut self, scroll_top: usize) {
        if scroll_top != self.scroll_top {
            self.scroll_top = scroll_top;
            self.bump(StateChangeType::ViewportChanged, None);
        }
    }

    /// Editing options.
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Columns per indentation level.
    pub fn indent_unit(&self) -> i32 {
        self.options.indent_unit
    }

    // --- Theme and derived state ---

    /// The current style theme.
    pub fn theme(&self) -> &StyleTheme {
        &self.theme
    }

    /// Swap the style theme on the live session.
    ///
    /// Highlight spans are category-keyed and resolved through the theme at
    /// query time, so this neither reparses nor touches buffer, cursor, or
    /// scroll state.
    pub fn set_theme(&mut self, theme: StyleTheme) {
        self.theme = theme;
        self.bump(StateChangeType::StyleChanged, None);
    }

    /// Run a processor and apply whatever edits it produces.
    pub fn apply_processor<P: DocumentProcessor>(
        &mut self,
        processor: &mut P,
    ) -> Result<(), P::Error> {
        let edits = processor.process(self)?;
        if !edits.is_empty() {
            self.apply_processing_edits(edits);
        }
        Ok(())
    }

    /// Apply derived-state edits produced by a processor.
    pub fn apply_processing_edits(&mut self, edits: Vec<ProcessingEdit>) {
        for edit in edits {
            match edit {
                ProcessingEdit::ReplaceHighlights { spans } => {
                    self.highlights.replace(spans);
                    self.bump(StateChangeType::StyleChanged, None);
                }
                ProcessingEdit::ClearHighlights => {
                    self.highlights.clear();
                    self.bump(StateChangeType::StyleChanged, None);
                }
                ProcessingEdit::ReplaceFoldRegions {
                    regions,
                    preserve_collapsed,
                } => {
                    self.folding.replace_regions(regions, preserve_collapsed);
                    self.bump(StateChangeType::FoldingChanged, None);
                }
                ProcessingEdit::ClearFoldRegions => {
                    self.folding.clear();
                    self.bump(StateChangeType::FoldingChanged, None);
                }
            }
        }
    }

    /// Raw category-keyed highlight spans.
    pub fn highlight_spans(&self) -> &[HighlightSpan] {
        self.highlights.spans()
    }

    /// Highlight spans resolved through the theme, clamped to the buffer.
    ///
    /// Categories the theme does not map are omitted (plain-text rendering),
    /// as are spans stranded beyond the buffer end by edits the processor has
    /// not caught up with yet.
    pub fn styled_spans(&self) -> Vec<StyledSpan> {
        let len = self.rope.len_chars();
        self.highlights
            .spans()
            .iter()
            .filter(|span| span.start < len)
            .filter_map(|span| {
                let style = self.theme.style_for(span.category)?;
                Some(StyledSpan {
                    start: span.start,
                    end: span.end.min(len),
                    style,
                })
            })
            .collect()
    }

    /// Category spans overlapping `[start, end)` (viewport queries).
    pub fn highlight_spans_in_range(&self, start: usize, end: usize) -> &[HighlightSpan] {
        self.highlights.spans_in_range(start, end)
    }

    /// Current fold regions.
    pub fn fold_regions(&self) -> &[FoldRegion] {
        self.folding.regions()
    }

    /// Toggle the fold starting at `line`. Returns `false` when no region
    /// starts there.
    pub fn toggle_fold_at_line(&mut self, line: usize) -> bool {
        if self.folding.toggle_at_line(line) {
            self.bump(StateChangeType::FoldingChanged, None);
            true
        } else {
            false
        }
    }

    /// Lines currently hidden by collapsed folds.
    pub fn collapsed_line_count(&self) -> usize {
        self.folding.collapsed_line_count()
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("chars", &self.rope.len_chars())
            .field("version", &self.version)
            .field("content_version", &self.content_version)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
