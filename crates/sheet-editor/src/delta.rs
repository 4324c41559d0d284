//! Structured text change deltas.
//!
//! Incremental consumers (an incremental parser, an indexer) need structured
//! edits rather than "the document changed somewhere". A [`TextDelta`] records
//! the exact edits, in character offsets (Unicode scalar values), that turned
//! the previous buffer content into the current one, together with the
//! before/after character counts so a consumer can detect that it missed an
//! intermediate change and resynchronize from scratch.

/// A single text edit in character offsets.
///
/// `start` is an offset in the document at the moment this edit applies; the
/// deleted range is implied by the character length of `deleted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact text removed (may be empty).
    pub deleted: String,
    /// Exact text inserted (may be empty).
    pub inserted: String,
}

impl TextDeltaEdit {
    /// Character length of the removed text.
    pub fn deleted_len(&self) -> usize {
        self.deleted.chars().count()
    }

    /// Character length of the inserted text.
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    /// Exclusive end offset of the removed range in the pre-edit document.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.deleted_len())
    }
}

/// The edits that turned one buffer revision into the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Character count before the edits.
    pub before_len: usize,
    /// Character count after the edits.
    pub after_len: usize,
    /// Ordered edits; applying them in order transforms "before" into "after".
    pub edits: Vec<TextDeltaEdit>,
}

impl TextDelta {
    /// A delta consisting of one edit.
    pub fn single(before_len: usize, after_len: usize, edit: TextDeltaEdit) -> Self {
        Self {
            before_len,
            after_len,
            edits: vec![edit],
        }
    }

    /// Returns `true` if the delta contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
