//! Document processing interface.
//!
//! The seam between the session kernel and whatever derives state from the
//! buffer (an incremental parser, a lint pass). A processor reads the session
//! and returns [`ProcessingEdit`]s; the host applies them back via
//! [`EditorSession::apply_processor`](crate::EditorSession::apply_processor).
//! Processors never mutate the session directly.

use crate::intervals::{FoldRegion, HighlightSpan};
use crate::session::EditorSession;

/// A change to derived session state.
#[derive(Debug, Clone)]
pub enum ProcessingEdit {
    /// Replace the full highlight span set (char offsets, half-open).
    ReplaceHighlights {
        /// The complete new span set.
        spans: Vec<HighlightSpan>,
    },
    /// Drop all highlight spans.
    ClearHighlights,
    /// Replace the full fold region set.
    ReplaceFoldRegions {
        /// The complete new region set.
        regions: Vec<FoldRegion>,
        /// Keep regions collapsed when they survive the replacement.
        preserve_collapsed: bool,
    },
    /// Drop all fold regions.
    ClearFoldRegions,
}

/// Derives state updates from a session's buffer.
pub trait DocumentProcessor {
    /// Error type returned by [`DocumentProcessor::process`].
    type Error;

    /// Compute the edits that bring derived state up to date with the
    /// session's current content. Returning an empty vector means nothing
    /// changed.
    fn process(&mut self, session: &EditorSession) -> Result<Vec<ProcessingEdit>, Self::Error>;
}
