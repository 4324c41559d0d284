#![warn(missing_docs)]
//! Headless editor-session kernel for runnable code sheets.
//!
//! # Overview
//!
//! `sheet-editor` owns the editing state behind one embedded source editor:
//! the buffer (rope-backed, LF-normalized), cursor/selection/scroll, and the
//! derived highlight and fold state a language integration keeps up to date.
//! It renders nothing; a host surface reads the state and draws it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  EditorHost (mount / unmount lifecycle)      │
//! ├──────────────────────────────────────────────┤
//! │  EditorSession (buffer, cursor, versioning)  │
//! ├──────────────────────────────────────────────┤
//! │  Derived state (HighlightSet, FoldingManager)│
//! ├──────────────────────────────────────────────┤
//! │  LineIndex / TextDelta (coordinates, edits)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Language awareness enters through the [`DocumentProcessor`] seam: an
//! integration crate (e.g. `sheet-editor-treesitter`) parses the buffer and
//! returns [`ProcessingEdit`]s, which the session applies to its derived
//! state. Highlights are keyed by semantic
//! [`StyleCategory`](sheet_editor_lang::StyleCategory) and resolved through a
//! [`StyleTheme`] at query time, so restyling a live session is free.
//!
//! # Quick start
//!
//! ```rust
//! use sheet_editor::{EditorHost, SessionConfig, SurfaceId};
//!
//! let mut host = EditorHost::new();
//! let handle = host.mount(
//!     SurfaceId::new(1),
//!     "System.out.println(\"hi\");\n",
//!     SessionConfig::default(),
//! );
//!
//! assert_eq!(host.live_session_count(), 1);
//! let session = host.session_mut(handle).unwrap();
//! session.edit(0..0, "// a sheet snippet\n").unwrap();
//!
//! host.unmount(handle);
//! host.unmount(handle); // idempotent
//! assert_eq!(host.live_session_count(), 0);
//! ```

pub mod delta;
pub mod host;
pub mod intervals;
pub mod line_ending;
pub mod line_index;
pub mod processing;
pub mod session;
pub mod theme;

pub use delta::{TextDelta, TextDeltaEdit};
pub use host::{EditorHost, HostError, SessionHandle, SurfaceId};
pub use intervals::{FoldRegion, FoldingManager, HighlightSet, HighlightSpan, StyledSpan};
pub use line_ending::LineEnding;
pub use line_index::LineIndex;
pub use processing::{DocumentProcessor, ProcessingEdit};
pub use session::{
    EditorSession, Position, SessionConfig, SessionError, SessionOptions, StateChange,
    StateChangeType,
};
pub use theme::{StyleId, StyleTheme};
