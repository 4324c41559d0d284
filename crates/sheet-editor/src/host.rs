//! Session mount lifecycle.
//!
//! An [`EditorHost`] tracks which rendering surface currently owns a live
//! [`EditorSession`]. Mounting creates the session and hands back a
//! [`SessionHandle`]; unmounting destroys the session and releases its buffer.
//! Handles carry a mount serial, so an unmount arriving late (the host
//! surface re-mounted in between) quietly does nothing instead of tearing
//! down the newer session. This makes mount-effect churn (mount, unmount,
//! mount again in quick succession) leak-free and safe.

use std::collections::HashMap;
use std::fmt;

use crate::session::{EditorSession, SessionConfig};
use crate::theme::StyleTheme;

/// Identity of a rendering surface (one visible editor slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Wrap a raw surface identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Handle to one particular mount of a session.
///
/// A handle is invalidated by unmounting; handles from a previous mount of
/// the same surface never alias the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    surface: SurfaceId,
    serial: u64,
}

impl SessionHandle {
    /// The surface this handle was minted for.
    pub fn surface(self) -> SurfaceId {
        self.surface
    }
}

/// Errors from handle-based host operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// The handle's session is no longer mounted.
    StaleHandle(SessionHandle),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleHandle(handle) => {
                write!(
                    f,
                    "no live session for surface {} (stale handle)",
                    handle.surface.get()
                )
            }
        }
    }
}

impl std::error::Error for HostError {}

struct Mounted {
    serial: u64,
    session: EditorSession,
}

/// Registry of live editor sessions, keyed by surface.
#[derive(Default)]
pub struct EditorHost {
    mounted: HashMap<SurfaceId, Mounted>,
    next_serial: u64,
}

impl EditorHost {
    /// An empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new session on `surface` with the given initial content.
    ///
    /// # Panics
    ///
    /// Panics if `surface` already has a live session. That is a programming
    /// error in the caller's lifecycle wiring, not a recoverable condition:
    /// unmount the existing session first.
    pub fn mount(
        &mut self,
        surface: SurfaceId,
        initial_text: &str,
        config: SessionConfig,
    ) -> SessionHandle {
        assert!(
            !self.mounted.contains_key(&surface),
            "surface {} already has a live editor session; unmount it first",
            surface.get()
        );
        self.next_serial += 1;
        let serial = self.next_serial;
        tracing::debug!(surface = surface.get(), serial, "mounting editor session");
        self.mounted.insert(
            surface,
            Mounted {
                serial,
                session: EditorSession::new(initial_text, config),
            },
        );
        SessionHandle { surface, serial }
    }

    /// Unmount the session behind `handle`, releasing its buffer.
    ///
    /// Idempotent: a handle that is already unmounted, or that predates a
    /// newer mount on the same surface, is a no-op.
    pub fn unmount(&mut self, handle: SessionHandle) {
        let live = self
            .mounted
            .get(&handle.surface)
            .is_some_and(|m| m.serial == handle.serial);
        if live {
            tracing::debug!(
                surface = handle.surface.get(),
                serial = handle.serial,
                "unmounting editor session"
            );
            self.mounted.remove(&handle.surface);
        }
    }

    /// Returns `true` while `handle`'s session is live.
    pub fn is_mounted(&self, handle: SessionHandle) -> bool {
        self.mounted
            .get(&handle.surface)
            .is_some_and(|m| m.serial == handle.serial)
    }

    /// Number of live sessions (and therefore live buffers).
    pub fn live_session_count(&self) -> usize {
        self.mounted.len()
    }

    /// Borrow the session behind `handle`.
    pub fn session(&self, handle: SessionHandle) -> Option<&EditorSession> {
        self.mounted
            .get(&handle.surface)
            .filter(|m| m.serial == handle.serial)
            .map(|m| &m.session)
    }

    /// Mutably borrow the session behind `handle`.
    pub fn session_mut(&mut self, handle: SessionHandle) -> Option<&mut EditorSession> {
        self.mounted
            .get_mut(&handle.surface)
            .filter(|m| m.serial == handle.serial)
            .map(|m| &mut m.session)
    }

    /// Replace the full content of the session behind `handle`.
    pub fn replace_content(&mut self, handle: SessionHandle, text: &str) -> Result<(), HostError> {
        let session = self
            .session_mut(handle)
            .ok_or(HostError::StaleHandle(handle))?;
        session.replace_content(text);
        Ok(())
    }

    /// Current content of the session behind `handle`.
    pub fn current_content(&self, handle: SessionHandle) -> Result<String, HostError> {
        self.session(handle)
            .map(|s| s.text())
            .ok_or(HostError::StaleHandle(handle))
    }

    /// Swap the style theme of the session behind `handle` without
    /// remounting; buffer, cursor, and scroll state are untouched.
    pub fn restyle(&mut self, handle: SessionHandle, theme: StyleTheme) -> Result<(), HostError> {
        let session = self
            .session_mut(handle)
            .ok_or(HostError::StaleHandle(handle))?;
        session.set_theme(theme);
        Ok(())
    }
}

impl fmt::Debug for EditorHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorHost")
            .field("live_sessions", &self.mounted.len())
            .finish_non_exhaustive()
    }
}
