//! Style themes.
//!
//! A [`StyleTheme`] maps semantic [`StyleCategory`] buckets to the opaque
//! [`StyleId`]s a rendering host understands. Sessions resolve categories
//! through the theme at query time, so swapping the theme restyles a live
//! session without reparsing and without touching buffer, cursor, or scroll.

use std::collections::BTreeMap;

use sheet_editor_lang::StyleCategory;

/// Opaque style identifier a rendering host resolves to visuals.
pub type StyleId = u32;

/// A mapping from semantic categories to host style ids.
#[derive(Debug, Clone, Default)]
pub struct StyleTheme {
    styles: BTreeMap<StyleCategory, StyleId>,
}

impl StyleTheme {
    /// An empty theme (every category renders as plain text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: map `category` to `style`.
    pub fn with(mut self, category: StyleCategory, style: StyleId) -> Self {
        self.styles.insert(category, style);
        self
    }

    /// Map `category` to `style` on an existing theme.
    pub fn set(&mut self, category: StyleCategory, style: StyleId) {
        self.styles.insert(category, style);
    }

    /// The style id for `category`, if the theme maps it.
    pub fn style_for(&self, category: StyleCategory) -> Option<StyleId> {
        self.styles.get(&category).copied()
    }

    /// Number of mapped categories.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no category is mapped.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
