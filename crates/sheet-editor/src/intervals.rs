//! Derived highlight and fold state.
//!
//! Highlights are category-keyed, non-overlapping spans in character offsets,
//! kept sorted so viewport queries are a binary search. Fold regions are
//! line-based; replacing them (after a reparse) can preserve the user's
//! collapsed regions by identity of their line range.

use sheet_editor_lang::StyleCategory;

use crate::theme::StyleId;

/// A semantic highlight over `[start, end)` character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start character offset.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Semantic category of the span.
    pub category: StyleCategory,
}

impl HighlightSpan {
    /// Create a span over `[start, end)`.
    pub fn new(start: usize, end: usize, category: StyleCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Character length of the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for degenerate spans.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A highlight span resolved through a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Start character offset.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Host style id.
    pub style: StyleId,
}

/// The sorted, non-overlapping set of highlight spans for a document.
#[derive(Debug, Clone, Default)]
pub struct HighlightSet {
    spans: Vec<HighlightSpan>,
}

impl HighlightSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set.
    ///
    /// Spans are sorted by start offset; empty spans are dropped, and a span
    /// overlapping its predecessor is dropped too (producers emit
    /// non-overlapping spans, so this only defends against a buggy producer).
    pub fn replace(&mut self, mut spans: Vec<HighlightSpan>) {
        spans.retain(|s| !s.is_empty());
        spans.sort_by_key(|s| (s.start, s.end));
        let mut last_end = 0usize;
        spans.retain(|s| {
            if s.start < last_end {
                return false;
            }
            last_end = s.end;
            true
        });
        self.spans = spans;
    }

    /// Remove all spans.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// All spans, sorted by start offset.
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Spans overlapping `[start, end)`.
    pub fn spans_in_range(&self, start: usize, end: usize) -> &[HighlightSpan] {
        if start >= end {
            return &[];
        }
        let lo = self.spans.partition_point(|s| s.end <= start);
        let hi = self.spans.partition_point(|s| s.start < end);
        &self.spans[lo..hi.max(lo)]
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if the set holds no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// A collapsible line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// First line of the region.
    pub start_line: usize,
    /// Last line of the region (inclusive).
    pub end_line: usize,
    /// Whether the region is currently collapsed.
    pub is_collapsed: bool,
}

impl FoldRegion {
    /// A new, expanded region over an inclusive line range.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            is_collapsed: false,
        }
    }

    /// Returns `true` if `line` falls inside the region.
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Lines hidden while the region is collapsed (all but the first).
    pub fn hidden_line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

/// Owns the document's fold regions and their collapse state.
#[derive(Debug, Clone, Default)]
pub struct FoldingManager {
    regions: Vec<FoldRegion>,
}

impl FoldingManager {
    /// An empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(regions: &mut Vec<FoldRegion>) {
        regions.retain(|r| r.end_line > r.start_line);
        regions.sort_by_key(|r| (r.start_line, r.end_line));
        regions.dedup_by(|a, b| a.start_line == b.start_line && a.end_line == b.end_line);
    }

    /// Replace all regions with a freshly derived set.
    ///
    /// When `preserve_collapsed` is set, a new region whose line range matches
    /// a currently collapsed region stays collapsed: reparsing must not pop
    /// the user's folds open.
    pub fn replace_regions(&mut self, mut regions: Vec<FoldRegion>, preserve_collapsed: bool) {
        Self::normalize(&mut regions);
        if preserve_collapsed {
            for region in &mut regions {
                let was_collapsed = self.regions.iter().any(|old| {
                    old.is_collapsed
                        && old.start_line == region.start_line
                        && old.end_line == region.end_line
                });
                if was_collapsed {
                    region.is_collapsed = true;
                }
            }
        }
        self.regions = regions;
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// All regions, sorted by start line.
    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    /// The innermost region starting at `line`, if any.
    pub fn region_starting_at(&self, line: usize) -> Option<&FoldRegion> {
        self.regions
            .iter()
            .filter(|r| r.start_line == line)
            .next_back()
    }

    /// Toggle the region starting at `line`. Returns `false` if none starts
    /// there.
    pub fn toggle_at_line(&mut self, line: usize) -> bool {
        let Some(region) = self
            .regions
            .iter_mut()
            .filter(|r| r.start_line == line)
            .next_back()
        else {
            return false;
        };
        region.is_collapsed = !region.is_collapsed;
        true
    }

    /// Total lines hidden by collapsed regions.
    pub fn collapsed_line_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|r| r.is_collapsed)
            .map(FoldRegion::hidden_line_count)
            .sum()
    }
}
