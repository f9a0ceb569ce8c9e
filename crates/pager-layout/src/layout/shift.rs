//! Double-page shift resolution
//!
//! The shift bit decides whether pairing starts on an even or an odd page.
//! Full and isolated pages sit alone, so each one pushes the pairing of the
//! pages after it by one position; the parity formula adds their count back
//! in before taking the remainder.

use crate::types::{ChapterPages, Page};

use super::{LayoutDirective, ShiftState};

/// Number of full or isolated pages strictly before `index`
pub fn lone_pages_before(pages: &[Page], index: usize) -> usize {
    pages.iter().take(index).filter(|p| p.is_lone()).count()
}

/// Shift that makes the page at `current_index` lead its pair.
pub fn compute_initial_shift(current_index: usize, pages: &[Page]) -> bool {
    (current_index + lone_pages_before(pages, current_index)) % 2 != 0
}

/// Flip the shift, e.g. when a spread shows up split across two slots.
pub fn toggle_shift(state: ShiftState) -> ShiftState {
    ShiftState::new(!state.shift_double_page)
}

/// Shift after a layout change.
///
/// Going from single to double anchors pairing on `seek` so the page on
/// screen becomes the leading page. Going back to single keeps the bit; it
/// only matters again once double pages return.
pub fn on_layout_transition(
    current: ShiftState,
    from_single_to_double: bool,
    seek: usize,
    pages: &[Page],
) -> ShiftState {
    if from_single_to_double {
        ShiftState::new(compute_initial_shift(seek, pages))
    } else {
        current
    }
}

/// Shift state persisted across a process restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedShift {
    pub shift_double_page: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_index: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapter_id: Option<u64>,
}

impl SavedShift {
    /// Capture the shift for saving. The page is only recorded while a shift
    /// is actually in effect.
    pub fn capture(
        shift: ShiftState,
        directive: &LayoutDirective,
        shifted_page: Option<usize>,
        chapter_id: u64,
    ) -> Self {
        let anchored = shift.shift_double_page && directive.double_pages;
        Self {
            shift_double_page: shift.shift_double_page,
            page_index: shifted_page.filter(|_| anchored),
            chapter_id: anchored.then_some(chapter_id),
        }
    }
}

/// Result of applying a [`SavedShift`] to a freshly loaded chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub shift: ShiftState,
    /// The saved page was found and its shift re-applied
    pub applied: bool,
}

/// Re-apply a saved shift.
///
/// When the saved page still exists in `chapter` its shift is kept; otherwise
/// the restore is dropped and the shift is recomputed at `requested_page`.
pub fn restore(saved: &SavedShift, chapter: &ChapterPages, requested_page: usize) -> RestoreOutcome {
    if let (Some(page_index), Some(chapter_id)) = (saved.page_index, saved.chapter_id) {
        if chapter_id == chapter.chapter_id && chapter.get(page_index).is_some() {
            return RestoreOutcome {
                shift: ShiftState::new(saved.shift_double_page),
                applied: true,
            };
        }
        log::debug!(
            "Saved shift for page {} of chapter {} no longer present, recomputing",
            page_index,
            chapter_id
        );
    }
    RestoreOutcome {
        shift: ShiftState::new(compute_initial_shift(requested_page, chapter.pages())),
        applied: false,
    }
}

// =============================================================================
// Tests
// =============================================================================
