//! Reading position mapping across layout changes
//!
//! A slot index only means something for the layout that produced it. When
//! the layout changes, the page the reader was looking at is recovered from
//! the old slot table and looked up in the new one.

use crate::types::{Page, PairFocus};

use super::{SlotLayout, build_slots, slot_index_of};

/// Map `old_slot` from the `old` layout to a slot of the `new` layout.
///
/// When the old slot holds a pair, `focus` picks which of its pages the
/// reader is on. Out-of-range slots clamp to the last slot; an empty
/// chapter always maps to slot 0.
pub fn remap(
    old_slot: usize,
    old: SlotLayout,
    new: SlotLayout,
    pages: &[Page],
    focus: PairFocus,
) -> usize {
    let Some(page_index) = page_at_slot(old_slot, old, pages, focus) else {
        return 0;
    };
    let new_slots = build_slots(pages, new);
    slot_index_of(&new_slots, page_index).unwrap_or(0)
}

/// Page shown at `slot` in `layout`, resolving pairs with `focus`.
pub fn page_at_slot(
    slot: usize,
    layout: SlotLayout,
    pages: &[Page],
    focus: PairFocus,
) -> Option<usize> {
    let slots = build_slots(pages, layout);
    let slot = slots.get(slot).or(slots.last())?;
    Some(match (slot.extra_page(), focus) {
        (Some(trailing), PairFocus::Trailing) => trailing,
        _ => slot.leading(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChapterPages;

    #[test]
    fn test_empty_chapter_maps_to_zero() {
        let slot = remap(
            3,
            SlotLayout::Single,
            SlotLayout::Double { shift: false },
            &[],
            PairFocus::Leading,
        );
        assert_eq!(slot, 0);
    }

    #[test]
    fn test_out_of_range_clamps_to_last() {
        let chapter = ChapterPages::with_flags(1, 4, &[], &[]);
        let slot = remap(
            42,
            SlotLayout::Single,
            SlotLayout::Double { shift: false },
            chapter.pages(),
            PairFocus::Leading,
        );
        assert_eq!(slot, 1);
    }

    #[test]
    fn test_split_into_first_half() {
        let chapter = ChapterPages::with_flags(1, 4, &[1], &[]);
        let slot = remap(
            2,
            SlotLayout::Single,
            SlotLayout::Split,
            chapter.pages(),
            PairFocus::Leading,
        );
        // slots: 0, 1a, 1b, 2, 3
        assert_eq!(slot, 3);

        let back = remap(
            2,
            SlotLayout::Split,
            SlotLayout::Single,
            chapter.pages(),
            PairFocus::Leading,
        );
        assert_eq!(back, 1);
    }
}
