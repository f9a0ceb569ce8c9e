//! Slot building
//!
//! Groups a chapter's pages into slots for a given [`SlotLayout`].
//!
//! ## Double pages
//!
//! Every page has a position `shift + index + lone_pages_before(index)`:
//! plain pages take one position, full and isolated pages take two.
//!
//! - A plain page on an even position leads a pair
//! - A plain page on an odd position trails the page before it, or sits
//!   alone when that page could not lead
//! - A full or isolated page always sits alone
//!
//! With `shift = false` and pages `0..6` this gives `(0,1) (2,3) (4,5)`;
//! with `shift = true` it gives `(0) (1,2) (3,4) (5)`.

use crate::types::Page;

use super::{Slot, SlotLayout};

/// Group `pages` into slots.
pub fn build_slots(pages: &[Page], layout: SlotLayout) -> Vec<Slot> {
    match layout {
        SlotLayout::Single => pages.iter().map(|p| Slot::Single(p.index)).collect(),
        SlotLayout::Split => build_split_slots(pages),
        SlotLayout::Double { shift } => build_double_slots(pages, shift),
    }
}

fn build_split_slots(pages: &[Page]) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(pages.len());
    for page in pages {
        if page.full_page {
            slots.push(Slot::Half {
                index: page.index,
                first_half: true,
            });
            slots.push(Slot::Half {
                index: page.index,
                first_half: false,
            });
        } else {
            slots.push(Slot::Single(page.index));
        }
    }
    slots
}

fn build_double_slots(pages: &[Page], shift: bool) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(pages.len() / 2 + 1);
    let mut pending: Option<usize> = None;
    let mut position = usize::from(shift);

    for page in pages {
        if page.is_lone() {
            if let Some(leading) = pending.take() {
                slots.push(Slot::Single(leading));
            }
            slots.push(Slot::Single(page.index));
            position += 2;
            continue;
        }

        if position % 2 == 0 {
            if let Some(leading) = pending.replace(page.index) {
                slots.push(Slot::Single(leading));
            }
        } else if let Some(leading) = pending.take() {
            slots.push(Slot::Pair {
                leading,
                trailing: page.index,
            });
        } else {
            slots.push(Slot::Single(page.index));
        }
        position += 1;
    }

    if let Some(leading) = pending {
        slots.push(Slot::Single(leading));
    }
    slots
}

/// Index of the first slot showing `page_index`
pub fn slot_index_of(slots: &[Slot], page_index: usize) -> Option<usize> {
    slots.iter().position(|s| s.contains(page_index))
}

// =============================================================================
// Tests
// =============================================================================
