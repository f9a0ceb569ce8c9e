//! Layout data types
//!
//! These values flow between the layout policy, the shift resolver and the
//! position mapper. All of them are `Copy` and compared by value; a
//! transition always produces a new value instead of editing one in place.

use crate::types::{Orientation, PageLayout};

/// Everything the layout policy looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutInputs {
    pub orientation: Orientation,
    pub preference: PageLayout,
    /// Split wide pages while automatic mode shows single pages
    pub automatic_splits: bool,
    /// Number of pages in the current chapter
    pub page_count: usize,
}

/// Result of a layout policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutDirective {
    /// Two pages share a slot
    pub double_pages: bool,
    /// Wide pages are cut into two half slots
    pub split_pages: bool,
    /// Double/split mode follows the orientation
    pub auto_double_pages: bool,
}

impl LayoutDirective {
    pub fn single() -> Self {
        Self::default()
    }

    /// Slot layout this directive renders with
    pub fn slot_layout(&self, shift: ShiftState) -> SlotLayout {
        if self.double_pages {
            SlotLayout::Double {
                shift: shift.shift_double_page,
            }
        } else if self.split_pages {
            SlotLayout::Split
        } else {
            SlotLayout::Single
        }
    }
}

/// Parity bit deciding which pages pair up in double-page mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftState {
    pub shift_double_page: bool,
}

impl ShiftState {
    pub fn new(shift_double_page: bool) -> Self {
        Self { shift_double_page }
    }
}

/// How pages are grouped into slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLayout {
    /// One page per slot
    Single,
    /// Up to two pages per slot, paired according to `shift`
    Double { shift: bool },
    /// One page per slot, full pages cut in two
    Split,
}

/// One visually distinct reading position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A single page on its own
    Single(usize),
    /// Two pages; `leading` has the lower index
    Pair { leading: usize, trailing: usize },
    /// One half of a split full page; `first_half` is in reading order
    Half { index: usize, first_half: bool },
}

impl Slot {
    /// Lowest page index shown in this slot
    pub fn leading(&self) -> usize {
        match *self {
            Slot::Single(index) | Slot::Half { index, .. } => index,
            Slot::Pair { leading, .. } => leading,
        }
    }

    /// Second page of a pair, if any
    pub fn extra_page(&self) -> Option<usize> {
        match *self {
            Slot::Pair { trailing, .. } => Some(trailing),
            Slot::Single(_) | Slot::Half { .. } => None,
        }
    }

    pub fn contains(&self, page_index: usize) -> bool {
        match *self {
            Slot::Single(index) | Slot::Half { index, .. } => index == page_index,
            Slot::Pair { leading, trailing } => leading == page_index || trailing == page_index,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Slot::Pair { .. })
    }
}
