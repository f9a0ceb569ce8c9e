//! Page labels for the reading surface
//!
//! Labels use 1-based page numbers. A pair reads `"3-4"`, or `"4-3"` when
//! pairs are reversed (right-to-left reading XOR inverted double pages). The
//! second half of a split page is marked with `*`.

use crate::layout::Slot;

/// Label for the slot currently on screen
pub fn page_label(slot: &Slot, reversed: bool) -> String {
    match *slot {
        Slot::Single(index) => (index + 1).to_string(),
        Slot::Pair { leading, trailing } => pair_label(leading + 1, trailing + 1, reversed),
        Slot::Half { index, first_half } => {
            if first_half {
                (index + 1).to_string()
            } else {
                format!("{}*", index + 1)
            }
        }
    }
}

fn pair_label(first: usize, second: usize, reversed: bool) -> String {
    if reversed {
        format!("{}-{}", second, first)
    } else {
        format!("{}-{}", first, second)
    }
}

/// Seek bar value for the slot on screen.
///
/// A pair counts as its trailing page only when that is the chapter's last
/// page, so the bar reaches the end on a final spread.
pub fn seek_progress(slot: &Slot, last_index: usize) -> usize {
    let leading = slot.leading();
    let progress = leading + usize::from(slot.is_pair());
    if progress == last_index {
        progress
    } else {
        leading
    }
}

/// Label shown while dragging the seek bar to page index `value`
pub fn seek_label(value: usize, slots: &[Slot], reversed: bool) -> String {
    let page_number = value + 1;
    let leads_pair = slots
        .iter()
        .any(|s| s.is_pair() && s.leading() == value);
    if leads_pair {
        pair_label(page_number, page_number + 1, reversed)
    } else {
        page_number.to_string()
    }
}

/// `"current/total"`, flipped for right-to-left interfaces
pub fn page_counter(current: &str, total: usize, ltr_ui: bool) -> String {
    if ltr_ui {
        format!("{}/{}", current, total)
    } else {
        format!("{}/{}", total, current)
    }
}
