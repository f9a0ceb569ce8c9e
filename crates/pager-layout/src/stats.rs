use crate::layout::Slot;
use crate::types::*;

/// Summary of how a chapter is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStatistics {
    /// Pages in the chapter
    pub pages: usize,
    /// Reading positions produced by the layout
    pub slots: usize,
    /// Slots holding two pages
    pub paired_slots: usize,
    /// Full or isolated pages
    pub lone_pages: usize,
    /// Plain pages that ended up without a partner
    pub unpaired_pages: usize,
    /// Slots holding half a split page
    pub half_slots: usize,
}

/// Calculate statistics for a chapter laid out as `slots`
pub fn calculate_statistics(chapter: &ChapterPages, slots: &[Slot]) -> Result<LayoutStatistics> {
    if chapter.is_empty() {
        return Err(PagerError::NoPages);
    }

    let lone_pages = chapter.pages().iter().filter(|p| p.is_lone()).count();
    let mut paired_slots = 0;
    let mut half_slots = 0;
    let mut unpaired_pages = 0;

    for slot in slots {
        match *slot {
            Slot::Pair { .. } => paired_slots += 1,
            Slot::Half { .. } => half_slots += 1,
            Slot::Single(index) => {
                if chapter.get(index).is_some_and(|p| !p.is_lone()) {
                    unpaired_pages += 1;
                }
            }
        }
    }

    Ok(LayoutStatistics {
        pages: chapter.len(),
        slots: slots.len(),
        paired_slots,
        lone_pages,
        unpaired_pages,
        half_slots,
    })
}
