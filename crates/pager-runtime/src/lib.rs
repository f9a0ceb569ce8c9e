mod handle;
mod worker;

pub use handle::{ReaderHandle, RuntimeError};
pub use worker::worker_task;

// Re-export types from the layout crate
pub use pager_layout::{
    ChapterPages, LayoutDirective, LayoutState, Orientation, PageLayout, PairFocus,
    ReaderPreferences, ReadingDirection, SavedShift, ShiftState, ViewerSession,
};

/// Commands sent from the reader surface to the worker
#[derive(Debug, Clone)]
pub enum ReaderCommand {
    LoadChapter {
        chapter: ChapterPages,
        requested_page: usize,
        restore: Option<SavedShift>,
    },
    /// Consecutive queued rotations collapse to the most recent one
    OrientationChanged(Orientation),
    PreferencesChanged(ReaderPreferences),
    ToggleDoublePages,
    ToggleShift,
    /// Consecutive queued selections collapse to the most recent one
    SelectSlot {
        slot: usize,
        focus: PairFocus,
    },
    SaveState,
    Close,
}

/// Updates sent from the worker back to the reader surface
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderUpdate {
    LayoutChanged(LayoutSnapshot),
    StateSaved(Option<SavedShift>),
    Error { message: String },
    Closed,
}

/// What the reader surface needs to redraw after a layout change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub state: LayoutState,
    pub directive: LayoutDirective,
    pub shift: ShiftState,
    pub slot_count: usize,
    pub current_slot: usize,
    pub current_page: Option<usize>,
    pub label: Option<String>,
}

impl LayoutSnapshot {
    pub fn from_session(session: &ViewerSession) -> Self {
        Self {
            state: session.state(),
            directive: session.directive(),
            shift: session.shift(),
            slot_count: session.slots().len(),
            current_slot: session.current_slot(),
            current_page: session.current_page(),
            label: session.current_label(),
        }
    }
}
