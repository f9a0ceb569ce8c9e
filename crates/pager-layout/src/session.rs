//! Chapter-view session
//!
//! A [`ViewerSession`] is an immutable value. Every trigger goes through
//! [`ViewerSession::reduce`], which returns the next session:
//!
//! 1. Re-evaluate the layout policy
//! 2. If the directive changed, resolve the shift for the new layout
//! 3. Map the reading position onto the new slots
//!
//! ```text
//! Unloaded ──ChapterLoaded──▶ Single ⇄ Double
//!                                        │ (automatic mode only)
//!                                        ▼
//!                                      Split
//! ```

use crate::layout::*;
use crate::options::ReaderPreferences;
use crate::types::*;

/// Layout the session is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    #[default]
    Unloaded,
    Single,
    Double,
    Split,
}

impl LayoutState {
    fn from_directive(directive: &LayoutDirective) -> Self {
        if directive.double_pages {
            LayoutState::Double
        } else if directive.split_pages {
            LayoutState::Split
        } else {
            LayoutState::Single
        }
    }
}

/// Named triggers that drive the session
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// A chapter's pages arrived; replaces any previous chapter
    ChapterLoaded {
        chapter: ChapterPages,
        requested_page: usize,
        restore: Option<SavedShift>,
    },
    OrientationChanged(Orientation),
    PreferencesChanged(ReaderPreferences),
    /// User flipped double pages by hand
    ToggleDoublePages,
    /// User asked to shift the pairing by one page
    ToggleShift,
    PageSelected {
        slot: usize,
        focus: PairFocus,
    },
    SessionEnded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerSession {
    preferences: ReaderPreferences,
    orientation: Orientation,
    chapter: Option<ChapterPages>,
    /// Double-page value the user picked by hand, until orientation or
    /// preferences change
    double_override: Option<bool>,
    directive: LayoutDirective,
    shift: ShiftState,
    state: LayoutState,
    slots: Vec<Slot>,
    current_slot: usize,
    focus: PairFocus,
}

impl ViewerSession {
    pub fn new(preferences: ReaderPreferences, orientation: Orientation) -> Self {
        let mut session = Self {
            preferences,
            orientation,
            ..Default::default()
        };
        session.directive = session.effective_directive();
        session
    }

    /// Apply `event` and return the resulting session.
    pub fn reduce(&self, event: ViewerEvent) -> ViewerSession {
        let mut next = self.clone();
        match event {
            ViewerEvent::ChapterLoaded {
                chapter,
                requested_page,
                restore,
            } => next.load_chapter(chapter, requested_page, restore),
            ViewerEvent::OrientationChanged(orientation) => {
                if orientation != next.orientation {
                    next.orientation = orientation;
                    next.double_override = None;
                }
                let directive = next.effective_directive();
                next.relayout(directive)
            }
            ViewerEvent::PreferencesChanged(preferences) => {
                // Label-only preferences keep a manual double-page choice
                if preferences.page_layout != next.preferences.page_layout
                    || preferences.automatic_splits != next.preferences.automatic_splits
                {
                    next.double_override = None;
                }
                next.preferences = preferences;
                let directive = next.effective_directive();
                next.relayout(directive)
            }
            ViewerEvent::ToggleDoublePages => {
                next.double_override = Some(!next.directive.double_pages);
                let directive = next.effective_directive();
                next.relayout(directive)
            }
            ViewerEvent::ToggleShift => next.shift_pages(),
            ViewerEvent::PageSelected { slot, focus } => {
                next.current_slot = slot.min(next.slots.len().saturating_sub(1));
                next.focus = focus;
                next
            }
            ViewerEvent::SessionEnded => {
                log::debug!("Session ended, discarding layout state");
                ViewerSession::new(self.preferences, self.orientation)
            }
        }
    }

    fn inputs(&self) -> LayoutInputs {
        LayoutInputs {
            orientation: self.orientation,
            preference: self.preferences.page_layout,
            automatic_splits: self.preferences.automatic_splits,
            page_count: self.chapter.as_ref().map_or(0, ChapterPages::len),
        }
    }

    /// Policy result with the user's manual double-page choice applied
    fn effective_directive(&self) -> LayoutDirective {
        let inputs = self.inputs();
        let evaluated = evaluate(&inputs);
        match self.double_override {
            Some(double_pages) if double_pages != evaluated.double_pages => {
                toggle_double_pages(&evaluated, inputs.automatic_splits, inputs.page_count)
            }
            _ => evaluated,
        }
    }

    fn load_chapter(
        mut self,
        chapter: ChapterPages,
        requested_page: usize,
        saved: Option<SavedShift>,
    ) -> Self {
        let requested = requested_page.min(chapter.last_index().unwrap_or(0));
        self.shift = match saved {
            Some(saved) => {
                let outcome = restore(&saved, &chapter, requested);
                log::debug!(
                    "Restoring shift for chapter {}: applied = {}",
                    chapter.chapter_id,
                    outcome.applied
                );
                outcome.shift
            }
            None => ShiftState::new(compute_initial_shift(requested, chapter.pages())),
        };
        self.chapter = Some(chapter);
        self.directive = self.effective_directive();
        self.state = LayoutState::from_directive(&self.directive);
        self.rebuild_slots();
        self.current_slot = slot_index_of(&self.slots, requested).unwrap_or(0);
        self.focus = PairFocus::Leading;
        log::debug!(
            "Chapter loaded in {:?} layout, {} slots, shift = {}",
            self.state,
            self.slots.len(),
            self.shift.shift_double_page
        );
        self
    }

    fn relayout(mut self, directive: LayoutDirective) -> Self {
        if directive == self.directive {
            return self;
        }
        let Some(chapter) = self.chapter.as_ref() else {
            self.directive = directive;
            return self;
        };

        let pages = chapter.pages();
        let old_layout = self.directive.slot_layout(self.shift);
        let seek = page_at_slot(self.current_slot, old_layout, pages, self.focus).unwrap_or(0);
        let to_double = !self.directive.double_pages && directive.double_pages;
        self.shift = on_layout_transition(self.shift, to_double, seek, pages);

        let new_layout = directive.slot_layout(self.shift);
        self.current_slot = remap(self.current_slot, old_layout, new_layout, pages, self.focus);
        self.directive = directive;

        let state = LayoutState::from_directive(&directive);
        log::debug!("Layout {:?} -> {:?} at page {}", self.state, state, seek);
        self.state = state;
        self.rebuild_slots();
        self.focus = focus_on(&self.slots, self.current_slot, seek);
        self
    }

    fn shift_pages(mut self) -> Self {
        let old_layout = self.directive.slot_layout(self.shift);
        self.shift = toggle_shift(self.shift);
        let Some(chapter) = self.chapter.as_ref() else {
            return self;
        };
        let pages = chapter.pages();
        let seek = page_at_slot(self.current_slot, old_layout, pages, self.focus).unwrap_or(0);
        let new_layout = self.directive.slot_layout(self.shift);
        self.current_slot = remap(self.current_slot, old_layout, new_layout, pages, self.focus);
        self.rebuild_slots();
        self.focus = focus_on(&self.slots, self.current_slot, seek);
        self
    }

    fn rebuild_slots(&mut self) {
        self.slots = match &self.chapter {
            Some(chapter) => build_slots(chapter.pages(), self.directive.slot_layout(self.shift)),
            None => Vec::new(),
        };
    }

    pub fn preferences(&self) -> &ReaderPreferences {
        &self.preferences
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn chapter(&self) -> Option<&ChapterPages> {
        self.chapter.as_ref()
    }

    pub fn directive(&self) -> LayoutDirective {
        self.directive
    }

    pub fn shift(&self) -> ShiftState {
        self.shift
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    pub fn focus(&self) -> PairFocus {
        self.focus
    }

    /// Page the reader is on, resolving pairs with the tracked focus
    pub fn current_page(&self) -> Option<usize> {
        let slot = self.slots.get(self.current_slot)?;
        Some(match (slot.extra_page(), self.focus) {
            (Some(trailing), PairFocus::Trailing) => trailing,
            _ => slot.leading(),
        })
    }

    /// Label of the slot on screen, e.g. `"3-4"`
    pub fn current_label(&self) -> Option<String> {
        let slot = self.slots.get(self.current_slot)?;
        Some(crate::label::page_label(
            slot,
            self.preferences.reversed_pairs(),
        ))
    }

    /// Restore triple to persist on teardown
    pub fn save_state(&self) -> Option<SavedShift> {
        let chapter = self.chapter.as_ref()?;
        let leading = self.slots.get(self.current_slot).map(Slot::leading);
        Some(SavedShift::capture(
            self.shift,
            &self.directive,
            leading,
            chapter.chapter_id,
        ))
    }
}

/// Focus that keeps `page` on screen within the slot at `slot`
fn focus_on(slots: &[Slot], slot: usize, page: usize) -> PairFocus {
    match slots.get(slot).and_then(Slot::extra_page) {
        Some(trailing) if trailing == page => PairFocus::Trailing,
        _ => PairFocus::Leading,
    }
}
