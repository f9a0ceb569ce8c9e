use pager_layout::*;

fn plain(count: usize) -> ChapterPages {
    ChapterPages::with_flags(1, count, &[], &[])
}

fn inputs(orientation: Orientation, preference: PageLayout, page_count: usize) -> LayoutInputs {
    LayoutInputs {
        orientation,
        preference,
        automatic_splits: false,
        page_count,
    }
}

// =============================================================================
// Chapter pages
// =============================================================================

#[test]
fn test_chapter_pages_rejects_gaps() {
    let result = ChapterPages::new(1, vec![Page::new(0), Page::new(2)]);
    match result {
        Err(PagerError::InvalidPages(msg)) => assert!(msg.contains("index 2")),
        _ => panic!("Expected InvalidPages error"),
    }

    let result = ChapterPages::new(1, vec![Page::new(1)]);
    assert!(result.is_err());

    let chapter = ChapterPages::new(1, vec![Page::new(0), Page::full(1), Page::isolated(2)]).unwrap();
    assert_eq!(chapter.len(), 3);
    assert!(chapter.get(1).unwrap().is_lone());
    assert!(chapter.get(2).unwrap().is_lone());
    assert!(!chapter.get(0).unwrap().is_lone());
}

#[test]
fn test_page_layout_from_preference() {
    assert_eq!(PageLayout::from_preference(0), PageLayout::Single);
    assert_eq!(PageLayout::from_preference(1), PageLayout::Double);
    assert_eq!(PageLayout::from_preference(2), PageLayout::Automatic);
    assert_eq!(PageLayout::from_preference(3), PageLayout::Split);
    assert_eq!(PageLayout::from_preference(42), PageLayout::Single);
    assert_eq!(PageLayout::from_preference(-1), PageLayout::Single);
}

// =============================================================================
// Layout policy
// =============================================================================

#[test]
fn test_policy_is_deterministic() {
    let input = LayoutInputs {
        orientation: Orientation::Landscape,
        preference: PageLayout::Automatic,
        automatic_splits: true,
        page_count: 20,
    };
    assert_eq!(evaluate(&input), evaluate(&input));
}

#[test]
fn test_short_chapter_never_doubles() {
    for preference in [PageLayout::Automatic, PageLayout::Double] {
        for count in [0, 1] {
            let directive = evaluate(&inputs(Orientation::Landscape, preference, count));
            assert!(!directive.double_pages, "{:?} with {} pages", preference, count);
        }
    }
    let directive = evaluate(&inputs(Orientation::Landscape, PageLayout::Automatic, 2));
    assert!(directive.double_pages);
}

#[test]
fn test_automatic_splits_only_when_not_double() {
    let mut input = inputs(Orientation::Portrait, PageLayout::Automatic, 10);
    assert!(!evaluate(&input).split_pages);

    input.automatic_splits = true;
    assert!(evaluate(&input).split_pages);

    input.orientation = Orientation::Landscape;
    let directive = evaluate(&input);
    assert!(directive.double_pages);
    assert!(!directive.split_pages);
}

// =============================================================================
// Shift resolver
// =============================================================================

#[test]
fn test_shift_toggle_is_involution() {
    for bit in [false, true] {
        let state = ShiftState::new(bit);
        assert_eq!(toggle_shift(toggle_shift(state)), state);
        assert_ne!(toggle_shift(state), state);
    }
}

#[test]
fn test_initial_shift_counts_full_pages() {
    // pages [0, 1, 2(full), 3, 4]: one full page before index 4, (4 + 1) is odd
    let chapter = ChapterPages::with_flags(1, 5, &[2], &[]);
    assert!(compute_initial_shift(4, chapter.pages()));
    assert!(!compute_initial_shift(3, chapter.pages()));
    assert!(!compute_initial_shift(2, chapter.pages()));
    assert!(!compute_initial_shift(0, chapter.pages()));
}

#[test]
fn test_initial_shift_counts_isolated_pages() {
    let chapter = ChapterPages::with_flags(1, 6, &[], &[0]);
    assert!(!compute_initial_shift(1, chapter.pages()));
    assert!(compute_initial_shift(2, chapter.pages()));
}

#[test]
fn test_transition_to_double_makes_seek_page_lead() {
    let chapter = plain(10);
    let shift = on_layout_transition(ShiftState::default(), true, 5, chapter.pages());
    let slots = build_slots(chapter.pages(), SlotLayout::Double {
        shift: shift.shift_double_page,
    });
    let slot = slot_index_of(&slots, 5).unwrap();
    assert_eq!(slots[slot].leading(), 5);
    assert_eq!(slots[slot].extra_page(), Some(6));
}

#[test]
fn test_transition_anchor_leads_for_every_page() {
    let chapter = ChapterPages::with_flags(7, 14, &[3, 8], &[11]);
    for seek in 0..chapter.len() {
        let shift = on_layout_transition(ShiftState::default(), true, seek, chapter.pages());
        let slots = build_slots(chapter.pages(), SlotLayout::Double {
            shift: shift.shift_double_page,
        });
        let slot = slots[slot_index_of(&slots, seek).unwrap()];
        assert_eq!(slot.leading(), seek, "seek {}", seek);
    }
}

#[test]
fn test_transition_to_single_keeps_shift() {
    let chapter = plain(10);
    let state = ShiftState::new(true);
    assert_eq!(on_layout_transition(state, false, 4, chapter.pages()), state);
}

#[test]
fn test_lone_pages_always_alone() {
    let chapter = ChapterPages::with_flags(1, 9, &[1, 4], &[6]);
    for shift in [false, true] {
        let slots = build_slots(chapter.pages(), SlotLayout::Double { shift });
        for lone in [1, 4, 6] {
            let slot = slots[slot_index_of(&slots, lone).unwrap()];
            assert_eq!(slot, Slot::Single(lone));
        }
        let shown: usize = slots
            .iter()
            .map(|s| if s.is_pair() { 2 } else { 1 })
            .sum();
        assert_eq!(shown, chapter.len());
    }
}

#[test]
fn test_restore_applies_when_page_present() {
    let chapter = ChapterPages::with_flags(12, 10, &[], &[]);
    let saved = SavedShift {
        shift_double_page: true,
        page_index: Some(3),
        chapter_id: Some(12),
    };
    let outcome = restore(&saved, &chapter, 4);
    assert!(outcome.applied);
    assert!(outcome.shift.shift_double_page);
}

#[test]
fn test_restore_dropped_when_page_missing() {
    let chapter = ChapterPages::with_flags(12, 4, &[], &[]);
    let saved = SavedShift {
        shift_double_page: true,
        page_index: Some(9),
        chapter_id: Some(12),
    };
    let outcome = restore(&saved, &chapter, 2);
    assert!(!outcome.applied);
    assert_eq!(outcome.shift, ShiftState::new(false));

    let other_chapter = SavedShift {
        chapter_id: Some(99),
        page_index: Some(1),
        ..saved
    };
    let outcome = restore(&other_chapter, &chapter, 1);
    assert!(!outcome.applied);
    assert_eq!(outcome.shift, ShiftState::new(true));
}

#[test]
fn test_restore_without_page_recomputes() {
    let chapter = ChapterPages::with_flags(12, 8, &[0], &[]);
    let saved = SavedShift {
        shift_double_page: true,
        page_index: None,
        chapter_id: None,
    };
    // index 2 plus one full page before it is odd
    let outcome = restore(&saved, &chapter, 2);
    assert!(!outcome.applied);
    assert!(outcome.shift.shift_double_page);
}

// =============================================================================
// Position mapper
// =============================================================================

#[test]
fn test_single_to_double_halves_index() {
    let chapter = plain(10);
    for i in 0..10 {
        let slot = remap(
            i,
            SlotLayout::Single,
            SlotLayout::Double { shift: false },
            chapter.pages(),
            PairFocus::Leading,
        );
        assert_eq!(slot, i / 2);
    }
}

#[test]
fn test_single_to_double_with_full_page() {
    // full page at an even index: floor((i + lone_before) / 2)
    let chapter = ChapterPages::with_flags(1, 8, &[2], &[]);
    for i in 0..8 {
        let corrected = i + lone_pages_before(chapter.pages(), i);
        let slot = remap(
            i,
            SlotLayout::Single,
            SlotLayout::Double { shift: false },
            chapter.pages(),
            PairFocus::Leading,
        );
        assert_eq!(slot, corrected / 2, "page {}", i);
    }
}

#[test]
fn test_double_to_single_uses_focus() {
    let chapter = plain(10);
    let double = SlotLayout::Double { shift: false };
    let leading = remap(2, double, SlotLayout::Single, chapter.pages(), PairFocus::Leading);
    let trailing = remap(2, double, SlotLayout::Single, chapter.pages(), PairFocus::Trailing);
    assert_eq!(leading, 4);
    assert_eq!(trailing, 5);
}

#[test]
fn test_round_trip_stays_within_one_page() {
    let chapter = plain(10);
    for shift in [false, true] {
        let double = SlotLayout::Double { shift };
        for i in 0..10 {
            for focus in [PairFocus::Leading, PairFocus::Trailing] {
                let coarse = remap(i, SlotLayout::Single, double, chapter.pages(), focus);
                let back = remap(coarse, double, SlotLayout::Single, chapter.pages(), focus);
                assert!(back.abs_diff(i) <= 1, "page {} came back as {}", i, back);
            }
        }
    }
}

#[test]
fn test_directive_slot_layout() {
    let shift = ShiftState::new(true);
    let double = LayoutDirective {
        double_pages: true,
        split_pages: false,
        auto_double_pages: true,
    };
    assert_eq!(double.slot_layout(shift), SlotLayout::Double { shift: true });

    let split = LayoutDirective {
        double_pages: false,
        split_pages: true,
        auto_double_pages: true,
    };
    assert_eq!(split.slot_layout(shift), SlotLayout::Split);
    assert_eq!(LayoutDirective::single().slot_layout(shift), SlotLayout::Single);
}
