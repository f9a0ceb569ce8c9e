use pager_layout::label::*;
use pager_layout::*;

#[test]
fn test_page_label_forms() {
    assert_eq!(page_label(&Slot::Single(0), false), "1");
    let pair = Slot::Pair {
        leading: 2,
        trailing: 3,
    };
    assert_eq!(page_label(&pair, false), "3-4");
    assert_eq!(page_label(&pair, true), "4-3");

    let first = Slot::Half {
        index: 4,
        first_half: true,
    };
    let second = Slot::Half {
        index: 4,
        first_half: false,
    };
    assert_eq!(page_label(&first, false), "5");
    assert_eq!(page_label(&second, false), "5*");
}

#[test]
fn test_seek_progress_reaches_end_on_final_pair() {
    let last = Slot::Pair {
        leading: 8,
        trailing: 9,
    };
    assert_eq!(seek_progress(&last, 9), 9);

    let middle = Slot::Pair {
        leading: 4,
        trailing: 5,
    };
    assert_eq!(seek_progress(&middle, 9), 4);
    assert_eq!(seek_progress(&Slot::Single(9), 9), 9);
}

#[test]
fn test_seek_label() {
    let chapter = ChapterPages::with_flags(1, 6, &[], &[]);
    let slots = build_slots(chapter.pages(), SlotLayout::Double { shift: false });
    assert_eq!(seek_label(0, &slots, false), "1-2");
    assert_eq!(seek_label(1, &slots, false), "2");
    assert_eq!(seek_label(2, &slots, true), "4-3");

    let single = build_slots(chapter.pages(), SlotLayout::Single);
    assert_eq!(seek_label(2, &single, false), "3");
}

#[test]
fn test_page_counter() {
    assert_eq!(page_counter("3-4", 20, true), "3-4/20");
    assert_eq!(page_counter("3-4", 20, false), "20/3-4");
}
