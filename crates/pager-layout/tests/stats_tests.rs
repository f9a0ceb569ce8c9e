use pager_layout::*;

#[test]
fn test_stats_no_pages() {
    let chapter = ChapterPages::default();
    let result = calculate_statistics(&chapter, &[]);
    match result {
        Err(PagerError::NoPages) => {}
        _ => panic!("Expected NoPages error"),
    }
}

#[test]
fn test_stats_double_with_lone_pages() {
    let chapter = ChapterPages::with_flags(1, 9, &[2], &[6]);
    let slots = build_slots(chapter.pages(), SlotLayout::Double { shift: false });

    let stats = calculate_statistics(&chapter, &slots).unwrap();

    assert_eq!(stats.pages, 9);
    assert_eq!(stats.lone_pages, 2);
    // (0,1) [2] (3,4) [5] [6] [7] [8]
    assert_eq!(stats.slots, 7);
    assert_eq!(stats.paired_slots, 2);
    assert_eq!(stats.unpaired_pages, 3);
    assert_eq!(stats.half_slots, 0);
}

#[test]
fn test_stats_split() {
    let chapter = ChapterPages::with_flags(1, 4, &[1, 3], &[]);
    let slots = build_slots(chapter.pages(), SlotLayout::Split);

    let stats = calculate_statistics(&chapter, &slots).unwrap();

    assert_eq!(stats.slots, 6);
    assert_eq!(stats.half_slots, 4);
    assert_eq!(stats.paired_slots, 0);
    assert_eq!(stats.unpaired_pages, 2);
}
