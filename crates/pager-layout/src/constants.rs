//! Shared constants for page layout
//!
//! Stored codes and preference values live here so that the persisted
//! formats stay in one place.

// =============================================================================
// Page Layout Preference
// =============================================================================

/// Stored value for [`crate::PageLayout::Single`]
pub const PAGE_LAYOUT_SINGLE: i32 = 0;

/// Stored value for [`crate::PageLayout::Double`]
pub const PAGE_LAYOUT_DOUBLE: i32 = 1;

/// Stored value for [`crate::PageLayout::Automatic`]
pub const PAGE_LAYOUT_AUTOMATIC: i32 = 2;

/// Stored value for [`crate::PageLayout::Split`]
pub const PAGE_LAYOUT_SPLIT: i32 = 3;

// =============================================================================
// Category Sort Codes
// =============================================================================

/// Code for manual drag-and-drop ordering. Carries no direction.
pub const DRAG_AND_DROP_CODE: char = 'D';

/// First criterion code; ascending codes are an even distance from it.
pub const SORT_CODE_BASE: char = 'a';

/// Number of sort criteria (each has an ascending and a descending code)
pub const SORT_CRITERIA_COUNT: u8 = 7;

// =============================================================================
// Double Pages
// =============================================================================

/// Minimum number of pages needed before two can share a slot
pub const MIN_PAGES_FOR_DOUBLE: usize = 2;

// =============================================================================
// Categories
// =============================================================================

/// Id and order of the synthetic "All" category
pub const ALL_CATEGORY_ID: i32 = -1;

/// Id of the default category
pub const DEFAULT_CATEGORY_ID: i32 = 0;
