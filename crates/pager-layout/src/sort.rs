//! Category sort modes
//!
//! A category stores its manga ordering as a single character: each criterion
//! owns two consecutive letters starting at `'a'` (ascending first), and `'D'`
//! marks manual drag-and-drop ordering. Inside the crate the order is always a
//! [`SortMode`]; the character only appears at the persistence boundary.

use crate::constants::{
    ALL_CATEGORY_ID, DEFAULT_CATEGORY_ID, DRAG_AND_DROP_CODE, SORT_CODE_BASE, SORT_CRITERIA_COUNT,
};

/// What a category is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    Alpha,
    LatestChapter,
    Unread,
    LastRead,
    Total,
    DateAdded,
    LastFetched,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; SORT_CRITERIA_COUNT as usize] = [
        SortCriterion::Alpha,
        SortCriterion::LatestChapter,
        SortCriterion::Unread,
        SortCriterion::LastRead,
        SortCriterion::Total,
        SortCriterion::DateAdded,
        SortCriterion::LastFetched,
    ];

    /// Position in the fixed criterion order (0 = alpha)
    pub fn ordinal(self) -> u8 {
        match self {
            SortCriterion::Alpha => 0,
            SortCriterion::LatestChapter => 1,
            SortCriterion::Unread => 2,
            SortCriterion::LastRead => 3,
            SortCriterion::Total => 4,
            SortCriterion::DateAdded => 5,
            SortCriterion::LastFetched => 6,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Ascending code for this criterion
    fn base_code(self) -> u8 {
        SORT_CODE_BASE as u8 + self.ordinal() * 2
    }

    pub fn name(self) -> &'static str {
        match self {
            SortCriterion::Alpha => "alpha",
            SortCriterion::LatestChapter => "latest-chapter",
            SortCriterion::Unread => "unread",
            SortCriterion::LastRead => "last-read",
            SortCriterion::Total => "total",
            SortCriterion::DateAdded => "date-added",
            SortCriterion::LastFetched => "last-fetched",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    fn offset(self) -> u8 {
        match self {
            SortDirection::Ascending => 0,
            SortDirection::Descending => 1,
        }
    }
}

/// Decoded category ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    Criterion {
        criterion: SortCriterion,
        direction: SortDirection,
    },
    DragAndDrop,
    /// No stored code
    #[default]
    Unset,
}

impl SortMode {
    pub fn new(criterion: SortCriterion, direction: SortDirection) -> Self {
        SortMode::Criterion {
            criterion,
            direction,
        }
    }

    pub fn criterion(self) -> Option<SortCriterion> {
        match self {
            SortMode::Criterion { criterion, .. } => Some(criterion),
            SortMode::DragAndDrop | SortMode::Unset => None,
        }
    }

    /// Anything without a direction reads as ascending.
    pub fn is_ascending(self) -> bool {
        match self {
            SortMode::Criterion { direction, .. } => direction.is_ascending(),
            SortMode::DragAndDrop | SortMode::Unset => true,
        }
    }
}

/// Encode a sort mode to its stored character. `Unset` has no code.
pub fn encode(mode: SortMode) -> Option<char> {
    match mode {
        SortMode::Criterion {
            criterion,
            direction,
        } => Some((criterion.base_code() + direction.offset()) as char),
        SortMode::DragAndDrop => Some(DRAG_AND_DROP_CODE),
        SortMode::Unset => None,
    }
}

/// Decode a stored character. Unknown or missing codes decode to `Unset`.
pub fn decode(code: Option<char>) -> SortMode {
    let Some(code) = code else {
        return SortMode::Unset;
    };
    if code == DRAG_AND_DROP_CODE {
        return SortMode::DragAndDrop;
    }
    let Some(distance) = code_distance(code) else {
        return SortMode::Unset;
    };
    match SortCriterion::from_ordinal(distance / 2) {
        Some(criterion) => SortMode::new(criterion, SortDirection::from_ascending(distance % 2 == 0)),
        None => SortMode::Unset,
    }
}

/// Parity check on a raw code, matching the stored-format rule
/// `(code - 'a') % 2 == 0`. Codes below `'a'` count as ascending.
pub fn is_ascending(code: Option<char>) -> bool {
    code.and_then(code_distance).is_none_or(|d| d % 2 != 1)
}

fn code_distance(code: char) -> Option<u8> {
    if !code.is_ascii() {
        return None;
    }
    (code as u8).checked_sub(SORT_CODE_BASE as u8)
}

/// Library-level sort choice: a criterion or manual ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibrarySort {
    Criterion(SortCriterion),
    DragAndDrop,
}

/// A library category and its stored ordering
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub id: Option<i32>,
    pub name: String,
    pub order: i32,
    #[cfg_attr(feature = "serde", serde(default, with = "sort_code"))]
    pub sort: SortMode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_dynamic: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_hidden: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_alone: bool,
}

impl Category {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn create_default(name: impl Into<String>) -> Self {
        Self {
            id: Some(DEFAULT_CATEGORY_ID),
            ..Self::create(name)
        }
    }

    /// Dynamic category with a fixed ordering
    pub fn create_custom(name: impl Into<String>, sort: LibrarySort, ascending: bool) -> Self {
        let sort = match sort {
            LibrarySort::Criterion(criterion) => {
                SortMode::new(criterion, SortDirection::from_ascending(ascending))
            }
            LibrarySort::DragAndDrop => SortMode::DragAndDrop,
        };
        Self {
            sort,
            is_dynamic: true,
            ..Self::create(name)
        }
    }

    pub fn create_all(name: impl Into<String>, sort: LibrarySort, ascending: bool) -> Self {
        Self {
            id: Some(ALL_CATEGORY_ID),
            order: ALL_CATEGORY_ID,
            is_alone: true,
            ..Self::create_custom(name, sort, ascending)
        }
    }

    pub fn name_lower(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_ascending(&self) -> bool {
        self.sort.is_ascending()
    }

    /// Library sort of this category.
    ///
    /// With no stored code, non-dynamic categories report drag-and-drop when
    /// `null_as_dnd` is set; otherwise there is no forced order.
    pub fn sorting_mode(&self, null_as_dnd: bool) -> Option<LibrarySort> {
        match self.sort {
            SortMode::Criterion { criterion, .. } => Some(LibrarySort::Criterion(criterion)),
            SortMode::DragAndDrop => Some(LibrarySort::DragAndDrop),
            SortMode::Unset if null_as_dnd && !self.is_dynamic => Some(LibrarySort::DragAndDrop),
            SortMode::Unset => None,
        }
    }

    pub fn is_drag_and_drop(&self) -> bool {
        matches!(self.sort, SortMode::Unset | SortMode::DragAndDrop) && !self.is_dynamic
    }

    /// Switch to the ascending variant of `sort`.
    pub fn change_sort_to(&mut self, sort: LibrarySort) {
        self.sort = match sort {
            LibrarySort::Criterion(criterion) => SortMode::new(criterion, SortDirection::Ascending),
            LibrarySort::DragAndDrop => SortMode::DragAndDrop,
        };
    }

    /// Flip the direction, keeping the criterion. No-op for modes without a direction.
    pub fn toggle_direction(&mut self) {
        if let SortMode::Criterion {
            criterion,
            direction,
        } = self.sort
        {
            let flipped = SortDirection::from_ascending(!direction.is_ascending());
            self.sort = SortMode::new(criterion, flipped);
        }
    }

    pub fn sort_code(&self) -> Option<char> {
        encode(self.sort)
    }
}

#[cfg(feature = "serde")]
mod sort_code {
    use super::{SortMode, decode, encode};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(mode: &SortMode, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match encode(*mode) {
            Some(code) => serializer.serialize_char(code),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<SortMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<char>::deserialize(deserializer)?;
        Ok(decode(code))
    }
}
