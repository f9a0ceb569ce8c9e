use thiserror::Error;

use crate::constants::{
    PAGE_LAYOUT_AUTOMATIC, PAGE_LAYOUT_DOUBLE, PAGE_LAYOUT_SINGLE, PAGE_LAYOUT_SPLIT,
};

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Invalid page list: {0}")]
    InvalidPages(String),
    #[error("No pages in chapter")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, PagerError>;

/// Device orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Page layout preference chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLayout {
    /// One page per slot
    #[default]
    Single,
    /// Two pages per slot
    Double,
    /// Derive double/split from the device orientation
    Automatic,
    /// Wide pages are split into two half slots
    Split,
}

impl PageLayout {
    /// Map a stored preference value to a layout. Unknown values fall back to single.
    pub fn from_preference(value: i32) -> Self {
        match value {
            PAGE_LAYOUT_DOUBLE => PageLayout::Double,
            PAGE_LAYOUT_AUTOMATIC => PageLayout::Automatic,
            PAGE_LAYOUT_SPLIT => PageLayout::Split,
            _ => PageLayout::Single,
        }
    }

    pub fn preference_value(self) -> i32 {
        match self {
            PageLayout::Single => PAGE_LAYOUT_SINGLE,
            PageLayout::Double => PAGE_LAYOUT_DOUBLE,
            PageLayout::Automatic => PAGE_LAYOUT_AUTOMATIC,
            PageLayout::Split => PAGE_LAYOUT_SPLIT,
        }
    }

    pub fn is_automatic(self) -> bool {
        self == PageLayout::Automatic
    }
}

/// Reading direction of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl ReadingDirection {
    pub fn is_rtl(self) -> bool {
        self == ReadingDirection::RightToLeft
    }
}

/// Which half of a two-page slot the reader last focused.
///
/// Tracked by the caller; used when collapsing a pair back to single pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairFocus {
    #[default]
    Leading,
    Trailing,
}

/// One image of a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// 0-based position within the chapter (reading order)
    pub index: usize,
    /// Wide spread that must occupy a slot alone
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_page: bool,
    /// Must not be merged with a neighbour (e.g. a chapter transition marker)
    #[cfg_attr(feature = "serde", serde(default))]
    pub isolated: bool,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            full_page: false,
            isolated: false,
        }
    }

    pub fn full(index: usize) -> Self {
        Self {
            full_page: true,
            ..Self::new(index)
        }
    }

    pub fn isolated(index: usize) -> Self {
        Self {
            isolated: true,
            ..Self::new(index)
        }
    }

    /// A lone page always occupies a slot by itself.
    pub fn is_lone(&self) -> bool {
        self.full_page || self.isolated
    }
}

/// Ordered page list of one chapter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterPages {
    pub chapter_id: u64,
    pages: Vec<Page>,
}

impl ChapterPages {
    /// Build a chapter, checking that indices are 0-based and contiguous.
    pub fn new(chapter_id: u64, pages: Vec<Page>) -> Result<Self> {
        for (expected, page) in pages.iter().enumerate() {
            if page.index != expected {
                return Err(PagerError::InvalidPages(format!(
                    "page at position {} has index {}",
                    expected, page.index
                )));
            }
        }
        Ok(Self { chapter_id, pages })
    }

    /// Build a chapter of `count` pages, marking the given indices as full or isolated.
    ///
    /// Indices outside `0..count` are ignored.
    pub fn with_flags(chapter_id: u64, count: usize, full: &[usize], isolated: &[usize]) -> Self {
        let pages = (0..count)
            .map(|index| Page {
                index,
                full_page: full.contains(&index),
                isolated: isolated.contains(&index),
            })
            .collect();
        Self { chapter_id, pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.pages.len().checked_sub(1)
    }
}
