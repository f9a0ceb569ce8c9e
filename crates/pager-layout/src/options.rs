use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reader preferences that feed the layout policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderPreferences {
    // Layout
    pub page_layout: PageLayout,
    #[cfg_attr(feature = "serde", serde(default))]
    pub automatic_splits: bool,

    // Presentation
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert_double_pages: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reading_direction: ReadingDirection,
}

impl Default for ReaderPreferences {
    fn default() -> Self {
        Self {
            page_layout: PageLayout::Automatic,
            automatic_splits: false,
            invert_double_pages: false,
            reading_direction: ReadingDirection::LeftToRight,
        }
    }
}

impl ReaderPreferences {
    /// Load preferences from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let preferences = serde_json::from_slice(&bytes)
            .map_err(|e| PagerError::Config(format!("Failed to parse preferences: {}", e)))?;
        Ok(preferences)
    }

    /// Save preferences to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PagerError::Serialize(format!("Failed to serialize preferences: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Pairs read right-to-left when exactly one of RTL reading or inversion is on
    pub fn reversed_pairs(&self) -> bool {
        self.reading_direction.is_rtl() ^ self.invert_double_pages
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // PageLayout is stored as its preference integer
    impl Serialize for PageLayout {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_i32(self.preference_value())
        }
    }

    impl<'de> Deserialize<'de> for PageLayout {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = i32::deserialize(deserializer)?;
            Ok(PageLayout::from_preference(value))
        }
    }
}
