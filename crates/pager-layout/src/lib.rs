pub mod constants;
pub mod label;
pub mod layout;
mod options;
mod session;
pub mod sort;
mod stats;
mod types;

pub use layout::*;
pub use options::*;
pub use session::*;
pub use sort::{Category, LibrarySort, SortCriterion, SortDirection, SortMode};
pub use stats::{LayoutStatistics, calculate_statistics};
pub use types::*;
