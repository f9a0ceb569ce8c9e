//! Layout calculation modules
//!
//! This module handles everything between a chapter's page list and what the
//! reading surface shows:
//! - Layout policy (single, double or split pages)
//! - Shift resolution (which pages pair up)
//! - Slot building (grouping pages into reading positions)
//! - Position mapping (keeping the reader's place across layout changes)

mod policy;
mod remap;
mod shift;
mod slots;
mod types;

pub use policy::*;
pub use remap::*;
pub use shift::*;
pub use slots::*;
pub use types::*;
