//! Password evaluation sections
//!
//! Each section checks one family of rules and reports the violations it
//! finds, in rule order.

mod blacklist;
mod length;
mod pattern;
mod role;
mod variety;

pub use blacklist::blacklist_section;
pub use length::{length_section, MIN_LENGTH};
pub use pattern::{has_repeated_runs, has_sequence, has_year_like, pattern_analysis_section};
pub use role::role_section;
pub use variety::character_variety_section;

use crate::violation::Violation;

/// Violations found by a section, in evaluation order. Empty means passed.
pub type SectionResult = Vec<Violation>;
