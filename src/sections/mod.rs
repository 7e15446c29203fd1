//! Strength checks
//!
//! Each section is one independent structural check. A passing section adds
//! one point to the score.

mod length;
mod variety;

pub use length::{min_length_section, recommended_length_section};
pub use variety::{digit_section, mixed_case_section, symbol_section};

/// Result type for section check functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
