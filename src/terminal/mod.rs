//! Shared terminal utilities.
//!
//! Box drawing, entropy report, and number formatting.

mod output;

pub use output::*;
