//! Utility functions

pub mod validation;

pub use validation::{non_blank, optional_text, parse_choice, required_count, required_text};
