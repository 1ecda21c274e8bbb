//! Reusable rendering helpers.

pub mod helpers;

pub use helpers::{format_amount, format_size, format_with_commas, truncate_address};
