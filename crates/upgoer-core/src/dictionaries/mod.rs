//! Word lists backing the approved-word set.
//!
//! Both lists are lowercase. [`crate::words::ApprovedWords`] merges them into
//! a single lookup set.

pub mod common_words;
pub mod supplementary;
