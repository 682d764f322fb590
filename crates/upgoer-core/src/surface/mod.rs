//! Rendering surfaces shipped with the core library.
//!
//! - [`tree`] builds a serializable node tree
//! - [`html`] builds `<span>` markup

pub mod html;
pub mod tree;

/// Format a scale percentage for display: at most two decimals, no trailing zeros.
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{rounded}%")
}
