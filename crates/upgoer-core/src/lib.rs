//! Core library for upgoer.
//!
//! Splits English text into tokens, labels every word by how common and how
//! long it is, groups tokens into sentences, and shrinks sentences that run
//! long. Output is drawn on any [`RenderSurface`].
//!
//! # Modules
//!
//! - [`tokenize`] - Lexical tokenizer
//! - [`words`] - The approved-word set
//! - [`classify`] - Word categories
//! - [`sentence`] - Sentence grouping
//! - [`scale`] - Sentence size curve
//! - [`render`] - Rendering pipeline and the surface trait
//! - [`surface`] - Tree and HTML surfaces
//! - [`document`] - Owned results and summaries
//! - [`markdown`] - Markdown to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use upgoer_core::render::Renderer;
//! use upgoer_core::surface::html::HtmlSurface;
//!
//! let html = Renderer::default()
//!     .render(&mut HtmlSurface, "Hi there.")
//!     .into_markup();
//! assert!(html.contains("<span class=\"preApproved\">there</span>"));
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod document;
pub mod error;
pub mod markdown;
pub mod render;
pub mod scale;
pub mod sentence;
pub mod surface;
pub mod tokenize;
pub mod words;

pub use classify::{Category, Classifier, ClassifyThresholds, classify};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, OutputFormat};
pub use document::{Document, DocumentSummary};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use render::{RenderSurface, Renderer};
pub use scale::ScaleConfig;
pub use sentence::group_sentences;
pub use tokenize::{TokenKind, tokenize};
pub use words::ApprovedWords;

/// Default input size limit in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
