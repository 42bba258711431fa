//! # pdf-split
//!
//! Split PDF documents into multiple output documents, entirely in memory.
//!
//! ## Features
//!
//! - **Page ranges**: one output per range in an expression like `"1-5, 8-12"`
//! - **Specific pages**: one single-page output per listed page
//! - **Every page**: one output per page of the source
//! - **File size**: consecutive-page chunks bounded by a serialized-size target
//! - **Filename templates**: `{base}`, `{index}`, `{start}`, `{end}`, `{pages}`, `{page}`
//!
//! The call surface never panics and never returns `Err`: every failure is
//! reported through [`SplitResult::errors`]. Each invocation is independent —
//! nothing is cached or shared across calls.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_split::{split_document, SplitConfig, SplitMode};
//!
//! let bytes = std::fs::read("report.pdf").unwrap();
//! let config = SplitConfig::new(SplitMode::PageRanges("1-5, 8-12".to_string()));
//!
//! let result = split_document(&bytes, "report.pdf", &config);
//! assert!(result.success, "split failed: {:?}", result.errors);
//! for output in &result.outputs {
//!     std::fs::write(&output.filename, &output.bytes).unwrap();
//! }
//! ```
//!
//! ## Validating expressions before splitting
//!
//! [`validate_page_ranges`] answers cheaply whether an expression yields any
//! usable ranges for a given page count, so a UI can check on every
//! keystroke without materializing ranges:
//!
//! ```
//! use pdf_split::validate_page_ranges;
//!
//! let check = validate_page_ranges("1-3,5", 10);
//! assert!(check.valid);
//!
//! let check = validate_page_ranges("50-60", 10);
//! assert_eq!(check.error.as_deref(), Some("No valid page ranges found"));
//! ```

pub mod document;
pub mod error;
pub mod operations;

pub use document::{LopdfSource, PageSource};
pub use error::SplitError;
pub use operations::{
    expand_template, parse_page_ranges, split_document, split_source, validate_page_ranges,
    PageRange, RangeValidation, SplitConfig, SplitMode, SplitOutput, SplitResult,
};
