//! High-level document splitting operations
//!
//! This module provides the page-range expression parser and validator, the
//! filename templating helper, and the split orchestrator with its four
//! partition strategies.

pub mod ranges;
pub mod split;
pub mod split_by_size;
pub mod template;

pub use ranges::{parse_page_ranges, validate_page_ranges, PageRange, RangeValidation};
pub use split::{
    split_document, split_source, SplitConfig, SplitMode, SplitOutput, SplitResult,
};
pub use template::expand_template;
