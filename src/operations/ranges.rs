//! Page-range expression parsing and validation
//!
//! An expression is a comma-separated list of tokens; each token is a single
//! page number (`"7"`) or an inclusive span (`"2-5"`). Parsing is
//! deliberately permissive: tokens that cannot be used are dropped, not
//! reported. `validate_page_ranges` layers the strict check on top — it is
//! cheap enough to run on every keystroke of an input field, while callers
//! that execute a split call `parse_page_ranges` once.

/// An inclusive run of pages, 1-based, with `start <= end`.
///
/// Only the parser constructs these, so a `PageRange` in hand is already
/// bounds-checked against the page count it was parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: usize,
    end: usize,
}

impl PageRange {
    /// First page of the range, 1-based.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last page of the range, 1-based inclusive.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of pages covered.
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// 0-based page indices for the document model.
    pub fn indices(&self) -> Vec<usize> {
        (self.start - 1..self.end).collect()
    }

    /// The `"start-end"` label used by filename templates.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Parse a page-range expression against a known page count.
///
/// Unusable tokens are silently dropped: either endpoint failing to parse as
/// a positive integer, `start > end`, `start < 1`, or `end` past the last
/// page. The result keeps discovery order and may be empty; overlapping
/// ranges are legal and preserved, so one page can land in several outputs.
pub fn parse_page_ranges(expression: &str, total_pages: usize) -> Vec<PageRange> {
    expression
        .split(',')
        .filter_map(|token| parse_token(token, total_pages))
        .collect()
}

fn parse_token(token: &str, total_pages: usize) -> Option<PageRange> {
    let token = token.trim();
    let (start, end) = match token.split_once('-') {
        Some((lo, hi)) => (
            lo.trim().parse::<usize>().ok()?,
            hi.trim().parse::<usize>().ok()?,
        ),
        None => {
            let page = token.parse::<usize>().ok()?;
            (page, page)
        }
    };
    if start < 1 || start > end || end > total_pages {
        return None;
    }
    Some(PageRange { start, end })
}

/// Outcome of [`validate_page_ranges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl RangeValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// Check whether an expression yields at least one usable range.
///
/// The diagnostics are intentionally coarse: the message says the expression
/// produced nothing, not which token was at fault. Callers wanting per-token
/// detail re-parse themselves.
pub fn validate_page_ranges(expression: &str, total_pages: usize) -> RangeValidation {
    if expression.trim().is_empty() {
        return RangeValidation::invalid("Page ranges cannot be empty");
    }
    if parse_page_ranges(expression, total_pages).is_empty() {
        return RangeValidation::invalid("No valid page ranges found");
    }
    RangeValidation::ok()
}
