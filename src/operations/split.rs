//! PDF splitting
//!
//! This module holds the split configuration types, the three direct
//! partition strategies (page ranges, listed pages, every page), and the
//! orchestrator that ties validation, strategy dispatch, and error
//! translation together. The size-bounded strategy lives in
//! [`split_by_size`](super::split_by_size).

use tracing::{debug, info};

use super::ranges::{parse_page_ranges, validate_page_ranges, PageRange};
use super::split_by_size::split_by_target_size;
use super::template::{base_name, expand_template};
use crate::document::{LopdfSource, PageSource};
use crate::error::{Result, SplitError};

/// How to partition the source document.
#[derive(Debug, Clone)]
pub enum SplitMode {
    /// One output per range in an expression like `"1-5, 8-12"`.
    PageRanges(String),
    /// One single-page output per listed page (1-based). The list is
    /// de-duplicated and sorted before use.
    SpecificPages(Vec<usize>),
    /// One single-page output per page of the source, in page order.
    EveryPage,
    /// Runs of consecutive pages, each at most `target_kb` kilobytes once
    /// serialized. A single page over the target still ships alone.
    FileSize { target_kb: u64 },
}

impl SplitMode {
    fn default_template(&self) -> &'static str {
        match self {
            SplitMode::PageRanges(_) => "{base}_pages_{pages}.pdf",
            SplitMode::SpecificPages(_) | SplitMode::EveryPage => "{base}_page_{page}.pdf",
            SplitMode::FileSize { .. } => "{base}_part_{index}.pdf",
        }
    }
}

/// Configuration for one split invocation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub mode: SplitMode,
    /// Overrides the mode's default filename template when set. Recognized
    /// placeholders: `{base}`, `{index}`, `{start}`, `{end}`, `{pages}` for
    /// range-shaped outputs and `{base}`, `{index}`, `{page}` for
    /// single-page outputs.
    pub filename_template: Option<String>,
}

impl SplitConfig {
    pub fn new(mode: SplitMode) -> Self {
        Self {
            mode,
            filename_template: None,
        }
    }
}

/// One produced document. `start_page == end_page` for single-page outputs.
#[derive(Debug, Clone)]
pub struct SplitOutput {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub start_page: usize,
    pub end_page: usize,
}

/// Outcome of one split invocation.
///
/// `success` is false exactly when `errors` is non-empty; a failed split
/// returns no outputs rather than a truncated set.
#[derive(Debug, Clone)]
pub struct SplitResult {
    pub success: bool,
    pub outputs: Vec<SplitOutput>,
    pub errors: Vec<String>,
    pub source_filename: String,
}

/// Split a PDF given as raw bytes.
///
/// This is the single public call surface: it never panics and never
/// returns `Err` — every failure, from unreadable bytes to a bad
/// configuration, is rendered into `SplitResult::errors`.
pub fn split_document(bytes: &[u8], source_filename: &str, config: &SplitConfig) -> SplitResult {
    match LopdfSource::load(bytes) {
        Ok(source) => split_source(&source, source_filename, config),
        Err(e) => failure(source_filename, e),
    }
}

/// Split an already-loaded source document.
///
/// Generic over the document model so callers can bring their own
/// [`PageSource`].
pub fn split_source<S: PageSource>(
    source: &S,
    source_filename: &str,
    config: &SplitConfig,
) -> SplitResult {
    match run_split(source, config, source_filename) {
        Ok(outputs) => {
            info!(
                "split '{}' into {} output document(s)",
                source_filename,
                outputs.len()
            );
            SplitResult {
                success: true,
                outputs,
                errors: Vec::new(),
                source_filename: source_filename.to_string(),
            }
        }
        Err(e) => failure(source_filename, e),
    }
}

fn failure(source_filename: &str, error: SplitError) -> SplitResult {
    debug!("split of '{}' failed: {}", source_filename, error);
    SplitResult {
        success: false,
        outputs: Vec::new(),
        errors: vec![error.to_string()],
        source_filename: source_filename.to_string(),
    }
}

fn run_split<S: PageSource>(
    source: &S,
    config: &SplitConfig,
    source_filename: &str,
) -> Result<Vec<SplitOutput>> {
    let total_pages = source.page_count();
    if total_pages == 0 {
        return Err(SplitError::EmptyDocument);
    }

    let template = config
        .filename_template
        .as_deref()
        .unwrap_or_else(|| config.mode.default_template());
    let base = base_name(source_filename);

    match &config.mode {
        SplitMode::PageRanges(expression) => {
            let check = validate_page_ranges(expression, total_pages);
            if let Some(message) = check.error {
                return Err(SplitError::InvalidConfiguration(message));
            }
            let mut ranges = parse_page_ranges(expression, total_pages);
            // Outputs are ordered by start page; the sort is stable, so
            // ranges sharing a start keep their discovery order.
            ranges.sort_by_key(|r| r.start());
            split_by_ranges(source, &ranges, template, &base)
        }
        SplitMode::SpecificPages(pages) => {
            let mut pages = pages.clone();
            pages.sort_unstable();
            pages.dedup();
            if pages.is_empty() {
                return Err(SplitError::InvalidConfiguration(
                    "No pages specified".to_string(),
                ));
            }
            if pages[0] == 0 {
                return Err(SplitError::InvalidConfiguration(
                    "Page numbers must be >= 1".to_string(),
                ));
            }
            split_single_pages(source, &pages, template, &base)
        }
        SplitMode::EveryPage => {
            let pages: Vec<usize> = (1..=total_pages).collect();
            split_single_pages(source, &pages, template, &base)
        }
        SplitMode::FileSize { target_kb } => {
            if *target_kb == 0 {
                return Err(SplitError::InvalidConfiguration(
                    "Target size must be greater than zero".to_string(),
                ));
            }
            split_by_target_size(source, *target_kb, template, &base)
        }
    }
}

/// One output per range, ranges pre-sorted by start page.
fn split_by_ranges<S: PageSource>(
    source: &S,
    ranges: &[PageRange],
    template: &str,
    base: &str,
) -> Result<Vec<SplitOutput>> {
    let mut outputs = Vec::with_capacity(ranges.len());
    for (index, range) in ranges.iter().enumerate() {
        let bytes = source.extract_pages(&range.indices())?;
        let filename = expand_template(
            template,
            &[
                ("base", base.to_string()),
                ("index", (index + 1).to_string()),
                ("start", range.start().to_string()),
                ("end", range.end().to_string()),
                ("pages", range.label()),
            ],
        );
        debug!(
            "pages {} -> '{}' ({} bytes)",
            range.label(),
            filename,
            bytes.len()
        );
        outputs.push(SplitOutput {
            filename,
            bytes,
            page_count: range.page_count(),
            start_page: range.start(),
            end_page: range.end(),
        });
    }
    Ok(outputs)
}

/// One single-page output per listed page, pages pre-sorted ascending.
fn split_single_pages<S: PageSource>(
    source: &S,
    pages: &[usize],
    template: &str,
    base: &str,
) -> Result<Vec<SplitOutput>> {
    let mut outputs = Vec::with_capacity(pages.len());
    for (index, &page) in pages.iter().enumerate() {
        let bytes = source.extract_pages(&[page - 1])?;
        let filename = expand_template(
            template,
            &[
                ("base", base.to_string()),
                ("index", (index + 1).to_string()),
                ("page", page.to_string()),
            ],
        );
        outputs.push(SplitOutput {
            filename,
            bytes,
            page_count: 1,
            start_page: page,
            end_page: page,
        });
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Scripted source: every page serializes to `page_size` bytes and the
    /// extracted document adds nothing on top, so sizes are predictable.
    struct StubSource {
        pages: usize,
        page_size: usize,
        fail_extraction: bool,
    }

    impl StubSource {
        fn with_pages(pages: usize) -> Self {
            Self {
                pages,
                page_size: 100,
                fail_extraction: false,
            }
        }
    }

    impl PageSource for StubSource {
        fn load(_bytes: &[u8]) -> crate::error::Result<Self> {
            Ok(Self::with_pages(0))
        }

        fn page_count(&self) -> usize {
            self.pages
        }

        fn extract_pages(&self, indices: &[usize]) -> crate::error::Result<Vec<u8>> {
            if self.fail_extraction {
                return Err(SplitError::PageExtraction("simulated failure".to_string()));
            }
            for &idx in indices {
                if idx >= self.pages {
                    return Err(SplitError::PageExtraction(format!(
                        "page index {} out of bounds (document has {} pages)",
                        idx, self.pages
                    )));
                }
            }
            Ok(vec![0u8; indices.len() * self.page_size])
        }
    }

    fn config(mode: SplitMode) -> SplitConfig {
        SplitConfig::new(mode)
    }

    #[test]
    fn empty_document_fails_for_every_mode() {
        let source = StubSource::with_pages(0);
        let modes = vec![
            SplitMode::PageRanges("1-2".to_string()),
            SplitMode::SpecificPages(vec![1]),
            SplitMode::EveryPage,
            SplitMode::FileSize { target_kb: 100 },
        ];
        for mode in modes {
            let result = split_source(&source, "empty.pdf", &config(mode));
            assert!(!result.success);
            assert_eq!(result.errors, vec!["PDF file contains no pages"]);
            assert!(result.outputs.is_empty());
        }
    }

    #[test]
    fn page_range_mode_surfaces_validator_messages() {
        let source = StubSource::with_pages(10);

        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::PageRanges("  ".to_string())),
        );
        assert_eq!(result.errors, vec!["Page ranges cannot be empty"]);

        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::PageRanges("50-60".to_string())),
        );
        assert_eq!(result.errors, vec!["No valid page ranges found"]);
    }

    #[test]
    fn page_range_mode_sorts_ranges_by_start() {
        let source = StubSource::with_pages(10);
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::PageRanges("8-9, 1-3".to_string())),
        );
        assert!(result.success);
        let spans: Vec<(usize, usize)> = result
            .outputs
            .iter()
            .map(|o| (o.start_page, o.end_page))
            .collect();
        assert_eq!(spans, vec![(1, 3), (8, 9)]);
        assert_eq!(result.outputs[0].filename, "doc_pages_1-3.pdf");
        assert_eq!(result.outputs[1].filename, "doc_pages_8-9.pdf");
    }

    #[test]
    fn overlapping_ranges_each_produce_an_output() {
        let source = StubSource::with_pages(10);
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::PageRanges("1-3, 2-4".to_string())),
        );
        assert!(result.success);
        assert_eq!(result.outputs.len(), 2);
        assert_eq!(result.outputs[0].page_count, 3);
        assert_eq!(result.outputs[1].page_count, 3);
    }

    #[test]
    fn specific_pages_are_deduplicated_and_sorted() {
        let source = StubSource::with_pages(10);
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::SpecificPages(vec![5, 2, 9, 2])),
        );
        assert!(result.success);
        let pages: Vec<usize> = result.outputs.iter().map(|o| o.start_page).collect();
        assert_eq!(pages, vec![2, 5, 9]);
        assert_eq!(result.outputs[0].filename, "doc_page_2.pdf");
        assert!(result
            .outputs
            .iter()
            .all(|o| o.page_count == 1 && o.start_page == o.end_page));
    }

    #[test]
    fn specific_pages_rejects_empty_list_and_page_zero() {
        let source = StubSource::with_pages(10);

        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::SpecificPages(vec![])),
        );
        assert_eq!(result.errors, vec!["No pages specified"]);

        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::SpecificPages(vec![0, 3])),
        );
        assert_eq!(result.errors, vec!["Page numbers must be >= 1"]);
    }

    #[test]
    fn specific_page_past_the_end_fails_the_whole_split() {
        let source = StubSource::with_pages(10);
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::SpecificPages(vec![3, 15])),
        );
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert!(result.outputs.is_empty());
    }

    #[test]
    fn every_page_covers_each_page_once_in_order() {
        let source = StubSource::with_pages(6);
        let result = split_source(&source, "doc.pdf", &config(SplitMode::EveryPage));
        assert!(result.success);
        let pages: Vec<usize> = result.outputs.iter().map(|o| o.start_page).collect();
        assert_eq!(pages, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.outputs[3].filename, "doc_page_4.pdf");
    }

    #[test]
    fn file_size_mode_rejects_zero_target() {
        let source = StubSource::with_pages(10);
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::FileSize { target_kb: 0 }),
        );
        assert_eq!(result.errors, vec!["Target size must be greater than zero"]);
    }

    #[test]
    fn extraction_failure_aborts_with_no_partial_outputs() {
        let source = StubSource {
            pages: 10,
            page_size: 100,
            fail_extraction: true,
        };
        let result = split_source(
            &source,
            "doc.pdf",
            &config(SplitMode::PageRanges("1-2, 3-4".to_string())),
        );
        assert!(!result.success);
        assert_eq!(
            result.errors,
            vec!["Failed to extract pages: simulated failure"]
        );
        assert!(result.outputs.is_empty());
    }

    #[test]
    fn filename_template_override_is_applied() {
        let source = StubSource::with_pages(4);
        let mut cfg = config(SplitMode::PageRanges("1-2".to_string()));
        cfg.filename_template = Some("{index}_of_{base}_{start}_{end}.pdf".to_string());
        let result = split_source(&source, "doc.pdf", &cfg);
        assert_eq!(result.outputs[0].filename, "1_of_doc_1_2.pdf");
    }

    #[test]
    fn source_filename_is_echoed_back() {
        let source = StubSource::with_pages(2);
        let result = split_source(&source, "input.pdf", &config(SplitMode::EveryPage));
        assert_eq!(result.source_filename, "input.pdf");
        assert!(result.errors.is_empty());
    }
}
