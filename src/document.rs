//! Document-model seam
//!
//! The splitting operations only need four things from a PDF library: load
//! bytes, count pages, copy a page subset into a fresh document, and
//! serialize it. `PageSource` captures that contract so the strategies stay
//! independent of the concrete model, and `LopdfSource` implements it over
//! `lopdf`.

use std::collections::HashSet;

use crate::error::{Result, SplitError};

/// A loaded source document the split strategies can draw pages from.
pub trait PageSource: Sized {
    /// Load a document from raw bytes.
    fn load(bytes: &[u8]) -> Result<Self>;

    /// Total number of pages in the source.
    fn page_count(&self) -> usize;

    /// Copy the given pages (0-based indices) into a fresh document and
    /// serialize it. The source itself is never modified.
    fn extract_pages(&self, indices: &[usize]) -> Result<Vec<u8>>;
}

/// `PageSource` backed by `lopdf::Document`.
pub struct LopdfSource {
    document: lopdf::Document,
    page_count: usize,
}

impl PageSource for LopdfSource {
    fn load(bytes: &[u8]) -> Result<Self> {
        let document =
            lopdf::Document::load_mem(bytes).map_err(|e| SplitError::Load(e.to_string()))?;
        let page_count = document.get_pages().len();
        Ok(Self {
            document,
            page_count,
        })
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_pages(&self, indices: &[usize]) -> Result<Vec<u8>> {
        if indices.is_empty() {
            return Err(SplitError::PageExtraction("no pages selected".to_string()));
        }
        for &idx in indices {
            if idx >= self.page_count {
                return Err(SplitError::PageExtraction(format!(
                    "page index {} out of bounds (document has {} pages)",
                    idx, self.page_count
                )));
            }
        }

        // Whitelist by deletion: clone the source, drop every page not in
        // the subset, then prune the objects the kept pages no longer reach.
        let keep: HashSet<u32> = indices.iter().map(|&idx| idx as u32 + 1).collect();
        let mut doc = self.document.clone();
        let mut to_delete: Vec<u32> = (1..=self.page_count as u32)
            .filter(|n| !keep.contains(n))
            .collect();
        // Delete back to front so earlier page numbers stay stable.
        to_delete.reverse();
        for page_number in to_delete {
            doc.delete_pages(&[page_number]);
        }
        doc.prune_objects();
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| SplitError::PageExtraction(e.to_string()))?;
        Ok(buffer)
    }
}
