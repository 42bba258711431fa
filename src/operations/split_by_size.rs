//! Size-bounded chunking
//!
//! The serialized cost of a set of PDF pages is unknown until the document
//! is actually written out, so this strategy probes: it grows a candidate
//! chunk one page at a time, serializing the whole candidate at each step,
//! and finalizes at the last page that kept the trial within the target.
//! The finalized range is then extracted once more for the real output; the
//! trials are discarded.
//!
//! Worst case this serializes O(n^2) growing prefixes. That is acceptable
//! for interactive document sizes and a known limit for very large ones; an
//! incremental estimator would be cheaper but moves chunk boundaries, which
//! callers observe.

use tracing::debug;

use super::split::SplitOutput;
use super::template::expand_template;
use crate::document::PageSource;
use crate::error::Result;

/// Partition the source into runs of consecutive pages whose serialized
/// size stays at or under `target_kb`, emitting a single page alone when
/// even that one page exceeds the target. Chunks tile `1..=page_count`
/// with no gaps or overlaps.
pub(crate) fn split_by_target_size<S: PageSource>(
    source: &S,
    target_kb: u64,
    template: &str,
    base: &str,
) -> Result<Vec<SplitOutput>> {
    let total_pages = source.page_count();
    let target_bytes = target_kb.saturating_mul(1024);

    let mut outputs = Vec::new();
    let mut current_start = 1usize;

    while current_start <= total_pages {
        // Probe forward from the chunk start. `end` tracks the last
        // candidate whose trial stayed within the target.
        let mut end = current_start;
        let mut candidate = current_start;
        while candidate <= total_pages {
            let trial = source.extract_pages(&zero_based(current_start, candidate))?;
            if trial.len() as u64 <= target_bytes {
                end = candidate;
                candidate += 1;
            } else {
                // A chunk holds at least one page; when the very first
                // trial is already over the target, `end` still points at
                // `current_start` and that page ships alone.
                break;
            }
        }

        let bytes = source.extract_pages(&zero_based(current_start, end))?;
        let index = outputs.len() + 1;
        let filename = expand_template(
            template,
            &[
                ("base", base.to_string()),
                ("index", index.to_string()),
                ("start", current_start.to_string()),
                ("end", end.to_string()),
                ("pages", format!("{current_start}-{end}")),
            ],
        );
        debug!(
            "chunk {} covers pages {}-{} ({} bytes, target {})",
            index,
            current_start,
            end,
            bytes.len(),
            target_bytes
        );
        outputs.push(SplitOutput {
            filename,
            bytes,
            page_count: end - current_start + 1,
            start_page: current_start,
            end_page: end,
        });
        current_start = end + 1;
    }

    Ok(outputs)
}

fn zero_based(start: usize, end: usize) -> Vec<usize> {
    (start - 1..end).collect()
}
