//! Normalization and ordering of provider output

use super::types::SearchResult;
use std::cmp::Ordering;
use tracing::warn;

/// Drop results that violate the provider contract.
///
/// Malformed entries are logged and discarded so that one bad record does not
/// fail an otherwise valid response.
pub fn normalize(results: Vec<SearchResult>, provider: &str) -> Vec<SearchResult> {
    let before = results.len();
    let kept: Vec<SearchResult> = results
        .into_iter()
        .filter(|result| {
            let ok = result.is_well_formed();
            if !ok {
                warn!(
                    "Dropping malformed result from {} (id={:?}, title={:?})",
                    provider, result.id, result.title
                );
            }
            ok
        })
        .collect();

    if kept.len() < before {
        warn!(
            "Provider {} returned {} malformed results",
            provider,
            before - kept.len()
        );
    }
    kept
}

/// Sort by descending score, ascending id on ties, then keep at most
/// `page_size` entries.
pub fn rank_and_truncate(mut results: Vec<SearchResult>, page_size: usize) -> Vec<SearchResult> {
    results.sort_by(compare);
    results.truncate(page_size);
    results
}

fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
