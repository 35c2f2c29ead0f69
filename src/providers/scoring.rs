//! Relevance and proximity scoring shared by the providers

use super::store::Record;
use crate::results::SearchResult;
use crate::search::{Coordinates, SearchQuery};

const EXACT_TITLE: f64 = 10.0;
const TITLE_PREFIX: f64 = 6.0;
const TITLE_SUBSTRING: f64 = 4.0;
const DESCRIPTION_SUBSTRING: f64 = 1.0;
const BLANK_QUERY: f64 = 1.0;
const PROXIMITY_WEIGHT: f64 = 10.0;

/// Text relevance of a record, `None` when it does not match at all
pub(crate) fn text_relevance(text: &str, record: &Record) -> Option<f64> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Some(BLANK_QUERY);
    }

    let title = record.title.to_lowercase();
    if title == needle {
        Some(EXACT_TITLE)
    } else if title.starts_with(&needle) {
        Some(TITLE_PREFIX)
    } else if title.contains(&needle) {
        Some(TITLE_SUBSTRING)
    } else if record.description.to_lowercase().contains(&needle) {
        Some(DESCRIPTION_SUBSTRING)
    } else {
        None
    }
}

/// Bonus that decays with distance from the origin
pub(crate) fn proximity_bonus(distance_km: f64) -> f64 {
    PROXIMITY_WEIGHT / (1.0 + distance_km.max(0.0))
}

/// Score records for a location-aware category.
///
/// Records outside `radius_km` of the origin are dropped when both are set.
pub(crate) fn score_located(
    query: &SearchQuery,
    records: Vec<Record>,
    radius_km: Option<f64>,
) -> Vec<SearchResult> {
    records
        .into_iter()
        .filter_map(|record| {
            let mut score = text_relevance(&query.text, &record)?;
            let location = record.location();

            if let (Some(origin), Some(location)) = (query.origin, location) {
                let distance = origin.distance_km(&location);
                if radius_km.is_some_and(|radius| distance > radius) {
                    return None;
                }
                score += proximity_bonus(distance);
            }

            Some(into_result(record, location, score))
        })
        .collect()
}

/// Score records by text only, stripping any location
pub(crate) fn score_text(query: &SearchQuery, records: Vec<Record>) -> Vec<SearchResult> {
    records
        .into_iter()
        .filter_map(|record| {
            let score = text_relevance(&query.text, &record)?;
            Some(into_result(record, None, score))
        })
        .collect()
}

fn into_result(record: Record, location: Option<Coordinates>, score: f64) -> SearchResult {
    let mut result = SearchResult::new(record.id, record.title)
        .with_description(record.description)
        .with_score(score);
    result.location = location;
    result
}
