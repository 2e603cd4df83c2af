use std::collections::HashMap;

use crate::models::MovieRecord;

/// Sentinel platform name when no provider appears across the whole set
pub const UNDETECTED_PLATFORM: &str = "Undetected";

/// Recommended records partitioned around the dominant streaming platform
#[derive(Debug, PartialEq)]
pub struct PlatformSplit {
    /// Name of the most frequent provider, or [`UNDETECTED_PLATFORM`]
    pub dominant_platform: String,
    /// Records carrying the dominant provider, in ranking order
    pub dominant: Vec<MovieRecord>,
    /// Every other record, in ranking order
    pub other: Vec<MovieRecord>,
}

/// Partitions ranked records by their dominant streaming platform.
///
/// Provider occurrences are counted in traversal order (records in ranking
/// order, providers in stored order), and each name remembers the index at
/// which it was first seen. The dominant platform is the name with the
/// strictly highest count; a count tie goes to the earlier first-seen name.
/// The tie-break is deliberate and deterministic rather than whatever a map
/// iteration happens to yield.
///
/// Ranking order is preserved inside both buckets; nothing is re-sorted by
/// count or score. With no providers at all, the dominant name is the
/// `"Undetected"` sentinel and every record lands in `other`.
pub fn split_by_dominant_platform(records: Vec<MovieRecord>) -> PlatformSplit {
    // name -> (occurrence count, first-seen index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for record in &records {
        for provider in &record.watch_providers {
            let first_seen = counts.len();
            let entry = counts
                .entry(provider.name.clone())
                .or_insert((0, first_seen));
            entry.0 += 1;
        }
    }

    let dominant_name = counts
        .iter()
        .max_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
            count_a.cmp(count_b).then(seen_b.cmp(seen_a))
        })
        .map(|(name, _)| name.clone());

    let Some(dominant_name) = dominant_name else {
        tracing::debug!(records = records.len(), "No providers observed across recommendation set");
        return PlatformSplit {
            dominant_platform: UNDETECTED_PLATFORM.to_string(),
            dominant: Vec::new(),
            other: records,
        };
    };

    let mut dominant = Vec::new();
    let mut other = Vec::new();
    for record in records {
        if record
            .watch_providers
            .iter()
            .any(|p| p.name == dominant_name)
        {
            dominant.push(record);
        } else {
            other.push(record);
        }
    }

    tracing::debug!(
        platform = %dominant_name,
        dominant_count = dominant.len(),
        other_count = other.len(),
        "Partitioned recommendations by dominant platform"
    );

    PlatformSplit {
        dominant_platform: dominant_name,
        dominant,
        other,
    }
}
