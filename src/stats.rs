use crate::models::{DiaryStats, Entry};

/// Entries scoring at or above this count as "good" days.
pub const GOOD_THRESHOLD: u8 = 3;

/// Derives the mood statistics for the given entries. For an empty diary the
/// ratio has no meaningful value, so it is `None` rather than a division by
/// zero.
pub fn build_stats(entries: &[Entry]) -> DiaryStats {
    let good_count = entries
        .iter()
        .filter(|entry| entry.emotion >= GOOD_THRESHOLD)
        .count();
    let bad_count = entries.len() - good_count;
    let good_ratio = if entries.is_empty() {
        None
    } else {
        Some(good_count as f64 / entries.len() as f64 * 100.0)
    };

    DiaryStats {
        good_count,
        bad_count,
        good_ratio,
    }
}
