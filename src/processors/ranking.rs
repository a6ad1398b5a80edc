//! Ordering and numbering of the leaderboard.

use super::aggregation::RankingEntry;
use crate::config::RankOrder;

/// A ranking entry with its printed rank number
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: RankingEntry,
}

/// Sorts by stored spread, biggest favorite first. Stable for equal spreads.
pub fn sort_by_spread(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| a.spread.total_cmp(&b.spread));
}

/// Rank number for the row at `index` out of `count` rows
pub fn rank_for_position(index: usize, count: usize, order: RankOrder) -> usize {
    match order {
        RankOrder::Descending => count - index,
        RankOrder::Ascending => index + 1,
    }
}

/// Sorts the entries and numbers them.
///
/// With [`RankOrder::Descending`] the most lopsided game is numbered N and
/// the closest game 1.
pub fn rank_games(mut entries: Vec<RankingEntry>, order: RankOrder) -> Vec<RankedEntry> {
    sort_by_spread(&mut entries);
    let count = entries.len();

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: rank_for_position(index, count, order),
            entry,
        })
        .collect()
}
