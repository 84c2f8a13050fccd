//! Filter/sort pipeline that turns the ranked dataset into what the views show.
//!
//! Everything here is a pure function of `(dataset, search term, sort key)`
//! and is cheap enough to recompute on every keystroke.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{filter_candidates, matches_search};
pub use sort::{sort_candidates, SortKey};
pub use stats::{format_mean, DatasetStats, NO_DATA};

use crate::candidates::RankedCandidate;

/// Number of rows the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 10;

/// Filter by `search`, then order by `sort`. Stored ranks are untouched.
pub fn view<'a>(dataset: &'a [RankedCandidate], search: &str, sort: SortKey) -> Vec<&'a RankedCandidate> {
    let mut visible = filter_candidates(dataset, search);
    sort_candidates(&mut visible, sort);
    visible
}

/// The first [`LEADERBOARD_SIZE`] entries of a view.
pub fn leaderboard<'a, 'b>(visible: &'b [&'a RankedCandidate]) -> &'b [&'a RankedCandidate] {
    &visible[..visible.len().min(LEADERBOARD_SIZE)]
}
