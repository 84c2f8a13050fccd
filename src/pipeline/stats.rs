use crate::candidates::RankedCandidate;
use crate::scoring::format_score;

/// Arithmetic means across a whole dataset.
///
/// Always computed from the full dataset, never from a filtered view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    pub count: usize,
    pub avg_crisis: f64,
    pub avg_sustainability: f64,
    pub avg_motivation: f64,
    pub avg_total: f64,
}

impl DatasetStats {
    /// Means of the three scores and the total. `None` for an empty dataset,
    /// where a mean is undefined.
    pub fn compute(dataset: &[RankedCandidate]) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let n = dataset.len() as f64;
        let mean = |f: fn(&RankedCandidate) -> f64| dataset.iter().map(f).sum::<f64>() / n;

        Some(Self {
            count: dataset.len(),
            avg_crisis: mean(|c| c.evaluation.crisis_management_score),
            avg_sustainability: mean(|c| c.evaluation.sustainability_score),
            avg_motivation: mean(|c| c.evaluation.team_motivation_score),
            avg_total: mean(|c| c.total_score),
        })
    }
}

/// Placeholder rendered where a statistic is undefined.
pub const NO_DATA: &str = "no data";

/// Format an optional mean to one decimal, or the placeholder.
pub fn format_mean(stats: Option<&DatasetStats>, pick: fn(&DatasetStats) -> f64) -> String {
    stats
        .map(|s| format_score(pick(s)))
        .unwrap_or_else(|| NO_DATA.to_string())
}
