use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::candidates::RankedCandidate;

/// Orderings offered for the candidate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Stored rank, best first
    #[default]
    Rank,
    /// Name, A-Z
    Name,
    /// Years of experience, most first
    Experience,
    /// Crisis management score, highest first
    Crisis,
    /// Sustainability score, highest first
    Sustainability,
    /// Team motivation score, highest first
    Motivation,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Rank,
        SortKey::Name,
        SortKey::Experience,
        SortKey::Crisis,
        SortKey::Sustainability,
        SortKey::Motivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Name => "name",
            SortKey::Experience => "experience",
            SortKey::Crisis => "crisis",
            SortKey::Sustainability => "sustainability",
            SortKey::Motivation => "motivation",
        }
    }

    /// Human label for the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rank => "Rank (Best First)",
            SortKey::Name => "Name (A-Z)",
            SortKey::Experience => "Experience (Most)",
            SortKey::Crisis => "Crisis Management",
            SortKey::Sustainability => "Sustainability",
            SortKey::Motivation => "Team Motivation",
        }
    }

    pub fn next(&self) -> Self {
        let i = self.position();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let i = self.position();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    /// Comparator for this key. Numeric keys other than rank sort descending.
    pub fn compare(&self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
        match self {
            SortKey::Rank => a.rank.cmp(&b.rank),
            SortKey::Name => compare_names(a.name(), b.name()),
            SortKey::Experience => b
                .candidate
                .years_experience
                .total_cmp(&a.candidate.years_experience),
            SortKey::Crisis => b
                .evaluation
                .crisis_management_score
                .total_cmp(&a.evaluation.crisis_management_score),
            SortKey::Sustainability => b
                .evaluation
                .sustainability_score
                .total_cmp(&a.evaluation.sustainability_score),
            SortKey::Motivation => b
                .evaluation
                .team_motivation_score
                .total_cmp(&a.evaluation.team_motivation_score),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown sort key '{}' (expected one of: rank, name, experience, crisis, sustainability, motivation)",
                    s
                )
            })
    }
}

/// Locale-aware name order (Unicode Collation Algorithm, CLDR root), so
/// "Élodie" files under E. Code points break any remaining tie so the order
/// is total.
fn collate_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collate_names(&mut Collator::default(), a, b)
}

/// Stable sort of a view by `key`; equal keys keep their incoming order.
pub fn sort_candidates(candidates: &mut [&RankedCandidate], key: SortKey) {
    match key {
        // One collator for the whole sort
        SortKey::Name => {
            let mut collator = Collator::default();
            candidates.sort_by(|a, b| collate_names(&mut collator, a.name(), b.name()));
        }
        _ => candidates.sort_by(|a, b| key.compare(a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::{dataset, record};
    use crate::scoring::rank_candidates;

    fn ids(candidates: &[&RankedCandidate]) -> Vec<u64> {
        candidates.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_sort_by_rank() {
        let data = dataset();
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Rank);
        let ranks: Vec<usize> = view.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_experience_ignores_rank() {
        // years: [5, 12, 3]
        let data = dataset();
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Experience);
        let years: Vec<f64> = view.iter().map(|c| c.candidate.years_experience).collect();
        assert_eq!(years, vec![12.0, 5.0, 3.0]);
    }

    #[test]
    fn test_sort_by_scores_descending() {
        let data = dataset();
        let mut view: Vec<&RankedCandidate> = data.iter().collect();

        sort_candidates(&mut view, SortKey::Crisis);
        assert_eq!(ids(&view), vec![2, 1, 3]);

        sort_candidates(&mut view, SortKey::Sustainability);
        assert_eq!(ids(&view), vec![2, 1, 3]);

        sort_candidates(&mut view, SortKey::Motivation);
        assert_eq!(ids(&view), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let data = rank_candidates(vec![
            record(1, "bea Young", 1.0, (50.0, 50.0, 50.0)),
            record(2, "Aaron Ng", 1.0, (50.0, 50.0, 50.0)),
            record(3, "Zoe Park", 1.0, (50.0, 50.0, 50.0)),
            record(4, "Ben Ito", 1.0, (50.0, 50.0, 50.0)),
        ]);
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Name);
        let names: Vec<&str> = view.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Aaron Ng", "bea Young", "Ben Ito", "Zoe Park"]);
    }

    #[test]
    fn test_sort_by_name_follows_locale_order() {
        let data = rank_candidates(vec![
            record(1, "Zoe Park", 1.0, (50.0, 50.0, 50.0)),
            record(2, "Élodie Martin", 1.0, (50.0, 50.0, 50.0)),
            record(3, "Felix Ono", 1.0, (50.0, 50.0, 50.0)),
            record(4, "Eamon Reyes", 1.0, (50.0, 50.0, 50.0)),
        ]);
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Name);
        let names: Vec<&str> = view.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Eamon Reyes", "Élodie Martin", "Felix Ono", "Zoe Park"]
        );

        // The comparator used outside sort_candidates agrees
        assert_eq!(
            SortKey::Name.compare(&data[1], &data[2]),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_by_name_is_total() {
        assert_eq!(compare_names("Ana Ruiz", "Ana Ruiz"), Ordering::Equal);
        assert_ne!(compare_names("ana ruiz", "Ana Ruiz"), Ordering::Equal);
    }

    #[test]
    fn test_sort_does_not_touch_rank() {
        let data = dataset();
        let before: Vec<(u64, usize)> = data.iter().map(|c| (c.id(), c.rank)).collect();
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Motivation);
        let mut after: Vec<(u64, usize)> = view.iter().map(|c| (c.id(), c.rank)).collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let data = rank_candidates(vec![
            record(1, "A", 4.0, (70.0, 50.0, 50.0)),
            record(2, "B", 9.0, (70.0, 50.0, 50.0)),
            record(3, "C", 4.0, (70.0, 50.0, 50.0)),
        ]);
        let mut view: Vec<&RankedCandidate> = data.iter().collect();
        sort_candidates(&mut view, SortKey::Experience);
        assert_eq!(ids(&view), vec![2, 1, 3]);
        sort_candidates(&mut view, SortKey::Experience);
        assert_eq!(ids(&view), vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("rank".parse::<SortKey>().unwrap(), SortKey::Rank);
        assert_eq!(" Motivation ".parse::<SortKey>().unwrap(), SortKey::Motivation);
        assert!("salary".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_cycle_sort_keys() {
        assert_eq!(SortKey::Rank.next(), SortKey::Name);
        assert_eq!(SortKey::Motivation.next(), SortKey::Rank);
        assert_eq!(SortKey::Rank.previous(), SortKey::Motivation);
        let mut key = SortKey::Crisis;
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::Crisis);
    }

    #[test]
    fn test_sort_key_display_matches_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }
}
