use crate::candidates::{CandidateRecord, RankedCandidate};

use super::engine::total_score;

/// Score every record and assign dense 1-based ranks by descending total.
///
/// Ties keep their input order (the sort is stable), so the same document
/// always produces the same ranks. The returned dataset stays in input order;
/// only the `rank` field reflects the ordering.
pub fn rank_candidates(records: Vec<CandidateRecord>) -> Vec<RankedCandidate> {
    let totals: Vec<f64> = records.iter().map(|r| total_score(&r.evaluation)).collect();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| totals[b].total_cmp(&totals[a]));

    let mut ranks = vec![0; records.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }

    records
        .into_iter()
        .zip(totals)
        .zip(ranks)
        .map(|((record, total_score), rank)| RankedCandidate {
            candidate: record.candidate,
            evaluation: record.evaluation,
            total_score,
            rank,
        })
        .collect()
}
