use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{CandidateRecord, RankedCandidate};
use crate::scoring::rank_candidates;

/// Dataset compiled into the binary, used when no `--data` path is given.
const BUNDLED_DATASET: &str = include_str!("../../data/candidates.json");

/// Failures while turning the input document into the ranked dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset {origin} is invalid:\n  - {}", .errors.join("\n  - "))]
    Invalid { origin: String, errors: Vec<String> },
}

/// Load and rank the dataset from `path`, or the bundled one when `None`.
pub fn load_dataset(path: Option<&Path>) -> Result<Vec<RankedCandidate>, DatasetError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_dataset(&content, &path.display().to_string())
        }
        None => parse_dataset(BUNDLED_DATASET, "(bundled)"),
    }
}

/// Parse, validate and rank a JSON document.
///
/// `origin` only labels error messages.
pub fn parse_dataset(content: &str, origin: &str) -> Result<Vec<RankedCandidate>, DatasetError> {
    let records: Vec<CandidateRecord> =
        serde_json::from_str(content).map_err(|source| DatasetError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    if let Err(errors) = validate_records(&records) {
        return Err(DatasetError::Invalid {
            origin: origin.to_string(),
            errors,
        });
    }

    tracing::debug!(origin, count = records.len(), "loaded candidate records");
    Ok(rank_candidates(records))
}

/// Check records for problems that would make the dashboard misleading.
/// Returns all errors at once (not just the first).
///
/// Scores outside [0, 100] and unusual proficiencies are displayed as-is, so
/// they are only logged.
pub fn validate_records(records: &[CandidateRecord]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        let candidate = &record.candidate;
        let evaluation = &record.evaluation;

        if !seen_ids.insert(candidate.id) {
            errors.push(format!("[{}] id: duplicate id {}", i, candidate.id));
        }

        if evaluation.candidate_id != candidate.id {
            errors.push(format!(
                "[{}] evaluation.candidateId: {} does not match id {}",
                i, evaluation.candidate_id, candidate.id
            ));
        }

        if !candidate.years_experience.is_finite() || candidate.years_experience < 0.0 {
            errors.push(format!(
                "[{}] yearsExperience: must be non-negative, got {}",
                i, candidate.years_experience
            ));
        }

        let scores = [
            ("crisisManagementScore", evaluation.crisis_management_score),
            ("sustainabilityScore", evaluation.sustainability_score),
            ("teamMotivationScore", evaluation.team_motivation_score),
        ];
        for (field, score) in scores {
            if !score.is_finite() {
                errors.push(format!("[{}] evaluation.{}: must be a finite number", i, field));
            } else if !(0.0..=100.0).contains(&score) {
                tracing::debug!(id = candidate.id, field, score, "score outside 0-100");
            }
        }

        for skill in &candidate.skills {
            if !(1..=5).contains(&skill.proficiency) {
                tracing::warn!(
                    id = candidate.id,
                    skill = %skill.name,
                    proficiency = skill.proficiency,
                    "skill proficiency outside 1-5"
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
