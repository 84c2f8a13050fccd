pub mod loader;
pub mod types;

pub use loader::{load_dataset, parse_dataset, validate_records, DatasetError};
pub use types::{
    format_years, Candidate, CandidateRecord, EducationLevel, Evaluation, RankedCandidate, Skill,
};
