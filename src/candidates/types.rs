use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8, // 1-5 scale
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Associate,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    PhD,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhD => "PhD",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub years_experience: f64,
    pub education_level: EducationLevel,
    pub certifications: Vec<String>,
    pub skills: Vec<Skill>,
    pub summary: String,
}

impl Candidate {
    /// Avatar text: first character of each name part ("Ada King" -> "AK")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// First name part, used where horizontal space is tight
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Years of experience without a trailing ".0" for whole numbers
    pub fn experience_label(&self) -> String {
        format_years(self.years_experience)
    }
}

/// The three evaluation dimensions produced upstream for one candidate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub candidate_id: u64,
    pub crisis_management_score: f64,
    pub sustainability_score: f64,
    pub team_motivation_score: f64,
}

/// One entry of the input document: a candidate with its embedded evaluation.
///
/// Any `totalScore` or `rank` keys in the document are ignored; both are
/// derived at load time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub evaluation: Evaluation,
}

/// A candidate joined with its evaluation plus the two derived fields.
///
/// Built once at load and never mutated; `rank` always reflects the position
/// in the full dataset, even when shown inside a filtered or re-sorted view.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub evaluation: Evaluation,
    pub total_score: f64,
    pub rank: usize,
}

impl RankedCandidate {
    pub fn id(&self) -> u64 {
        self.candidate.id
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }
}

pub fn format_years(years: f64) -> String {
    if years.fract() == 0.0 && years.abs() < 1e15 {
        format!("{}", years as i64)
    } else {
        format!("{}", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate(name: &str) -> Candidate {
        Candidate {
            id: 1,
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            phone: "555-0100".to_string(),
            years_experience: 8.0,
            education_level: EducationLevel::Bachelor,
            certifications: vec![],
            skills: vec![],
            summary: String::new(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample_candidate("Maria Lopez").initials(), "ML");
        assert_eq!(sample_candidate("Jean Paul Sartre").initials(), "JPS");
        assert_eq!(sample_candidate("Cher").initials(), "C");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(sample_candidate("Maria Lopez").first_name(), "Maria");
        assert_eq!(sample_candidate("").first_name(), "");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(12.0), "12");
        assert_eq!(format_years(0.0), "0");
        assert_eq!(format_years(6.5), "6.5");
    }

    #[test]
    fn test_education_level_json_spelling() {
        let level: EducationLevel = serde_json::from_str("\"High School\"").unwrap();
        assert_eq!(level, EducationLevel::HighSchool);
        let level: EducationLevel = serde_json::from_str("\"PhD\"").unwrap();
        assert_eq!(level, EducationLevel::PhD);
        assert!(serde_json::from_str::<EducationLevel>("\"Doctorate\"").is_err());
    }

    #[test]
    fn test_record_ignores_precomputed_fields() {
        let json = r#"{
            "id": 7,
            "name": "Noor Haddad",
            "email": "noor@example.com",
            "phone": "555-0107",
            "yearsExperience": 9,
            "educationLevel": "Master",
            "certifications": ["ISO 14001"],
            "skills": [{"name": "Lean", "proficiency": 4}],
            "summary": "Plant lead.",
            "evaluation": {
                "candidateId": 7,
                "crisisManagementScore": 88.5,
                "sustainabilityScore": 91,
                "teamMotivationScore": 79
            },
            "totalScore": 1.0,
            "rank": 99
        }"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.candidate.id, 7);
        assert_eq!(record.candidate.years_experience, 9.0);
        assert_eq!(record.candidate.skills[0].proficiency, 4);
        assert_eq!(record.evaluation.sustainability_score, 91.0);
    }
}
