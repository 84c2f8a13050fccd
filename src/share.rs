use std::io::{IsTerminal, Write};

use anyhow::{bail, Context, Result};
use crossterm::clipboard::CopyToClipboard;

use crate::candidates::RankedCandidate;
use crate::scoring::format_score;

/// Plain-text profile summary handed to the clipboard by "copy profile".
pub fn share_text(c: &RankedCandidate) -> String {
    format!(
        "Check out {name} - Recycling Manager Candidate\n\
         Score: {total}/100 (Rank #{rank})\n\
         Experience: {years} years\n\
         Education: {education}\n\
         \n\
         Key Scores:\n\
         - Crisis Management: {crisis}\n\
         - Sustainability: {sustainability}\n\
         - Team Motivation: {motivation}",
        name = c.candidate.name,
        total = format_score(c.total_score),
        rank = c.rank,
        years = c.candidate.experience_label(),
        education = c.candidate.education_level,
        crisis = format_score(c.evaluation.crisis_management_score),
        sustainability = format_score(c.evaluation.sustainability_score),
        motivation = format_score(c.evaluation.team_motivation_score),
    )
}

/// Put `text` on the system clipboard through the terminal (OSC 52).
///
/// Terminals without OSC 52 support silently ignore the sequence.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> Result<()> {
    crossterm::execute!(out, CopyToClipboard::to_clipboard_from(text))
        .context("Failed to write clipboard sequence to terminal")?;
    Ok(())
}

/// Copy `text` through whichever standard stream is attached to a terminal.
///
/// stdout is preferred; when it is redirected the sequence goes to stderr
/// instead. With neither on a terminal there is nothing to receive OSC 52,
/// so this fails rather than leaking the escape into a pipe or file.
pub fn copy_to_terminal_clipboard(text: &str) -> Result<()> {
    if std::io::stdout().is_terminal() {
        copy_to_clipboard(&mut std::io::stdout(), text)
    } else if std::io::stderr().is_terminal() {
        copy_to_clipboard(&mut std::io::stderr(), text)
    } else {
        bail!("no terminal attached to stdout or stderr to receive the clipboard sequence")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{Candidate, EducationLevel, Evaluation};

    fn sample() -> RankedCandidate {
        RankedCandidate {
            candidate: Candidate {
                id: 1,
                name: "Maria Lopez".to_string(),
                email: "maria@example.com".to_string(),
                phone: "555-0101".to_string(),
                years_experience: 12.0,
                education_level: EducationLevel::HighSchool,
                certifications: vec![],
                skills: vec![],
                summary: String::new(),
            },
            evaluation: Evaluation {
                candidate_id: 1,
                crisis_management_score: 90.0,
                sustainability_score: 80.0,
                team_motivation_score: 70.0,
            },
            total_score: 80.5,
            rank: 3,
        }
    }

    #[test]
    fn test_share_text_template() {
        let expected = "Check out Maria Lopez - Recycling Manager Candidate\n\
                        Score: 80.5/100 (Rank #3)\n\
                        Experience: 12 years\n\
                        Education: High School\n\
                        \n\
                        Key Scores:\n\
                        - Crisis Management: 90.0\n\
                        - Sustainability: 80.0\n\
                        - Team Motivation: 70.0";
        assert_eq!(share_text(&sample()), expected);
    }

    #[test]
    fn test_share_text_one_decimal() {
        let mut c = sample();
        c.total_score = 77.456;
        c.evaluation.sustainability_score = 64.04;
        c.candidate.years_experience = 6.5;
        let text = share_text(&c);
        assert!(text.contains("Score: 77.5/100"));
        assert!(text.contains("- Sustainability: 64.0"));
        assert!(text.contains("Experience: 6.5 years"));
    }

    #[test]
    fn test_share_text_rounds_exact_halves_up() {
        let mut c = sample();
        c.evaluation.crisis_management_score = 72.25;
        c.evaluation.sustainability_score = 80.75;
        c.evaluation.team_motivation_score = 0.25;
        c.total_score = 85.25;
        let text = share_text(&c);
        assert!(text.contains("Score: 85.3/100"));
        assert!(text.contains("- Crisis Management: 72.3"));
        assert!(text.contains("- Sustainability: 80.8"));
        assert!(text.contains("- Team Motivation: 0.3"));
    }

    #[test]
    fn test_share_text_field_order() {
        let text = share_text(&sample());
        let positions: Vec<usize> = [
            "Maria Lopez",
            "80.5",
            "#3",
            "12 years",
            "High School",
            "Crisis Management",
            "Sustainability:",
            "Team Motivation",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_copy_to_clipboard_emits_osc52() {
        let mut out = Vec::new();
        copy_to_clipboard(&mut out, "hello").unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]52;"));
        // base64("hello")
        assert!(written.contains("aGVsbG8="));
    }
}
