use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::candidates::RankedCandidate;
use crate::pipeline::{format_mean, DatasetStats};
use crate::scoring::{
    format_score, proficiency_band, rank_badge, round_half_up, score_breakdown, HeatLevel,
    ScoreBand, HEAT_LEGEND,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn paint_band(text: &str, band: ScoreBand) -> String {
    match band {
        ScoreBand::Excellent => text.green().to_string(),
        ScoreBand::Strong => text.cyan().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Low => text.truecolor(255, 146, 43).to_string(),
    }
}

/// Format a score to one decimal inside a right-aligned column, colored by band
fn score_cell(score: f64, width: usize, use_colors: bool) -> String {
    let text = format!("{:>width$}", format_score(score), width = width);
    if use_colors {
        paint_band(&text, ScoreBand::of(score))
    } else {
        text
    }
}

fn badge_cell(rank: usize, use_colors: bool) -> String {
    let text = format!("{:>4}", rank_badge(rank));
    if !use_colors {
        return text;
    }
    match rank {
        1 => text.yellow().bold().to_string(),
        2 => text.white().bold().to_string(),
        3 => text.truecolor(205, 127, 50).bold().to_string(),
        _ => text.dimmed().to_string(),
    }
}

/// Format the leaderboard as a table with a header row.
/// Columns: Rank, Candidate, Exp, Education, Crisis, Sustain, Motiv, Total
pub fn format_leaderboard(rows: &[&RankedCandidate], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No candidates match.".to_string();
    }

    // Everything but the name column has a fixed width
    let fixed_width = 4 + 2 + 2 + 5 + 2 + 11 + 2 + (6 + 2) * 4;
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 12 => (width - fixed_width).min(28),
        Some(_) => 12,
        None => 28,
    };

    let header = format!(
        "{:>4}  {:<name_width$}  {:>5}  {:<11}  {:>6}  {:>6}  {:>6}  {:>6}",
        "Rank",
        "Candidate",
        "Exp",
        "Education",
        "Crisis",
        "Sust.",
        "Motiv",
        "Total",
        name_width = name_width
    );
    let header = if use_colors {
        header.bold().to_string()
    } else {
        header
    };

    let lines = rows.iter().map(|c| {
        let name = format!(
            "{:<name_width$}",
            truncate_name(c.name(), name_width),
            name_width = name_width
        );
        let total = score_cell(c.total_score, 6, use_colors);
        format!(
            "{}  {}  {:>4}y  {:<11}  {}  {}  {}  {}",
            badge_cell(c.rank, use_colors),
            name,
            c.candidate.experience_label(),
            c.candidate.education_level.label(),
            score_cell(c.evaluation.crisis_management_score, 6, use_colors),
            score_cell(c.evaluation.sustainability_score, 6, use_colors),
            score_cell(c.evaluation.team_motivation_score, 6, use_colors),
            if use_colors { total.bold().to_string() } else { total },
        )
    });

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format candidates as tab-separated values for scripting
/// Columns: rank, id, name, total, crisis, sustainability, motivation (no headers, no colors)
pub fn format_tsv(rows: &[&RankedCandidate]) -> String {
    rows.iter()
        .map(|c| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                c.rank,
                c.id(),
                c.name(),
                format_score(c.total_score),
                format_score(c.evaluation.crisis_management_score),
                format_score(c.evaluation.sustainability_score),
                format_score(c.evaluation.team_motivation_score),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single candidate with detailed multi-line output
pub fn format_candidate_detail(c: &RankedCandidate, use_colors: bool) -> String {
    let candidate = &c.candidate;
    let mut lines = Vec::new();

    let heading = format!("[{}] {}  (Rank #{})", candidate.initials(), candidate.name, c.rank);
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });
    lines.push(format!("  Email: {}", candidate.email));
    lines.push(format!("  Phone: {}", candidate.phone));
    lines.push(format!(
        "  Experience: {} years | Total: {} | Certifications: {}",
        candidate.experience_label(),
        format_score(c.total_score),
        candidate.certifications.len()
    ));
    lines.push(format!("  Education: {}", candidate.education_level));
    if !candidate.summary.is_empty() {
        let summary = format!("  \"{}\"", candidate.summary);
        lines.push(if use_colors {
            summary.italic().to_string()
        } else {
            summary
        });
    }

    lines.push(String::new());
    lines.push("  AI Evaluation Scores:".to_string());
    for factor in &score_breakdown(&c.evaluation).factors {
        lines.push(format!(
            "    {:<26} {:>4}  {}  {}",
            factor.label,
            factor.weight_label(),
            score_cell(factor.score, 5, use_colors),
            score_bar(factor.score, 20, use_colors),
        ));
    }

    lines.push(String::new());
    let skills = if candidate.skills.is_empty() {
        "(none)".to_string()
    } else {
        candidate
            .skills
            .iter()
            .map(|s| {
                let text = format!("{} ({}/5)", s.name, s.proficiency);
                if use_colors {
                    match proficiency_band(s.proficiency) {
                        ScoreBand::Low => text.dimmed().to_string(),
                        band => paint_band(&text, band),
                    }
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("  Skills: {}", skills));
    let certifications = if candidate.certifications.is_empty() {
        "(none)".to_string()
    } else {
        candidate.certifications.join(", ")
    };
    lines.push(format!("  Certifications: {}", certifications));

    lines.join("\n")
}

/// Horizontal bar for a 0-100 score; out-of-range scores saturate
fn score_bar(score: f64, width: usize, use_colors: bool) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    if use_colors {
        paint_band(&bar, ScoreBand::of(score))
    } else {
        bar
    }
}

fn heat_cell(score: f64, use_colors: bool) -> String {
    let text = format!(" {:>3} ", round_half_up(score));
    if !use_colors {
        return text;
    }
    let level = HeatLevel::of(score);
    let (r, g, b) = level.rgb();
    if level.is_light() {
        text.black().on_truecolor(r, g, b).to_string()
    } else {
        text.white().on_truecolor(r, g, b).to_string()
    }
}

/// Format the per-candidate heatmap: first name plus one rounded cell per metric
pub fn format_heatmap(rows: &[&RankedCandidate], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No candidates match.".to_string();
    }

    let mut lines = vec![format!("{:<12} {:^5} {:^5} {:^5}", "", "Crisis", "Sust.", "Motiv")];
    lines.extend(rows.iter().map(|c| {
        format!(
            "{:<12} {}{}{}",
            truncate_name(c.candidate.first_name(), 12),
            heat_cell(c.evaluation.crisis_management_score, use_colors),
            heat_cell(c.evaluation.sustainability_score, use_colors),
            heat_cell(c.evaluation.team_motivation_score, use_colors),
        )
    }));

    let legend = HEAT_LEGEND
        .iter()
        .map(|(level, label)| {
            if use_colors {
                let (r, g, b) = level.rgb();
                format!("{} {}", "  ".on_truecolor(r, g, b), label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(String::new());
    lines.push(format!("Score Legend: {}", legend));

    lines.join("\n")
}

/// Format full-dataset averages; undefined means show a placeholder
pub fn format_stats(stats: Option<&DatasetStats>) -> String {
    format!(
        "Average Crisis Score: {} | Average Sustainability: {} | Average Motivation: {}",
        format_mean(stats, |s| s.avg_crisis),
        format_mean(stats, |s| s.avg_sustainability),
        format_mean(stats, |s| s.avg_motivation),
    )
}
