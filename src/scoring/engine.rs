use crate::candidates::Evaluation;

/// Weight of the crisis management dimension in the total score.
pub const CRISIS_WEIGHT: f64 = 0.35;
/// Weight of the sustainability knowledge dimension in the total score.
pub const SUSTAINABILITY_WEIGHT: f64 = 0.35;
/// Weight of the team motivation dimension in the total score.
pub const MOTIVATION_WEIGHT: f64 = 0.30;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Crisis Management"
    pub score: f64,          // Raw dimension score
    pub weight: f64,         // e.g. 0.35
    pub contribution: f64,   // score * weight
}

impl FactorContribution {
    /// Weight as a percentage badge ("35%")
    pub fn weight_label(&self) -> String {
        format!("{:.0}%", self.weight * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: [FactorContribution; 3],
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.factors.iter().map(|f| f.contribution).sum()
    }
}

/// Weighted total of the three evaluation dimensions.
///
/// No clamping: out-of-range inputs give the unclamped weighted sum.
pub fn total_score(evaluation: &Evaluation) -> f64 {
    evaluation.crisis_management_score * CRISIS_WEIGHT
        + evaluation.sustainability_score * SUSTAINABILITY_WEIGHT
        + evaluation.team_motivation_score * MOTIVATION_WEIGHT
}

/// Per-dimension view of [`total_score`], in display order.
pub fn score_breakdown(evaluation: &Evaluation) -> ScoreBreakdown {
    let factor = |label, score: f64, weight: f64| FactorContribution {
        label,
        score,
        weight,
        contribution: score * weight,
    };

    ScoreBreakdown {
        factors: [
            factor(
                "Crisis Management",
                evaluation.crisis_management_score,
                CRISIS_WEIGHT,
            ),
            factor(
                "Sustainability Knowledge",
                evaluation.sustainability_score,
                SUSTAINABILITY_WEIGHT,
            ),
            factor(
                "Team Motivation",
                evaluation.team_motivation_score,
                MOTIVATION_WEIGHT,
            ),
        ],
    }
}

/// One-decimal display of a score.
///
/// Exact halves round away from zero (72.25 -> "72.3"). A double is an exact
/// half at the second decimal only when four times it is an odd integer.
pub fn format_score(score: f64) -> String {
    let quarters = score * 4.0;
    let exact_half = score.is_finite()
        && score.abs() < 1e12
        && quarters.fract() == 0.0
        && quarters % 2.0 != 0.0;
    let value = if exact_half {
        score + 0.05f64.copysign(score)
    } else if score == 0.0 {
        0.0 // no "-0.0"
    } else {
        score
    };
    format!("{:.1}", value)
}

/// Nearest integer for heatmap cells, halves rounding toward +infinity.
pub fn round_half_up(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(crisis: f64, sustainability: f64, motivation: f64) -> Evaluation {
        Evaluation {
            candidate_id: 1,
            crisis_management_score: crisis,
            sustainability_score: sustainability,
            team_motivation_score: motivation,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = CRISIS_WEIGHT + SUSTAINABILITY_WEIGHT + MOTIVATION_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_score_example() {
        // 90*0.35 + 80*0.35 + 70*0.30 = 31.5 + 28 + 21
        let score = total_score(&evaluation(90.0, 80.0, 70.0));
        assert!((score - 80.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_score_matches_formula() {
        let cases = [
            (0.0, 0.0, 0.0),
            (100.0, 100.0, 100.0),
            (72.4, 88.1, 64.9),
            (55.0, 99.5, 12.25),
        ];
        for (c, s, m) in cases {
            let expected = 0.35 * c + 0.35 * s + 0.30 * m;
            assert!((total_score(&evaluation(c, s, m)) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_total_score_is_not_clamped() {
        let score = total_score(&evaluation(150.0, -20.0, 100.0));
        // 52.5 - 7 + 30
        assert!((score - 75.5).abs() < 1e-9);

        let score = total_score(&evaluation(200.0, 200.0, 200.0));
        assert!((score - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let eval = evaluation(91.2, 77.7, 68.3);
        let breakdown = score_breakdown(&eval);
        assert!((breakdown.total() - total_score(&eval)).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_labels_and_weights() {
        let breakdown = score_breakdown(&evaluation(90.0, 80.0, 70.0));
        let labels: Vec<_> = breakdown.factors.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            ["Crisis Management", "Sustainability Knowledge", "Team Motivation"]
        );
        let weights: Vec<_> = breakdown.factors.iter().map(|f| f.weight_label()).collect();
        assert_eq!(weights, ["35%", "35%", "30%"]);
        assert!((breakdown.factors[2].contribution - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_score_rounds_halves_away_from_zero() {
        assert_eq!(format_score(72.25), "72.3");
        assert_eq!(format_score(0.25), "0.3");
        assert_eq!(format_score(80.75), "80.8");
        assert_eq!(format_score(-0.25), "-0.3");
        assert_eq!(format_score(85.25), "85.3");
    }

    #[test]
    fn test_format_score_plain_values() {
        assert_eq!(format_score(90.0), "90.0");
        assert_eq!(format_score(77.456), "77.5");
        assert_eq!(format_score(64.04), "64.0");
        // 0.15 is not an exact half in binary (slightly below), so it rounds down
        assert_eq!(format_score(0.15), "0.1");
        assert_eq!(format_score(-0.0), "0.0");
        assert_eq!(format_score(150.0), "150.0");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(72.5), 73);
        assert_eq!(round_half_up(72.4), 72);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }
}
