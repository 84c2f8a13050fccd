pub mod bands;
pub mod engine;
pub mod rank;

pub use bands::{proficiency_band, rank_badge, HeatLevel, ScoreBand, HEAT_LEGEND};
pub use engine::{
    format_score, round_half_up, score_breakdown, total_score, FactorContribution, ScoreBreakdown, CRISIS_WEIGHT,
    MOTIVATION_WEIGHT, SUSTAINABILITY_WEIGHT,
};
pub use rank::rank_candidates;
