pub mod formatter;

pub use formatter::{
    format_candidate_detail, format_heatmap, format_leaderboard, format_stats, format_tsv,
    should_use_colors,
};
