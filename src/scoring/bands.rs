//! Score thresholds shared by the table, heatmap and detail renderers.
//!
//! Scores are never clamped, so anything above 100 lands in the top bucket
//! and anything below 0 in the bottom one.

/// Coarse quality band used to color scores and score bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Strong,
    Fair,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::Excellent
        } else if score >= 75.0 {
            ScoreBand::Strong
        } else if score >= 65.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Low
        }
    }
}

/// Eight-step heat scale for the heatmap grid, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeatLevel {
    Outstanding, // 90+
    Excellent,   // 85-89
    VeryGood,    // 80-84
    Good,        // 75-79
    Solid,       // 70-74
    Fair,        // 65-69
    Weak,        // 60-64
    Poor,        // <60
}

impl HeatLevel {
    pub fn of(score: f64) -> Self {
        const STEPS: [(f64, HeatLevel); 7] = [
            (90.0, HeatLevel::Outstanding),
            (85.0, HeatLevel::Excellent),
            (80.0, HeatLevel::VeryGood),
            (75.0, HeatLevel::Good),
            (70.0, HeatLevel::Solid),
            (65.0, HeatLevel::Fair),
            (60.0, HeatLevel::Weak),
        ];
        STEPS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(HeatLevel::Poor)
    }

    /// RGB color, from dark green down to red
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            HeatLevel::Outstanding => (0x2b, 0x8a, 0x3e),
            HeatLevel::Excellent => (0x37, 0xb2, 0x4d),
            HeatLevel::VeryGood => (0x51, 0xcf, 0x66),
            HeatLevel::Good => (0x8c, 0xe9, 0x9a),
            HeatLevel::Solid => (0xb2, 0xf2, 0xbb),
            HeatLevel::Fair => (0xff, 0xd4, 0x3b),
            HeatLevel::Weak => (0xfa, 0xb0, 0x05),
            HeatLevel::Poor => (0xff, 0x6b, 0x6b),
        }
    }

    /// True when dark text reads better than light text on this level's color
    pub fn is_light(&self) -> bool {
        matches!(
            self,
            HeatLevel::Good | HeatLevel::Solid | HeatLevel::Fair | HeatLevel::Weak
        )
    }
}

/// Legend entries shown under the heatmap: (representative level, label)
pub const HEAT_LEGEND: [(HeatLevel, &str); 5] = [
    (HeatLevel::Outstanding, "90+"),
    (HeatLevel::VeryGood, "80-89"),
    (HeatLevel::Solid, "70-79"),
    (HeatLevel::Fair, "60-69"),
    (HeatLevel::Poor, "<60"),
];

/// Medal text for the podium, `#N` for everyone else
pub fn rank_badge(rank: usize) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("#{}", n),
    }
}

/// Proficiency (1-5) bucket: 4+ strong, 3 moderate, else basic
pub fn proficiency_band(proficiency: u8) -> ScoreBand {
    match proficiency {
        p if p >= 4 => ScoreBand::Excellent,
        3 => ScoreBand::Fair,
        _ => ScoreBand::Low,
    }
}
