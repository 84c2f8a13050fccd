//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeChoice;
use crate::scoring::{HeatLevel, ScoreBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score-based colors
    pub score_excellent: Color,
    pub score_strong: Color,
    pub score_fair: Color,
    pub score_low: Color,
    pub bar_empty: Color,

    // Rank badges
    pub gold: Color,
    pub silver: Color,
    pub bronze: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub header_style: Style,
    pub row_selected: Style,
    pub education: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub border: Color,
    pub border_focused: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,

    // Heatmap cell text
    pub heat_text_dark: Color,
    pub heat_text_light: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            score_excellent: Color::Green,
            score_strong: Color::Cyan,
            score_fair: Color::Yellow,
            score_low: Color::Rgb(255, 146, 43),
            bar_empty: Color::DarkGray,
            gold: Color::Rgb(250, 176, 5),
            silver: Color::Rgb(173, 181, 189),
            bronze: Color::Rgb(205, 127, 50),
            row_alt_bg: Color::Indexed(235),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            education: Color::LightBlue,
            muted: Color::Gray,
            title_color: Color::Rgb(32, 201, 151),
            border: Color::Indexed(238),
            border_focused: Color::Rgb(32, 201, 151),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
            heat_text_dark: Color::Black,
            heat_text_light: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            score_excellent: Color::Rgb(43, 138, 62),
            score_strong: Color::Rgb(12, 133, 153),
            score_fair: Color::Rgb(230, 119, 0),
            score_low: Color::Rgb(201, 42, 42),
            bar_empty: Color::Indexed(250),
            gold: Color::Rgb(230, 119, 0),
            silver: Color::Rgb(110, 110, 110),
            bronze: Color::Rgb(160, 82, 45),
            row_alt_bg: Color::Indexed(254),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            education: Color::Blue,
            muted: Color::DarkGray,
            title_color: Color::Rgb(9, 146, 104),
            border: Color::Indexed(248),
            border_focused: Color::Rgb(9, 146, 104),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(43, 138, 62),
            flash_error: Color::Red,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
            heat_text_dark: Color::Black,
            heat_text_light: Color::White,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn band_color(&self, band: ScoreBand) -> Color {
        match band {
            ScoreBand::Excellent => self.score_excellent,
            ScoreBand::Strong => self.score_strong,
            ScoreBand::Fair => self.score_fair,
            ScoreBand::Low => self.score_low,
        }
    }

    /// Returns the color for a score based on its band
    pub fn score_color(&self, score: f64) -> Color {
        self.band_color(ScoreBand::of(score))
    }

    /// Background and text style for a heatmap cell
    pub fn heat_style(&self, score: f64) -> Style {
        let level = HeatLevel::of(score);
        let (r, g, b) = level.rgb();
        let fg = if level.is_light() {
            self.heat_text_dark
        } else {
            self.heat_text_light
        };
        Style::new().bg(Color::Rgb(r, g, b)).fg(fg).bold()
    }

    pub fn rank_style(&self, rank: usize) -> Style {
        match rank {
            1 => Style::new().fg(self.gold).bold(),
            2 => Style::new().fg(self.silver).bold(),
            3 => Style::new().fg(self.bronze).bold(),
            _ => Style::new().fg(self.muted),
        }
    }
}

/// Resolve the configured theme, probing the terminal background for `auto`.
///
/// Must run before the terminal enters raw mode / alternate screen.
pub fn resolve_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                tracing::debug!(error = %e, "could not detect terminal background, using dark theme");
                Theme::Dark
            }
        },
    }
}
