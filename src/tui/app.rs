use chrono::{DateTime, Local};
use ratatui::widgets::TableState;
use std::time::Instant;

use crate::candidates::RankedCandidate;
use crate::pipeline::{self, DatasetStats, SortKey, LEADERBOARD_SIZE};
use crate::share::share_text;
use crate::tui::theme::ThemeColors;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Leaderboard,
    Heatmap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Detail,
    Help,
}

/// Single owner of all dashboard state.
///
/// The dataset is read-only; everything else is transient view state that
/// key handlers mutate through the methods below.
pub struct App {
    pub dataset: Vec<RankedCandidate>,
    pub stats: Option<DatasetStats>,
    pub search: String,
    pub sort_key: SortKey,
    pub default_sort: SortKey,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub leaderboard_state: TableState,
    pub heatmap_state: TableState,
    pub detail_id: Option<u64>,
    pub flash_message: Option<(String, Instant)>,
    pub pending_copy: Option<String>,
    pub should_quit: bool,
    pub theme: ThemeColors,
    pub loaded_at: DateTime<Local>,
}

impl App {
    pub fn new(dataset: Vec<RankedCandidate>, default_sort: SortKey, theme: ThemeColors) -> Self {
        // Statistics always describe the full dataset, so compute them once
        let stats = DatasetStats::compute(&dataset);

        let mut app = Self {
            dataset,
            stats,
            search: String::new(),
            sort_key: default_sort,
            default_sort,
            focus: Focus::Leaderboard,
            input_mode: InputMode::Normal,
            leaderboard_state: TableState::default(),
            heatmap_state: TableState::default(),
            detail_id: None,
            flash_message: None,
            pending_copy: None,
            should_quit: false,
            theme,
            loaded_at: Local::now(),
        };
        app.reset_selection();
        app
    }

    /// Current filtered and sorted view, recomputed on every call
    pub fn visible(&self) -> Vec<&RankedCandidate> {
        pipeline::view(&self.dataset, &self.search, self.sort_key)
    }

    fn row_count(&self, focus: Focus) -> usize {
        let visible = self.visible().len();
        match focus {
            Focus::Leaderboard => visible.min(LEADERBOARD_SIZE),
            Focus::Heatmap => visible,
        }
    }

    fn focused_state(&mut self) -> &mut TableState {
        match self.focus {
            Focus::Leaderboard => &mut self.leaderboard_state,
            Focus::Heatmap => &mut self.heatmap_state,
        }
    }

    /// Select the first row of both tables (or nothing when the view is empty)
    fn reset_selection(&mut self) {
        let first = |count: usize| if count == 0 { None } else { Some(0) };
        let leaderboard = first(self.row_count(Focus::Leaderboard));
        let heatmap = first(self.row_count(Focus::Heatmap));
        self.leaderboard_state.select(leaderboard);
        self.heatmap_state.select(heatmap);
    }

    pub fn next_row(&mut self) {
        let count = self.row_count(self.focus);
        if count == 0 {
            return;
        }
        let state = self.focused_state();
        let i = match state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let count = self.row_count(self.focus);
        if count == 0 {
            return;
        }
        let state = self.focused_state();
        let i = match state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    /// Candidate under the cursor of the focused table
    pub fn selected_candidate(&self) -> Option<&RankedCandidate> {
        let state = match self.focus {
            Focus::Leaderboard => &self.leaderboard_state,
            Focus::Heatmap => &self.heatmap_state,
        };
        let visible = self.visible();
        state.selected().and_then(|i| visible.get(i).copied())
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Leaderboard => Focus::Heatmap,
            Focus::Heatmap => Focus::Leaderboard,
        };
    }

    /// Enter search mode; keystrokes edit the term and refilter live
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.reset_selection();
        }
    }

    /// Leave search mode keeping the term
    pub fn confirm_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Leave search mode and clear the term
    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        if !self.search.is_empty() {
            self.search.clear();
            self.reset_selection();
        }
    }

    pub fn cycle_sort(&mut self, forward: bool) {
        self.sort_key = if forward {
            self.sort_key.next()
        } else {
            self.sort_key.previous()
        };
        self.reset_selection();
        self.show_flash(format!("Sort: {}", self.sort_key.label()));
    }

    /// Clear the search and restore the default sort
    pub fn reset(&mut self) {
        self.search.clear();
        self.sort_key = self.default_sort;
        self.reset_selection();
        self.show_flash("Reset filters".to_string());
    }

    /// Open the detail popup for the candidate under the cursor
    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_candidate().map(|c| c.id()) {
            self.detail_id = Some(id);
            self.input_mode = InputMode::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Candidate shown in the detail popup
    pub fn detail_candidate(&self) -> Option<&RankedCandidate> {
        let id = self.detail_id?;
        self.dataset.iter().find(|c| c.id() == id)
    }

    /// Queue the share text of the detail candidate for the clipboard.
    /// The event loop performs the terminal write.
    pub fn copy_profile(&mut self) {
        let Some((text, name)) = self
            .detail_candidate()
            .map(|c| (share_text(c), c.name().to_string()))
        else {
            return;
        };
        self.pending_copy = Some(text);
        self.show_flash(format!("Copied profile: {}", name));
    }

    pub fn take_pending_copy(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{Candidate, CandidateRecord, EducationLevel, Evaluation};
    use crate::scoring::rank_candidates;
    use std::time::Duration;

    fn record(id: u64, name: &str, years: f64, score: f64) -> CandidateRecord {
        CandidateRecord {
            candidate: Candidate {
                id,
                name: name.to_string(),
                email: format!("c{}@example.com", id),
                phone: "555-0100".to_string(),
                years_experience: years,
                education_level: EducationLevel::Associate,
                certifications: vec![],
                skills: vec![],
                summary: String::new(),
            },
            evaluation: Evaluation {
                candidate_id: id,
                crisis_management_score: score,
                sustainability_score: score,
                team_motivation_score: score,
            },
        }
    }

    /// `n` candidates, id i scores 100 - i so rank == id
    fn app_with(n: u64) -> App {
        let records = (1..=n)
            .map(|i| record(i, &format!("Person {}", i), i as f64, 100.0 - i as f64))
            .collect();
        App::new(rank_candidates(records), SortKey::Rank, ThemeColors::dark())
    }

    #[test]
    fn test_initial_state() {
        let app = app_with(3);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.focus, Focus::Leaderboard);
        assert_eq!(app.leaderboard_state.selected(), Some(0));
        assert_eq!(app.selected_candidate().map(|c| c.rank), Some(1));
        assert!(app.stats.is_some());
    }

    #[test]
    fn test_empty_dataset() {
        let mut app = App::new(vec![], SortKey::Rank, ThemeColors::dark());
        assert!(app.stats.is_none());
        assert_eq!(app.leaderboard_state.selected(), None);
        app.next_row();
        app.open_detail();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_navigation_wraps_within_leaderboard() {
        let mut app = app_with(15);
        app.previous_row();
        assert_eq!(app.leaderboard_state.selected(), Some(9));
        app.next_row();
        assert_eq!(app.leaderboard_state.selected(), Some(0));
    }

    #[test]
    fn test_heatmap_navigates_whole_view() {
        let mut app = app_with(15);
        app.toggle_focus();
        app.previous_row();
        assert_eq!(app.heatmap_state.selected(), Some(14));
        assert_eq!(app.selected_candidate().map(|c| c.rank), Some(15));
        // Leaderboard cursor untouched
        assert_eq!(app.leaderboard_state.selected(), Some(0));
    }

    #[test]
    fn test_search_refilters_live() {
        let mut app = app_with(12);
        app.start_search();
        for c in "person 1".chars() {
            app.push_search_char(c);
        }
        // Person 1, 10, 11, 12
        assert_eq!(app.visible().len(), 4);
        app.pop_search_char();
        assert_eq!(app.visible().len(), 12);
        app.confirm_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search, "person ");
    }

    #[test]
    fn test_cancel_search_clears_term() {
        let mut app = app_with(5);
        app.start_search();
        app.push_search_char('3');
        assert_eq!(app.visible().len(), 1);
        app.cancel_search();
        assert!(app.search.is_empty());
        assert_eq!(app.visible().len(), 5);
    }

    #[test]
    fn test_search_without_matches_clears_selection() {
        let mut app = app_with(5);
        app.push_search_char('z');
        assert!(app.visible().is_empty());
        assert_eq!(app.leaderboard_state.selected(), None);
        assert!(app.selected_candidate().is_none());
    }

    #[test]
    fn test_sort_keeps_ranks() {
        let mut app = app_with(4);
        app.cycle_sort(true);
        assert_eq!(app.sort_key, SortKey::Name);
        app.cycle_sort(true);
        assert_eq!(app.sort_key, SortKey::Experience);
        let ranks: Vec<usize> = app.visible().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![4, 3, 2, 1]);
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_reset_restores_default_sort() {
        let mut app = app_with(4);
        app.push_search_char('2');
        app.cycle_sort(false);
        app.reset();
        assert!(app.search.is_empty());
        assert_eq!(app.sort_key, SortKey::Rank);
        assert_eq!(app.visible().len(), 4);
    }

    #[test]
    fn test_detail_and_copy() {
        let mut app = app_with(3);
        app.next_row();
        app.open_detail();
        assert_eq!(app.input_mode, InputMode::Detail);
        assert_eq!(app.detail_candidate().map(|c| c.rank), Some(2));

        app.copy_profile();
        let text = app.take_pending_copy().unwrap();
        assert!(text.starts_with("Check out Person 2 - Recycling Manager Candidate"));
        assert!(text.contains("(Rank #2)"));
        assert!(app.take_pending_copy().is_none());
        let flash = app.flash_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(flash, Some("Copied profile: Person 2"));

        app.close_detail();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_flash_expires_after_three_seconds() {
        let mut app = app_with(1);
        app.show_flash("Sort: Name (A-Z)".to_string());
        app.update_flash();
        assert!(app.flash_message.is_some());

        let Some(stale) = Instant::now().checked_sub(Duration::from_secs(FLASH_SECS + 1)) else {
            return; // clock too close to its origin to backdate
        };
        app.flash_message = Some(("Reset filters".to_string(), stale));
        app.update_flash();
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app_with(1);
        app.show_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.dismiss_help();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
