use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::candidates::RankedCandidate;
use crate::pipeline::{format_mean, leaderboard};
use crate::scoring::{
    format_score, proficiency_band, rank_badge, round_half_up, score_breakdown, ScoreBand,
    HEAT_LEGEND,
};
use crate::tui::app::{App, Focus, InputMode};
use crate::tui::theme::ThemeColors;

const TITLE: &str = "♻ Recycling Production Line Manager";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 60 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Filter bar(1) + Body(fill) + Stats(1) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Filter bar
        Constraint::Fill(1),   // Leaderboard + heatmap
        Constraint::Length(1), // Stats footer
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([Constraint::Fill(2), Constraint::Length(34)]).split(chunks[2]);

    render_title(frame, chunks[0], app);
    render_filter_bar(frame, chunks[1], app);
    render_leaderboard(frame, body[0], app);
    render_heatmap(frame, body[1], app);
    render_stats(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Detail => render_detail_popup(frame, app),
        InputMode::Help => render_help_popup(frame, &app.theme),
        InputMode::Normal | InputMode::Search => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        TITLE,
        Style::default().fg(app.theme.title_color).bold(),
    )];

    let info = format!(
        "{} candidates evaluated • Last updated: {}",
        app.dataset.len(),
        app.loaded_at.format("%Y-%m-%d")
    );
    let left_len = TITLE.chars().count();
    let right_len = info.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + right_len);
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(info, Style::default().fg(app.theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let searching = app.input_mode == InputMode::Search;

    let search_text = if app.search.is_empty() && !searching {
        Span::styled("Search candidates...", Style::default().fg(theme.muted).italic())
    } else if searching {
        Span::raw(format!("{}|", app.search))
    } else {
        Span::raw(app.search.clone())
    };
    let label_style = if searching {
        Style::default().fg(theme.status_key_color).bold()
    } else {
        Style::default().fg(theme.muted)
    };

    let line = Line::from(vec![
        Span::styled("Search: ", label_style),
        search_text,
        Span::raw("   "),
        Span::styled("Sort: ", Style::default().fg(theme.muted)),
        Span::styled(app.sort_key.label(), Style::default().bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn panel<'a>(title: &'a str, focused: bool, theme: &ThemeColors) -> Block<'a> {
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::bordered()
        .title(Span::styled(title, Style::default().bold()))
        .border_style(Style::default().fg(border))
}

fn render_leaderboard(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let block = panel(
        " Top 10 Candidates ",
        app.focus == Focus::Leaderboard,
        theme,
    );
    let visible = app.visible();
    let top = leaderboard(&visible);

    if top.is_empty() {
        let empty_msg = Paragraph::new("No candidates match")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let rows: Vec<Row> = top
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };

            let name = Line::from(vec![
                Span::styled(format!("{:<3} ", c.candidate.initials()), Style::default().fg(theme.title_color)),
                Span::raw(c.name().to_string()),
                Span::styled(
                    format!("  {}y", c.candidate.experience_label()),
                    Style::default().fg(theme.muted),
                ),
            ]);

            Row::new(vec![
                Cell::from(rank_badge(c.rank)).style(theme.rank_style(c.rank)),
                Cell::from(name),
                Cell::from(c.candidate.education_level.label()).style(Style::default().fg(theme.education)),
                Cell::from(score_with_bar(c.evaluation.crisis_management_score, theme)),
                Cell::from(score_with_bar(c.evaluation.sustainability_score, theme)),
                Cell::from(score_with_bar(c.evaluation.team_motivation_score, theme)),
                Cell::from(format!("{:>5}", format_score(c.total_score)))
                    .style(Style::default().fg(theme.score_color(c.total_score)).bold()),
            ])
            .style(row_style)
        })
        .collect();

    // Column widths
    let widths = [
        Constraint::Length(4),  // Rank: "#10" / "1st"
        Constraint::Fill(1),    // Initials + name + experience
        Constraint::Length(11), // Education
        Constraint::Length(11), // Crisis: "88.5 ▰▰▰▰▱"
        Constraint::Length(11), // Sustainability
        Constraint::Length(11), // Motivation
        Constraint::Length(5),  // Total
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec![
                "Rank",
                "Candidate",
                "Education",
                "Crisis Mgmt",
                "Sustain.",
                "Motivation",
                "Total",
            ])
            .style(theme.header_style)
            .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected)
        .block(block);

    let mut state = app.leaderboard_state.clone();
    frame.render_stateful_widget(table, area, &mut state);
    app.leaderboard_state = state;
}

fn score_with_bar(score: f64, theme: &ThemeColors) -> Line<'static> {
    let color = theme.score_color(score);
    let mut spans = vec![Span::styled(format!("{:>5} ", format_score(score)), Style::default().fg(color))];
    spans.extend(score_bar(score, 5, theme).spans);
    Line::from(spans)
}

/// Bar scaled to 0-100; out-of-range scores saturate
fn score_bar(score: f64, width: usize, theme: &ThemeColors) -> Line<'static> {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "▰".repeat(filled),
            Style::default().fg(theme.score_color(score)),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled("▱".repeat(empty), Style::default().fg(theme.bar_empty)));
    }
    Line::from(spans)
}

fn render_heatmap(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let block = panel(" Score Heatmap ", app.focus == Focus::Heatmap, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).split(inner);

    let visible = app.visible();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No candidates match").alignment(Alignment::Center),
            chunks[0],
        );
    } else {
        let rows: Vec<Row> = visible
            .iter()
            .map(|c| {
                let scores = [
                    c.evaluation.crisis_management_score,
                    c.evaluation.sustainability_score,
                    c.evaluation.team_motivation_score,
                ];
                let mut cells = vec![Cell::from(c.candidate.first_name().to_string())];
                cells.extend(scores.iter().map(|&s| {
                    Cell::from(format!("{:^6}", round_half_up(s))).style(theme.heat_style(s))
                }));
                Row::new(cells)
            })
            .collect();

        let widths = [
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(vec!["", "Crisis", "Sust.", "Motiv"]).style(theme.header_style))
            .column_spacing(1)
            .row_highlight_style(theme.row_selected);

        let mut state = app.heatmap_state.clone();
        frame.render_stateful_widget(table, chunks[0], &mut state);
        app.heatmap_state = state;
    }

    // Legend
    let mut legend = vec![Span::styled("Legend: ", Style::default().fg(theme.muted))];
    for (level, label) in HEAT_LEGEND.iter() {
        let (r, g, b) = level.rgb();
        legend.push(Span::styled("  ", Style::default().bg(Color::Rgb(r, g, b))));
        legend.push(Span::raw(format!("{} ", label)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(legend)).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = app.stats.as_ref();
    let stat = |label: &'static str, value: String| {
        vec![
            Span::styled(label, Style::default().fg(theme.muted)),
            Span::styled(value, Style::default().bold()),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(stat("Average Crisis Score: ", format_mean(stats, |s| s.avg_crisis)));
    spans.push(Span::raw("   "));
    spans.extend(stat("Average Sustainability: ", format_mean(stats, |s| s.avg_sustainability)));
    spans.push(Span::raw("   "));
    spans.extend(stat("Average Motivation: ", format_mean(stats, |s| s.avg_motivation)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        // Show flash message with color based on message type
        let msg_color = if msg.starts_with("Failed") {
            theme.flash_error
        } else {
            theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let count = format!("{} of {} shown", app.visible().len(), app.dataset.len());

        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::Search => &[("Enter", ":keep "), ("Esc", ":clear "), ("Backspace", ":delete")],
            InputMode::Detail => &[("y", ":copy profile "), ("Esc", ":close")],
            _ => &[
                ("j/k", ":nav "),
                ("Enter", ":details "),
                ("/", ":search "),
                ("s", ":sort "),
                ("c", ":reset "),
                ("Tab", ":focus "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        // Build hints with colored shortcut keys
        let mut spans = vec![
            Span::styled(count, Style::default().fg(theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn detail_lines<'a>(c: &'a RankedCandidate, theme: &ThemeColors) -> Vec<Line<'a>> {
    let candidate = &c.candidate;
    let label = Style::default().fg(theme.muted);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", candidate.initials()),
                Style::default().fg(Color::Black).bg(theme.title_color).bold(),
            ),
            Span::raw(" "),
            Span::styled(candidate.name.as_str(), Style::default().bold()),
            Span::raw("  "),
            Span::styled(format!("Rank #{}", c.rank), theme.rank_style(c.rank)),
        ]),
        Line::from(Span::styled(candidate.email.as_str(), label)),
        Line::from(Span::styled(candidate.phone.as_str(), label)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Years Exp. ", label),
            Span::styled(candidate.experience_label(), Style::default().bold()),
            Span::styled("   Total Score ", label),
            Span::styled(
                format_score(c.total_score),
                Style::default().fg(theme.score_color(c.total_score)).bold(),
            ),
            Span::styled("   Certifications ", label),
            Span::styled(candidate.certifications.len().to_string(), Style::default().bold()),
        ]),
        Line::from(vec![
            Span::styled("Education: ", label),
            Span::styled(candidate.education_level.label(), Style::default().fg(theme.education)),
        ]),
        Line::from(""),
    ];

    if !candidate.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", candidate.summary),
            label.italic(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("AI Evaluation Scores", theme.popup_title)));
    for factor in score_breakdown(&c.evaluation).factors {
        let mut spans = vec![
            Span::raw(format!("{:<25}", factor.label)),
            Span::styled(format!("{:>4} ", factor.weight_label()), label),
            Span::styled(
                format!("{:>5} ", format_score(factor.score)),
                Style::default().fg(theme.score_color(factor.score)).bold(),
            ),
        ];
        spans.extend(score_bar(factor.score, 16, theme).spans);
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Skills", theme.popup_title)));
    let mut skills = Vec::new();
    for skill in &candidate.skills {
        let color = match proficiency_band(skill.proficiency) {
            ScoreBand::Low => theme.muted,
            band => theme.band_color(band),
        };
        skills.push(Span::styled("● ", Style::default().fg(color)));
        skills.push(Span::raw(format!("{} ({}/5)  ", skill.name, skill.proficiency)));
    }
    lines.push(Line::from(skills));

    lines.push(Line::from(Span::styled("Certifications", theme.popup_title)));
    lines.push(Line::from(
        candidate
            .certifications
            .iter()
            .map(|cert| Span::styled(format!("[{}] ", cert), Style::default().fg(theme.score_strong)))
            .collect::<Vec<_>>(),
    ));
    lines
}

/// Render the candidate detail popup
fn render_detail_popup(frame: &mut Frame, app: &App) {
    let Some(candidate) = app.detail_candidate() else {
        return;
    };
    let theme = &app.theme;

    let popup_area = centered_rect_fixed(76, 26, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Candidate Profile ", theme.popup_title))
        .title_bottom(Line::from(" y: copy profile | Esc: close ").centered())
        .border_style(Style::default().fg(theme.popup_border))
        .style(Style::default().bg(theme.popup_bg));

    let content = Paragraph::new(detail_lines(candidate, theme))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(content, popup_area);
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 17, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    // Render the popup border
    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    // Get inner area (inside the border)
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let shortcuts = [
        ("j / Down      ", "Move down"),
        ("k / Up        ", "Move up"),
        ("Tab           ", "Switch leaderboard / heatmap"),
        ("Enter         ", "Open candidate profile"),
        ("/             ", "Search name, skills, certifications"),
        ("s / S         ", "Next / previous sort order"),
        ("c             ", "Reset search and sort"),
        ("y             ", "Copy profile (in profile view)"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = shortcuts
        .iter()
        .map(|(key, action)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*action)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(
        "Ranks are fixed by total score and do not change when searching or sorting.",
    ));
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines).wrap(Wrap { trim: true }), inner);
}
