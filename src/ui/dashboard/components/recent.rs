//! Recent workouts panel component
//!
//! Lists the most recently scheduled workouts. Selection moves with J/K and
//! pressing C reports every exercise of the selected workout complete.

use super::super::state::{DashboardState, RecentState};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the recent-workouts panel.
pub fn render_recent_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = match state.recent() {
        // Panel-local loading line; never blanks the dashboard.
        RecentState::Loading => vec![Line::from(Span::styled(
            "Loading recent workouts...",
            Style::default().fg(Color::DarkGray),
        ))],
        RecentState::Loaded(workouts) if workouts.is_empty() => {
            vec![Line::from(Span::raw("No recent workouts."))]
        }
        RecentState::Loaded(workouts) => workouts
            .iter()
            .enumerate()
            .map(|(index, workout)| {
                let selected = index == state.recent_cursor;
                let marker = if selected { "▶ " } else { "  " };
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(workout.name.clone(), name_style),
                    Span::styled(
                        format!(
                            "  {}  {} exercises",
                            workout.scheduled_date,
                            workout.workout_exercises.len()
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if workout.is_wod {
                    spans.push(Span::styled(" ★ WOD", Style::default().fg(Color::Yellow)));
                }
                Line::from(spans)
            })
            .collect(),
    };

    let panel_block = Block::default()
        .title("RECENT WORKOUTS  [J/K] select  [C] complete")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    let panel = Paragraph::new(lines)
        .block(panel_block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
