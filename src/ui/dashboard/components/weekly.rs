//! Weekly exercises panel component
//!
//! Renders a Monday-based summary of the current week's completed
//! exercises. Pure function of the completed-exercise list.

use super::super::state::DashboardState;
use crate::workout::{completions_by_weekday, week_start, weekday_label};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the weekly-exercises panel fed the current completed list.
pub fn render_weekly_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let today = chrono::Local::now().date_naive();
    let start = week_start(today);
    let counts = completions_by_weekday(&state.completed_exercises, start);
    let total: usize = counts.iter().sum();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("Week of {}", start),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::raw("")));

    for (index, count) in counts.iter().enumerate() {
        let is_today = start + chrono::Duration::days(index as i64) == today;
        let label_style = if is_today {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let bar = "█".repeat(*count);
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", weekday_label(index)), label_style),
            Span::styled(bar, Style::default().fg(Color::LightGreen)),
            Span::styled(
                format!(" {}", count),
                Style::default().fg(Color::LightGreen),
            ),
        ]));
    }

    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::styled(
        format!("Total: {} completed", total),
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )));

    let panel_block = Block::default()
        .title("WEEKLY EXERCISES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen))
        .padding(Padding::uniform(1));

    let panel = Paragraph::new(lines)
        .block(panel_block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
