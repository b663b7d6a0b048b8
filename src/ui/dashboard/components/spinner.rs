//! Loading spinner component
//!
//! Full-frame spinner shown while the initial WOD fetch is in flight.

use super::super::utils::SPINNER_FRAMES;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render the full-frame loading spinner.
pub fn render_loading(f: &mut Frame, tick: usize) {
    let frame = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(
            frame.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            "Fetching workout of the day...",
            Style::default().fg(Color::Gray),
        )),
    ];

    let height = lines.len() as u16;
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(f.area().height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(f.area().height.saturating_sub(height) / 2),
        ])
        .split(f.area());

    let spinner = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(spinner, vertical_chunks[1]);
}
