//! Date selector component
//!
//! Renders the selected date with prev/next affordances

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the date selector bound to the selected date.
pub fn render_date_selector(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let date_line = Line::from(vec![
        Span::styled("◀  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.selected_date.format("%A, %Y-%m-%d").to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ▶", Style::default().fg(Color::DarkGray)),
    ]);

    let selector = Paragraph::new(vec![date_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("DATE  [←/→] day  [T] today")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(selector, area);
}
