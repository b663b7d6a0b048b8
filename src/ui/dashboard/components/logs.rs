//! Activity log panel component
//!
//! Renders the rolling fetch-activity log, newest first.

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn log_line(event: &Event) -> Line<'static> {
    let status_icon = match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "",
        (EventType::Error, _) => "❌",
        (EventType::Refresh, _) => "",
    };

    Line::from(vec![
        Span::raw(format!("{} ", status_icon)),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            clean_http_error_message(&event.msg),
            Style::default().fg(get_worker_color(&event.worker)),
        ),
    ])
}

/// Render the activity log panel. Shows as many of the newest displayable
/// entries as fit; borders and padding eat three rows.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let visible_rows = (area.height.saturating_sub(3)).max(1) as usize;

    let mut log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(visible_rows)
        .map(log_line)
        .collect();

    if log_lines.is_empty() {
        log_lines.push(Line::from("Starting up..."));
    }

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let log_widget = Paragraph::new(log_lines)
        .block(logs_block)
        .wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
