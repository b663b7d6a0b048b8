//! Dashboard header component
//!
//! Renders the page title and version line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with the page title and update notice.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let version = env!("CARGO_PKG_VERSION");
    let title_text = if state.update_available {
        if let Some(latest) = &state.latest_version {
            format!("WODBOARD DASHBOARD v{} -> {} UPDATE AVAILABLE", version, latest)
        } else {
            format!("WODBOARD DASHBOARD v{} - UPDATE AVAILABLE", version)
        }
    } else {
        format!("WODBOARD DASHBOARD v{}", version)
    };

    let title_color = if state.update_available {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, area);
}
