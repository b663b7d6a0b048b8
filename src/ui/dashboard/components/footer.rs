//! Dashboard footer component
//!
//! Renders footer with key hints, uptime, and the sync counter

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render enhanced footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let uptime_secs = state.start_time.elapsed().as_secs();
    let footer_text = format!(
        "[Q] Quit | Env: {} | Uptime: {}m {}s | Syncs: {}",
        state.environment,
        uptime_secs / 60,
        uptime_secs % 60,
        state.refresh_count(),
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
