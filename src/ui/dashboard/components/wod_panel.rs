//! Workout-of-the-day panel component
//!
//! Renders the WOD for the selected date: name, optional description, and
//! one row per exercise in store order.

use super::super::state::{DashboardState, WodState};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Static message shown when the selected date has no WOD.
pub const NO_WORKOUT_MESSAGE: &str = "No workout scheduled for today.";

/// Render the WOD panel for the current fetch state.
pub fn render_wod_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::new();

    match state.wod() {
        // The loading state renders the full-frame spinner instead; this
        // branch only shows when the panel is drawn mid-transition.
        WodState::Loading => {
            lines.push(Line::from(Span::styled(
                "Fetching workout of the day...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        WodState::Loaded(Some(workout)) => {
            lines.push(Line::from(Span::styled(
                workout.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = &workout.description {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::raw("")));
            for workout_exercise in &workout.workout_exercises {
                lines.push(Line::from(vec![
                    Span::raw("🏋 "),
                    Span::styled(
                        workout_exercise.exercise.name.clone(),
                        Style::default().fg(Color::LightCyan),
                    ),
                ]));
            }
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::from(Span::styled(
                "[W] Go to Workouts Page",
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        WodState::Loaded(None) => {
            lines.push(Line::from(Span::raw(NO_WORKOUT_MESSAGE)));
        }
    }

    let panel_block = Block::default()
        .title("WORKOUT OF THE DAY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let panel = Paragraph::new(lines)
        .block(panel_block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
