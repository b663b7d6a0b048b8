//! Workouts page component
//!
//! Full-frame page reached from the WOD panel's "Go to Workouts Page" link.
//! Lists the fetched workouts with their exercises.

use super::super::state::{DashboardState, WodState};
use crate::workout::Workout;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn workout_lines(workout: &Workout, lines: &mut Vec<Line<'static>>) {
    let mut title_spans = vec![Span::styled(
        workout.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    title_spans.push(Span::styled(
        format!("  {}", workout.scheduled_date),
        Style::default().fg(Color::DarkGray),
    ));
    if workout.is_wod {
        title_spans.push(Span::styled(" ★ WOD", Style::default().fg(Color::Yellow)));
    }
    lines.push(Line::from(title_spans));

    if let Some(description) = &workout.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    for workout_exercise in &workout.workout_exercises {
        lines.push(Line::from(vec![
            Span::raw("  🏋 "),
            Span::styled(
                workout_exercise.exercise.name.clone(),
                Style::default().fg(Color::LightCyan),
            ),
        ]));
    }
    lines.push(Line::from(Span::raw("")));
}

/// Render the workouts page over the whole frame.
pub fn render_workouts_page(f: &mut Frame, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::new();

    if let WodState::Loaded(Some(workout)) = state.wod() {
        workout_lines(workout, &mut lines);
    }
    for workout in state.recent_workouts() {
        workout_lines(workout, &mut lines);
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::raw("No workouts fetched yet.")));
    }

    let page_block = Block::default()
        .title("WORKOUTS  [Esc] back")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightMagenta))
        .padding(Padding::uniform(1));

    let page = Paragraph::new(lines)
        .block(page_block)
        .wrap(Wrap { trim: true });
    f.render_widget(page, f.area());
}
