//! Dashboard main renderer

use super::components::{
    date_selector, footer, header, logs, recent, spinner, weekly, wod_panel, workouts_page,
};
use super::state::{DashboardState, Page, WodState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    // While the WOD fetch is loading, the spinner is the only content.
    if *state.wod() == WodState::Loading {
        spinner::render_loading(f, state.tick);
        return;
    }

    if state.page == Page::Workouts {
        workouts_page::render_workouts_page(f, state);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(40),
        ])
        .split(content_chunks[0]);

    date_selector::render_date_selector(f, left_chunks[0], state);
    wod_panel::render_wod_panel(f, left_chunks[1], state);
    recent::render_recent_panel(f, left_chunks[2], state);
    weekly::render_weekly_panel(f, content_chunks[1], state);

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}
