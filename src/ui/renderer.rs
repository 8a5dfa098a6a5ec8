//! Dashboard main renderer

use super::app::App;
use super::components::{footer, header, info_panel, logs, profile_card};
use super::view::ProfileView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, app: &App) {
    if app.with_background_color() {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let view = ProfileView::from_state(app.store().state(), app.store().image());

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], app.store().state(), app.tick());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    info_panel::render_info_panel(
        f,
        content_chunks[0],
        app.environment(),
        app.start_time(),
        app.loads(),
    );
    profile_card::render_profile_card(f, content_chunks[1], &view);
    logs::render_logs_panel(f, main_chunks[2], app.activity_logs());
    footer::render_footer(f, main_chunks[3], &view.reload);
}
