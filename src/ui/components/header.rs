//! Dashboard header component
//!
//! Renders the title and load status gauge

use crate::loader::LoadState;
use crate::ui::view::TITLE;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and load progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &LoadState, tick: usize) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!("{} v{}", TITLE.to_uppercase(), env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = match state {
        // Loops every 20 ticks; the request has no measurable progress
        LoadState::Loading => (
            "LOADING - Contacting directory".to_string(),
            Color::LightBlue,
            ((tick % 20) as f64 / 20.0 * 100.0) as u16,
        ),
        LoadState::Loaded {
            using_fallback: false,
            ..
        } => (
            "READY - Directory profile".to_string(),
            Color::LightGreen,
            100,
        ),
        LoadState::Loaded {
            using_fallback: true,
            ..
        } => (
            "READY - Sample profile".to_string(),
            Color::LightYellow,
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
