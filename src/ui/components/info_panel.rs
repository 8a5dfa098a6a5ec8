//! Dashboard info panel component
//!
//! Renders the directory source and session information

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::time::Instant;

/// Render info panel describing where profiles come from.
pub fn render_info_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    environment: &Environment,
    start_time: Instant,
    loads: u64,
) {
    let env_color = match environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };

    let uptime = start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    } else {
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60)
    };

    let info_lines = vec![
        Line::from(vec![Span::styled(
            format!("Env: {}", environment),
            Style::default().fg(env_color),
        )]),
        Line::from(vec![Span::styled(
            format!("Directory: {}", environment.directory_url()),
            Style::default().fg(Color::LightBlue),
        )]),
        Line::from(vec![Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::styled(
            uptime_string,
            Style::default().fg(Color::LightGreen),
        )]),
        Line::from(vec![Span::styled(
            format!("Loads: {}", loads),
            Style::default().fg(Color::LightYellow),
        )]),
    ];

    let info_block = Block::default()
        .title("SOURCE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
