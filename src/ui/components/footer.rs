//! Dashboard footer component
//!
//! Renders the reload control and quit instructions

use crate::ui::view::ReloadControl;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the reload control; dimmed while it is disabled.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, reload: &ReloadControl) {
    let footer_text = format!("[R] {} | [Q] Quit", reload.label);

    let style = if reload.enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
