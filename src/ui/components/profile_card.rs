//! Dashboard profile card component
//!
//! Renders the employee card, or the loading text, from a [`ProfileView`]

use crate::ui::view::ProfileView;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_profile_card(f: &mut Frame, area: ratatui::layout::Rect, view: &ProfileView) {
    let mut lines = Vec::new();

    if let Some(loading) = view.loading_text {
        lines.push(Line::from(Span::styled(
            loading,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if let Some(warning) = &view.warning {
        lines.push(Line::from(Span::styled(
            warning.text().to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if let Some(card) = &view.card {
        let image_note = if card.image_is_placeholder {
            " (placeholder)"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.image_src.clone(), Style::default().fg(Color::Blue)),
            Span::styled(image_note, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            card.full_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("Email: {}", card.email)));
        lines.push(Line::from(format!("Phone: {}", card.phone)));
        lines.push(Line::from(format!("Location: {}", card.location)));
    }

    if let Some(notice) = &view.sample_notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notice.text().to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let card_block = Block::default()
        .title("EMPLOYEE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(card_block)
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}
