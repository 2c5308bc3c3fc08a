//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ORDERUP HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Board",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  A / I      ", Style::default().fg(Color::Yellow)),
            Span::raw("Start typing a new order name"),
        ]),
        Line::from(vec![
            Span::styled("  X / Del    ", Style::default().fg(Color::Yellow)),
            Span::raw("Clear the selected order (picked up)"),
        ]),
        Line::from(vec![
            Span::styled("  ←↓↑→/hjkl  ", Style::default().fg(Color::Yellow)),
            Span::raw("Move between tiles"),
        ]),
        Line::from(vec![
            Span::styled("  S          ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle the new-order chime"),
        ]),
        Line::from(vec![
            Span::styled("  ?          ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("  Q / Esc    ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Name Entry",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Enter      ", Style::default().fg(Color::Yellow)),
            Span::raw("Post the order and keep typing"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace  ", Style::default().fg(Color::Yellow)),
            Span::raw("Erase the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Esc        ", Style::default().fg(Color::Yellow)),
            Span::raw("Back to the board"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Tiles",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  ● WAITING  ", Style::default().fg(Color::White)),
            Span::raw("Posted, counting down from 2 minutes"),
        ]),
        Line::from(vec![
            Span::styled("  ● URGENT   ", Style::default().fg(Color::Red)),
            Span::raw("Clears itself in 30 seconds or less"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
