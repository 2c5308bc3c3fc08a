//! Board UI rendering.

use crate::app::{App, InputMode, GRID_COLUMNS};
use orderup_board::Order;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Rows of a tile: two border lines plus name, id, and countdown.
const TILE_HEIGHT: u16 = 5;

/// Countdown turns red once this few seconds remain.
const URGENT_SECS: u64 = 30;

/// Render the full board view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Order tiles
            Constraint::Length(8), // Activity feed
            Constraint::Length(3), // Name entry
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tiles(frame, app, chunks[1]);
    render_activity(frame, app, chunks[2]);
    render_input(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

/// Render the header bar.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status();

    let count_color = if status.is_idle() {
        Color::DarkGray
    } else {
        Color::Green
    };

    let sound_color = if app.sound_enabled() {
        Color::Green
    } else {
        Color::DarkGray
    };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Orders: "),
        Span::styled(
            format!("{}", status.active),
            Style::default().fg(count_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" waiting", Style::default().fg(Color::DarkGray)),
        Span::raw("    Sound: "),
        Span::styled(app.sound_str(), Style::default().fg(sound_color)),
        Span::raw("    Uptime: "),
        Span::styled(app.uptime_str(), Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ORDER UP ─ PICKUP BOARD ────────────────────────────────────── v0.1.0 "),
    );

    frame.render_widget(header, area);
}

/// Render the order tile grid, oldest orders first.
fn render_tiles(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" BOARD ")
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let orders = app.orders();
    if orders.is_empty() {
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let empty = Paragraph::new("No orders waiting")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, middle);
        return;
    }

    // Scroll whole rows so the selected tile stays on screen
    let visible_rows = ((inner.height / TILE_HEIGHT) as usize).max(1);
    let total_rows = orders.len().div_ceil(GRID_COLUMNS);
    let selected_row = app.selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let row_count = visible_rows.min(total_rows - first_row);

    let row_constraints: Vec<Constraint> =
        (0..row_count).map(|_| Constraint::Length(TILE_HEIGHT)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(*row_area);

        for (c, col_area) in cols.iter().enumerate() {
            let index = (first_row + r) * GRID_COLUMNS + c;
            if let Some(order) = orders.get(index) {
                render_tile(frame, app, order, index == app.selected, *col_area);
            }
        }
    }
}

/// Render a single order tile.
fn render_tile(frame: &mut Frame, app: &App, order: &Order, selected: bool, area: Rect) {
    let remaining = app.remaining_secs(order);

    let countdown_color = if remaining <= URGENT_SECS {
        Color::Red
    } else {
        Color::DarkGray
    };

    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = vec![
        Line::from(Span::styled(
            format!(" {}", order.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" order #{}", order.id.short()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(" clears in {}s", remaining),
            Style::default().fg(countdown_color),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Render the activity feed panel.
fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let max_entries = (area.height as usize).saturating_sub(2);

    let items: Vec<ListItem> = app
        .feed
        .iter()
        .take(max_entries)
        .map(|activity| {
            let elapsed = activity.at.elapsed();
            let time_str = format_elapsed(elapsed);

            let kind_color = match activity.kind {
                "posted" => Color::Green,
                "cleared" => Color::Cyan,
                "expired" => Color::Yellow,
                "sound" => Color::Magenta,
                "rejected" => Color::Red,
                _ => Color::Gray,
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<8}", time_str), Style::default().fg(Color::DarkGray)),
                Span::raw(" │ "),
                Span::styled(format!("{:<8}", activity.kind), Style::default().fg(kind_color)),
                Span::raw(" │ "),
                Span::raw(&activity.description),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ACTIVITY ")
        .border_style(Style::default().fg(Color::Green));

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(
            " Waiting for orders...",
            Style::default().fg(Color::DarkGray),
        ))])
    } else {
        List::new(items)
    };

    frame.render_widget(list.block(block), area);
}

/// Render the name entry bar.
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Editing => {
            let mut spans = vec![
                Span::raw(format!(" {}", app.input)),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ];
            if let Some(notice) = &app.notice {
                spans.push(Span::styled(
                    format!("  {}", notice),
                    Style::default().fg(Color::Red),
                ));
            }

            let input = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" NEW ORDER (Enter posts, Esc cancels) ")
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            frame.render_widget(input, area);
        }
        InputMode::Normal => {
            let line = if let Some(notice) = &app.notice {
                Line::from(Span::styled(
                    format!(" {}", notice),
                    Style::default().fg(Color::Red),
                ))
            } else {
                Line::from(Span::styled(
                    " Press [A] to post a new order",
                    Style::default().fg(Color::DarkGray),
                ))
            };

            let hint = Paragraph::new(line)
                .block(Block::default().borders(Borders::ALL).title(" NEW ORDER "));
            frame.render_widget(hint, area);
        }
    }
}

/// Render the footer bar.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.input_mode {
        InputMode::Normal => vec![
            Span::styled(" [A] ", Style::default().fg(Color::Yellow)),
            Span::raw("New Order  "),
            Span::styled("[X] ", Style::default().fg(Color::Yellow)),
            Span::raw("Clear  "),
            Span::styled("[←↓↑→] ", Style::default().fg(Color::Yellow)),
            Span::raw("Move  "),
            Span::styled("[S] ", Style::default().fg(Color::Yellow)),
            Span::raw("Sound  "),
            Span::raw("│ "),
            Span::styled("[?] ", Style::default().fg(Color::Yellow)),
            Span::raw("Help  "),
            Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ],
        InputMode::Editing => vec![
            Span::styled(" [Enter] ", Style::default().fg(Color::Yellow)),
            Span::raw("Post Order  "),
            Span::styled("[Backspace] ", Style::default().fg(Color::Yellow)),
            Span::raw("Erase  "),
            Span::styled("[Esc] ", Style::default().fg(Color::Yellow)),
            Span::raw("Back to Board"),
        ],
    };

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Format elapsed time as a human-readable string.
fn format_elapsed(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}
