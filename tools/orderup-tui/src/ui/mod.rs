//! UI module for TUI rendering.

pub mod board;
pub mod help;

use crate::app::App;
use ratatui::Frame;

/// Render the board, with the help overlay on top when active.
pub fn render(frame: &mut Frame, app: &App) {
    board::render(frame, app);

    if app.show_help {
        help::render_help_overlay(frame);
    }
}
