//! Application state management.

use crossterm::event::KeyCode;
use orderup_board::{BoardApi, BoardError, BoardService, BoardStatus, Order};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of entries to keep in the activity feed.
const MAX_FEED: usize = 100;

/// Tiles per board row.
pub const GRID_COLUMNS: usize = 3;

/// Input mode: board navigation or name entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate the board.
    #[default]
    Normal,
    /// Keys edit the name buffer.
    Editing,
}

/// One entry in the activity feed.
#[derive(Debug, Clone)]
pub struct Activity {
    /// When the activity happened.
    pub at: Instant,
    /// Activity kind tag ("posted", "cleared", "expired", "sound", "rejected").
    pub kind: &'static str,
    /// Human-readable description.
    pub description: String,
}

/// Application state holding the board and all view data.
pub struct App {
    /// Board service owning the domain state, clock, and chime.
    service: BoardService,

    /// Current input mode.
    pub input_mode: InputMode,

    /// Name entry buffer.
    pub input: String,

    /// Index of the selected tile.
    pub selected: usize,

    /// Whether the help overlay is showing.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Recent board activity, newest first.
    pub feed: VecDeque<Activity>,

    /// Transient operator notice (capacity hit, oversized name).
    pub notice: Option<String>,

    /// Application start time.
    pub start_time: Instant,

    /// Last sweep time.
    pub last_sweep: Instant,
}

impl App {
    /// Create a new application instance over a board service.
    pub fn new(service: BoardService) -> Self {
        Self {
            service,
            input_mode: InputMode::Normal,
            input: String::new(),
            selected: 0,
            show_help: false,
            should_quit: false,
            feed: VecDeque::with_capacity(MAX_FEED),
            notice: None,
            start_time: Instant::now(),
            last_sweep: Instant::now(),
        }
    }

    // === View accessors ===

    /// Orders in arrival order, oldest first.
    pub fn orders(&self) -> &[Order] {
        self.service.orders()
    }

    /// Current board status snapshot.
    pub fn status(&self) -> BoardStatus {
        self.service.status()
    }

    /// Seconds until `order` clears itself.
    pub fn remaining_secs(&self, order: &Order) -> u64 {
        self.service.remaining_secs(order)
    }

    /// Whether the chime is armed.
    pub fn sound_enabled(&self) -> bool {
        self.service.sound_enabled()
    }

    /// Sound state label for the header.
    pub fn sound_str(&self) -> &'static str {
        if self.sound_enabled() {
            "SOUND ON"
        } else {
            "SOUND OFF"
        }
    }

    /// Configured name length cap, used to bound the edit buffer.
    pub fn max_name_len(&self) -> usize {
        self.service.config().max_name_len
    }

    /// Format uptime as human-readable string.
    pub fn uptime_str(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();

        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;

        if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else if mins > 0 {
            format!("{}m {}s", mins, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }

    // === Input handling ===

    /// Handle key press events.
    pub fn on_key(&mut self, key: KeyCode) {
        // Any key dismisses the help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.on_normal_key(key),
            InputMode::Editing => self.on_edit_key(key),
        }
    }

    fn on_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Char('I') => {
                self.input_mode = InputMode::Editing;
                self.notice = None;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let enabled = self.service.toggle_sound();
                let description = if enabled { "sound on" } else { "sound off" };
                self.push_activity("sound", description);
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
                self.clear_selected();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            // Tile navigation
            KeyCode::Left | KeyCode::Char('h') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected + 1 < self.service.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected >= GRID_COLUMNS {
                    self.selected -= GRID_COLUMNS;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + GRID_COLUMNS < self.service.len() {
                    self.selected += GRID_COLUMNS;
                }
            }
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                if !c.is_control() && self.input.chars().count() < self.max_name_len() {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Posts the buffered name. Blank input is ignored; after a successful
    /// post the form stays in edit mode for the next name.
    fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            self.input.clear();
            return;
        }

        match self.service.add_order(&self.input) {
            Ok(id) => {
                if let Some(order) = self.service.orders().iter().find(|o| o.id == id) {
                    let description = format!("{} (#{})", order.name, order.id.short());
                    self.push_activity("posted", &description);
                }
                self.input.clear();
                self.notice = None;
            }
            Err(BoardError::BoardFull { capacity }) => {
                self.notice = Some(format!("Board full ({} tiles). Clear one first.", capacity));
                self.push_activity("rejected", "board full");
            }
            Err(BoardError::NameTooLong { max, .. }) => {
                self.notice = Some(format!("Name too long (max {} characters)", max));
                self.push_activity("rejected", &format!("name over {} characters", max));
            }
            Err(BoardError::EmptyName) => {
                self.input.clear();
            }
        }
    }

    /// Removes the selected order, if any.
    fn clear_selected(&mut self) {
        let Some(order) = self.service.orders().get(self.selected) else {
            return;
        };
        let id = order.id;

        if let Some(removed) = self.service.remove_order(id) {
            let description = format!("{} (#{})", removed.name, removed.id.short());
            self.push_activity("cleared", &description);
        }
        self.clamp_selection();
    }

    // === Periodic housekeeping ===

    /// One-second tick: run the eviction sweep and fold the results into
    /// the activity feed.
    pub fn on_tick(&mut self) {
        let evicted = self.service.sweep();
        for order in &evicted {
            let description = format!("{} (#{})", order.name, order.id.short());
            self.push_activity("expired", &description);
        }
        if !evicted.is_empty() {
            self.clamp_selection();
        }
        self.last_sweep = Instant::now();
    }

    /// Keeps the selection on a real tile after removals.
    fn clamp_selection(&mut self) {
        let len = self.service.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Add an entry to the activity feed.
    fn push_activity(&mut self, kind: &'static str, description: &str) {
        self.feed.push_front(Activity {
            at: Instant::now(),
            kind,
            description: description.to_string(),
        });

        if self.feed.len() > MAX_FEED {
            self.feed.pop_back();
        }
    }
}
