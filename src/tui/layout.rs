//! Layout definitions for the TUI
//!
//! Dashboard: header with the signed-in user, summary cards, tab bar,
//! list content and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the dashboard screen
pub struct DashboardLayout {
    pub header: Rect,
    pub summary: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(4), // Summary cards
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            summary: chunks[1],
            tabs: chunks[2],
            content: chunks[3],
            status_bar: chunks[4],
        }
    }

    /// Split the summary row into four equal cards
    pub fn summary_cards(&self) -> [Rect; 4] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(self.summary);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
