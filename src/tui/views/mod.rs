//! TUI Views module
//!
//! The loading and entry screens, and the dashboard: header, summary cards,
//! tab bar, the list of the selected tab and the status bar.

pub mod categories;
pub mod entry;
pub mod expenses;
pub mod income;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::dashboard::{Dashboard, Tab};
use crate::session::Screen;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.session.screen() {
        Screen::Loading => entry::render_loading(frame),
        Screen::Entry => entry::render(frame, app),
        Screen::Dashboard => match app.dashboard() {
            Some(dashboard) => render_dashboard(frame, app, dashboard),
            None => entry::render_loading(frame),
        },
    }
}

fn render_dashboard(frame: &mut Frame, app: &App, dashboard: &Dashboard) {
    let layout = DashboardLayout::new(frame.area());

    render_header(frame, app, layout.header);
    summary::render(frame, app, dashboard, &layout);
    render_tabs(frame, dashboard.tab(), layout.tabs);

    match dashboard.tab() {
        Tab::Expenses => expenses::render(frame, app, dashboard, layout.content),
        Tab::Income => income::render(frame, app, dashboard, layout.content),
        Tab::Categories => categories::render(frame, app, dashboard, layout.content),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let email = app.session.user().map(|u| u.email.as_str()).unwrap_or("");
    let line = Line::from(vec![
        Span::styled(
            " Wedding Bells ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(email.to_string(), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(frame: &mut Frame, selected: Tab, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Expense => dialogs::expense::render(frame, app),
        ActiveDialog::Income => dialogs::income::render(frame, app),
        ActiveDialog::AddCategory => dialogs::category::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
