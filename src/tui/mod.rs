//! Terminal User Interface module
//!
//! A ratatui dashboard over the signed-in user's budget: summary cards,
//! Expenses / Income / Manage Categories tabs and entry dialogs. Shows the
//! sign-in screen while nobody is signed in.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
