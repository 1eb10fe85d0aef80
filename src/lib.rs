//! Wedding Bells - Terminal wedding budget tracker
//!
//! This library provides the core functionality of Wedding Bells: a per-user
//! wedding budget made of expenses, income entries and custom categories,
//! with live totals, a CLI and a TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Core data models (expenses, income, categories, users)
//! - `backend`: Auth and document-store traits plus the local JSON backend
//! - `store`: Per-user budget subscriptions and writes
//! - `services`: Summary computations
//! - `dashboard`: Dashboard state and entry forms
//! - `session`: Auth gate deciding between the entry screen and dashboard
//! - `cli`, `display`, `tui`: User interfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wedding_bells::backend::LocalBackend;
//! use wedding_bells::config::WeddingPaths;
//! use wedding_bells::session::Session;
//!
//! let paths = WeddingPaths::new()?;
//! let backend = Arc::new(LocalBackend::open(&paths)?);
//! let mut session = Session::new(backend.clone(), backend);
//! session.sign_in("me@example.com", "secret")?;
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod tui;

pub use error::{WeddingError, WeddingResult};
