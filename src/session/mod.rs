//! Session gate
//!
//! Watches the auth provider and decides which screen to show. A `Session`
//! also owns the dashboard of whoever is signed in, tearing it down before a
//! different user's dashboard is opened.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::backend::{AuthProvider, DocumentStore, Subscription};
use crate::dashboard::Dashboard;
use crate::error::WeddingResult;
use crate::models::User;

/// What the auth provider last reported
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No emission received yet
    #[default]
    Loading,
    SignedOut,
    SignedIn(User),
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    /// Sign-in / sign-up entry screen
    Entry,
    Dashboard,
}

/// Auth state observer
pub struct SessionGate {
    state: AuthState,
    events: Receiver<Option<User>>,
    _subscription: Subscription,
}

impl SessionGate {
    /// Start observing the provider; state stays Loading until `poll`
    pub fn new(auth: &dyn AuthProvider) -> Self {
        let (sender, events) = mpsc::channel();
        let subscription = auth.on_auth_state_changed(Arc::new(move |user: Option<&User>| {
            let _ = sender.send(user.cloned());
        }));

        Self {
            state: AuthState::Loading,
            events,
            _subscription: subscription,
        }
    }

    /// Apply pending auth emissions; returns whether the state changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for user in self.events.try_iter() {
            let next = match user {
                Some(user) => AuthState::SignedIn(user),
                None => AuthState::SignedOut,
            };
            if next != self.state {
                self.state = next;
                changed = true;
            }
        }
        changed
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.state {
            AuthState::Loading => Screen::Loading,
            AuthState::SignedOut => Screen::Entry,
            AuthState::SignedIn(_) => Screen::Dashboard,
        }
    }
}

/// Gate plus the dashboard of the signed-in user
pub struct Session {
    auth: Arc<dyn AuthProvider>,
    documents: Arc<dyn DocumentStore>,
    gate: SessionGate,
    dashboard: Option<Dashboard>,
}

impl Session {
    /// Build a session over the given backend halves
    pub fn new(auth: Arc<dyn AuthProvider>, documents: Arc<dyn DocumentStore>) -> Self {
        let gate = SessionGate::new(auth.as_ref());
        Self {
            auth,
            documents,
            gate,
            dashboard: None,
        }
    }

    /// Process auth changes and store snapshots
    ///
    /// The dashboard is reconciled against the gate on every call, so an
    /// open that failed earlier is retried. Returns whether anything visible
    /// changed.
    pub fn sync(&mut self) -> WeddingResult<bool> {
        let mut changed = self.gate.poll();

        let wanted = self.gate.user().map(|user| user.id);
        let current = self.dashboard.as_ref().map(Dashboard::user);

        if wanted != current {
            if let Some(mut old) = self.dashboard.take() {
                old.close();
                changed = true;
            }
            if let Some(user) = wanted {
                self.dashboard = Some(Dashboard::open(Arc::clone(&self.documents), user)?);
                changed = true;
            }
        }

        if let Some(dashboard) = self.dashboard.as_mut() {
            changed |= dashboard.sync();
        }

        Ok(changed)
    }

    pub fn state(&self) -> &AuthState {
        self.gate.state()
    }

    pub fn screen(&self) -> Screen {
        self.gate.screen()
    }

    pub fn user(&self) -> Option<&User> {
        self.gate.user()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }

    /// Sign in and switch to that user's dashboard
    pub fn sign_in(&mut self, email: &str, password: &str) -> WeddingResult<User> {
        let user = self.auth.sign_in(email, password)?;
        self.sync()?;
        Ok(user)
    }

    /// Create an account and switch to its dashboard
    pub fn sign_up(&mut self, email: &str, password: &str) -> WeddingResult<User> {
        let user = self.auth.sign_up(email, password)?;
        self.sync()?;
        Ok(user)
    }

    /// Sign out and drop the dashboard
    pub fn sign_out(&mut self) -> WeddingResult<()> {
        self.auth.sign_out()?;
        self.sync()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LocalBackend;
    use crate::config::WeddingPaths;
    use tempfile::TempDir;

    fn backend(dir: &TempDir) -> Arc<LocalBackend> {
        Arc::new(LocalBackend::open(&WeddingPaths::with_base_dir(dir.path().to_path_buf())).unwrap())
    }

    fn session(backend: &Arc<LocalBackend>) -> Session {
        Session::new(backend.clone(), backend.clone())
    }

    #[test]
    fn test_gate_loading_until_polled() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        let mut gate = SessionGate::new(backend.as_ref());
        assert_eq!(gate.screen(), Screen::Loading);

        assert!(gate.poll());
        assert_eq!(gate.screen(), Screen::Entry);
        assert!(!gate.poll());
    }

    #[test]
    fn test_gate_follows_auth() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        let mut gate = SessionGate::new(backend.as_ref());

        let user = backend.sign_up("kim@example.com", "secret1").unwrap();
        gate.poll();
        assert_eq!(gate.state(), &AuthState::SignedIn(user));
        assert_eq!(gate.screen(), Screen::Dashboard);

        backend.sign_out().unwrap();
        gate.poll();
        assert_eq!(gate.screen(), Screen::Entry);
    }

    #[test]
    fn test_session_opens_and_closes_dashboard() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        let mut session = session(&backend);
        session.sync().unwrap();
        assert!(session.dashboard().is_none());

        session.sign_up("kim@example.com", "secret1").unwrap();
        assert_eq!(session.screen(), Screen::Dashboard);
        assert!(session.dashboard().is_some());
        assert_eq!(backend.listener_count(), 3);

        session.sign_out().unwrap();
        assert_eq!(session.screen(), Screen::Entry);
        assert!(session.dashboard().is_none());
        assert_eq!(backend.listener_count(), 0);
    }

    #[test]
    fn test_switching_users_replaces_dashboard() {
        let dir = TempDir::new().unwrap();
        let backend = backend(&dir);
        backend.sign_up("first@example.com", "secret1").unwrap();
        let second = backend.sign_up("second@example.com", "secret2").unwrap();
        backend.sign_out().unwrap();

        let mut session = session(&backend);
        session.sign_in("first@example.com", "secret1").unwrap();
        session.sign_in("second@example.com", "secret2").unwrap();

        assert_eq!(session.dashboard().map(Dashboard::user), Some(second.id));
        assert_eq!(backend.listener_count(), 3);
    }

    #[test]
    fn test_failed_dashboard_open_is_retried() {
        let dir = TempDir::new().unwrap();
        let paths = WeddingPaths::with_base_dir(dir.path().to_path_buf());
        let user = backend(&dir).sign_up("kim@example.com", "secret1").unwrap();

        let key = user.id.key();
        let expenses = paths.collection_file(&["users", &key, "expenses"]);
        std::fs::create_dir_all(expenses.parent().unwrap()).unwrap();
        std::fs::write(&expenses, "{ not json").unwrap();

        let backend = backend(&dir);
        let mut session = session(&backend);
        assert!(session.sync().is_err());
        assert_eq!(session.screen(), Screen::Dashboard);
        assert!(session.dashboard().is_none());
        assert_eq!(backend.listener_count(), 0);

        std::fs::write(&expenses, r#"{"documents":[]}"#).unwrap();
        assert!(session.sync().unwrap());
        assert_eq!(session.dashboard().map(Dashboard::user), Some(user.id));
        assert_eq!(backend.listener_count(), 3);
    }

    #[test]
    fn test_restored_session_opens_dashboard() {
        let dir = TempDir::new().unwrap();
        let user = backend(&dir).sign_up("kim@example.com", "secret1").unwrap();

        let backend = backend(&dir);
        let mut session = session(&backend);
        assert_eq!(session.screen(), Screen::Loading);
        assert!(session.sync().unwrap());
        assert_eq!(session.user(), Some(&user));
        assert!(session.dashboard().is_some());
    }
}
