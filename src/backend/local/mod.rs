//! File-backed backend
//!
//! Implements both collaborator traits on top of JSON files under the data
//! directory. Documents are only reachable by the signed-in user whose id
//! owns the partition.

mod auth;
mod documents;
pub mod file_io;
pub mod password;

use std::fmt::Display;

use crate::backend::{
    AuthListener, AuthProvider, CollectionPath, DocumentStore, Fields, SnapshotListener,
    Subscription,
};
use crate::config::WeddingPaths;
use crate::error::{WeddingError, WeddingResult};
use crate::models::User;

pub use auth::LocalAuth;
pub use documents::LocalDocuments;

pub(crate) fn lock_error<E: Display>(e: E) -> WeddingError {
    WeddingError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Local accounts plus per-user document collections
pub struct LocalBackend {
    auth: LocalAuth,
    documents: LocalDocuments,
}

impl LocalBackend {
    /// Open the backend stored under the given paths
    pub fn open(paths: &WeddingPaths) -> WeddingResult<Self> {
        let auth = LocalAuth::open(paths.accounts_file(), paths.session_file())?;
        Ok(Self {
            auth,
            documents: LocalDocuments::new(paths.clone()),
        })
    }

    /// Number of live document listeners
    pub fn listener_count(&self) -> usize {
        self.documents.listener_count()
    }

    fn authorize(&self, path: &CollectionPath) -> WeddingResult<()> {
        let user = self.auth.current_user().ok_or(WeddingError::NotSignedIn)?;
        if user.id != path.user() {
            tracing::warn!(user = %user.id, collection = %path, "Rejected access to another partition");
            return Err(WeddingError::PermissionDenied(path.to_string()));
        }
        Ok(())
    }
}

impl AuthProvider for LocalBackend {
    fn sign_up(&self, email: &str, password: &str) -> WeddingResult<User> {
        self.auth.sign_up(email, password)
    }

    fn sign_in(&self, email: &str, password: &str) -> WeddingResult<User> {
        self.auth.sign_in(email, password)
    }

    fn sign_out(&self) -> WeddingResult<()> {
        self.auth.sign_out()
    }

    fn current_user(&self) -> Option<User> {
        self.auth.current_user()
    }

    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        self.auth.on_auth_state_changed(listener)
    }
}

impl DocumentStore for LocalBackend {
    fn subscribe(
        &self,
        path: &CollectionPath,
        listener: SnapshotListener,
    ) -> WeddingResult<Subscription> {
        self.authorize(path)?;
        self.documents.subscribe(path, listener)
    }

    fn create(&self, path: &CollectionPath, fields: Fields) -> WeddingResult<String> {
        self.authorize(path)?;
        self.documents.create(path, fields)
    }

    fn update(&self, path: &CollectionPath, id: &str, fields: Fields) -> WeddingResult<()> {
        self.authorize(path)?;
        self.documents.update(path, id, fields)
    }

    fn delete(&self, path: &CollectionPath, id: &str) -> WeddingResult<()> {
        self.authorize(path)?;
        self.documents.delete(path, id)
    }
}
