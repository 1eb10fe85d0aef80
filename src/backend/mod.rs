//! Backend collaborator surface
//!
//! Authentication, persistence and realtime sync belong to a backend service.
//! The rest of the crate only talks to it through the two traits defined
//! here, so the hosted service can be swapped for the bundled
//! [`LocalBackend`] or a test double.
//!
//! Listener callbacks may run on any thread; consumers forward them into a
//! channel and drain it on their own thread.

pub mod local;
pub mod subscription;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::WeddingResult;
use crate::models::{User, UserId};

pub use local::LocalBackend;
pub use subscription::{Subscription, SubscriptionSet};

/// Field map of a stored document
pub type Fields = Map<String, Value>;

/// Callback receiving the full contents of a collection
pub type SnapshotListener = Arc<dyn Fn(&[Document]) + Send + Sync>;

/// Callback receiving the signed-in user, or `None` after sign-out
pub type AuthListener = Arc<dyn Fn(Option<&User>) + Send + Sync>;

/// A stored document: backend-assigned id plus its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
}

/// The per-user collections the budget lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Expenses,
    Income,
    Categories,
}

impl Collection {
    /// Path segment of the collection
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Income => "income",
            Self::Categories => "categories",
        }
    }
}

/// Address of a collection inside a user's partition: `users/{uid}/{collection}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    user: UserId,
    collection: Collection,
}

impl CollectionPath {
    /// Build the path of a user's collection
    pub fn new(user: UserId, collection: Collection) -> Self {
        Self { user, collection }
    }

    /// Owner of the partition
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Which collection
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Path segments, e.g. `["users", "<uid>", "expenses"]`
    pub fn segments(&self) -> [String; 3] {
        [
            "users".to_string(),
            self.user.key(),
            self.collection.as_str().to_string(),
        ]
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "users/{}/{}", self.user.key(), self.collection.as_str())
    }
}

/// Authentication half of the backend
pub trait AuthProvider: Send + Sync {
    /// Create an account and sign into it
    fn sign_up(&self, email: &str, password: &str) -> WeddingResult<User>;

    /// Sign into an existing account
    fn sign_in(&self, email: &str, password: &str) -> WeddingResult<User>;

    /// Sign out the current user (no-op when nobody is signed in)
    fn sign_out(&self) -> WeddingResult<()>;

    /// The currently signed-in user
    fn current_user(&self) -> Option<User>;

    /// Observe auth state; the listener is called once immediately with the
    /// current state and again after every change
    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription;
}

/// Document half of the backend
pub trait DocumentStore: Send + Sync {
    /// Listen to a collection; the listener receives the full collection now
    /// and after every change
    fn subscribe(
        &self,
        path: &CollectionPath,
        listener: SnapshotListener,
    ) -> WeddingResult<Subscription>;

    /// Add a document, returning its new id
    fn create(&self, path: &CollectionPath, fields: Fields) -> WeddingResult<String>;

    /// Merge fields into an existing document; fields not given are kept
    fn update(&self, path: &CollectionPath, id: &str, fields: Fields) -> WeddingResult<()>;

    /// Remove a document
    fn delete(&self, path: &CollectionPath, id: &str) -> WeddingResult<()>;
}
