//! Local account provider
//!
//! Accounts live in accounts.json with Argon2 hashes; the signed-in user id
//! is kept in session.json so it survives between CLI invocations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::{AuthListener, Subscription};
use crate::error::{WeddingError, WeddingResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use super::lock_error;
use super::password::{check_strength, hash_password, verify_password};

/// One stored account
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountRecord {
    id: UserId,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRecord {
    fn user(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountData {
    users: Vec<AccountRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    user_id: Option<UserId>,
}

type ListenerMap = HashMap<u64, AuthListener>;

/// Email/password accounts backed by JSON files
pub struct LocalAuth {
    accounts_path: PathBuf,
    session_path: PathBuf,
    accounts: RwLock<Vec<AccountRecord>>,
    current: RwLock<Option<User>>,
    listeners: Arc<RwLock<ListenerMap>>,
    next_listener: AtomicU64,
}

impl LocalAuth {
    /// Load accounts and restore the persisted session
    pub fn open(accounts_path: PathBuf, session_path: PathBuf) -> WeddingResult<Self> {
        let accounts: AccountData = read_json(&accounts_path)?;
        let session: SessionData = read_json(&session_path)?;

        let current = session.user_id.and_then(|id| {
            let found = accounts.users.iter().find(|a| a.id == id).map(|a| a.user());
            if found.is_none() {
                tracing::warn!(user = %id, "Session refers to an unknown account; ignoring it");
            }
            found
        });

        Ok(Self {
            accounts_path,
            session_path,
            accounts: RwLock::new(accounts.users),
            current: RwLock::new(current),
            listeners: Arc::new(RwLock::new(HashMap::new())),
            next_listener: AtomicU64::new(0),
        })
    }

    /// Create an account and sign into it
    pub fn sign_up(&self, email: &str, password: &str) -> WeddingResult<User> {
        let email = normalize_email(email)?;
        check_strength(password)?;

        let record = {
            let mut accounts = self.accounts.write().map_err(lock_error)?;
            if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(&email)) {
                return Err(WeddingError::Duplicate {
                    entity_type: "Account",
                    identifier: email,
                });
            }

            let record = AccountRecord {
                id: UserId::new(),
                email,
                password_hash: hash_password(password)?,
                created_at: Utc::now(),
            };

            let mut updated = accounts.clone();
            updated.push(record.clone());
            write_json_atomic(&self.accounts_path, &AccountData { users: updated.clone() })?;
            *accounts = updated;
            record
        };

        tracing::info!(user = %record.id, email = %record.email, "Account created");
        let user = record.user();
        self.set_current(Some(user.clone()))?;
        Ok(user)
    }

    /// Sign into an existing account
    pub fn sign_in(&self, email: &str, password: &str) -> WeddingResult<User> {
        let email = normalize_email(email)?;

        let record = {
            let accounts = self.accounts.read().map_err(lock_error)?;
            accounts
                .iter()
                .find(|a| a.email.eq_ignore_ascii_case(&email))
                .cloned()
        };

        let record = match record {
            Some(record) if verify_password(password, &record.password_hash)? => record,
            _ => {
                tracing::info!(email = %email, "Sign-in rejected");
                return Err(WeddingError::Auth("Invalid email or password".into()));
            }
        };

        let user = record.user();
        self.set_current(Some(user.clone()))?;
        Ok(user)
    }

    /// Clear the session
    pub fn sign_out(&self) -> WeddingResult<()> {
        if self.current_user().is_none() {
            return Ok(());
        }
        self.set_current(None)
    }

    /// The currently signed-in user
    pub fn current_user(&self) -> Option<User> {
        self.current.read().ok().and_then(|current| current.clone())
    }

    /// Register an auth listener and deliver the current state to it
    pub fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        let key = self.next_listener.fetch_add(1, Ordering::Relaxed);

        match self.listeners.write() {
            Ok(mut listeners) => {
                listeners.insert(key, Arc::clone(&listener));
            }
            Err(e) => tracing::error!(error = %e, "Failed to register auth listener"),
        }

        listener(self.current_user().as_ref());

        let listeners = Arc::clone(&self.listeners);
        Subscription::new("auth", move || {
            if let Ok(mut listeners) = listeners.write() {
                listeners.remove(&key);
            }
        })
    }

    fn set_current(&self, user: Option<User>) -> WeddingResult<()> {
        match &user {
            Some(user) => write_json_atomic(
                &self.session_path,
                &SessionData {
                    user_id: Some(user.id),
                },
            )?,
            None => remove_if_exists(&self.session_path)?,
        }

        {
            let mut current = self.current.write().map_err(lock_error)?;
            *current = user.clone();
        }

        match &user {
            Some(user) => tracing::info!(user = %user.id, "Signed in"),
            None => tracing::info!("Signed out"),
        }

        // Listeners run without any lock held so they may call back in
        let listeners: Vec<AuthListener> = self
            .listeners
            .read()
            .map_err(lock_error)?
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(user.as_ref());
        }

        Ok(())
    }
}

fn normalize_email(email: &str) -> WeddingResult<String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(WeddingError::Auth(format!("Invalid email address: {}", email))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> LocalAuth {
        LocalAuth::open(
            dir.path().join("accounts.json"),
            dir.path().join("session.json"),
        )
        .unwrap()
    }

    #[test]
    fn test_sign_up_signs_in_and_persists_session() {
        let dir = TempDir::new().unwrap();
        let auth = open(&dir);

        let user = auth.sign_up("alex@example.com", "secret1").unwrap();
        assert_eq!(auth.current_user(), Some(user.clone()));

        let reopened = open(&dir);
        assert_eq!(reopened.current_user(), Some(user));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let dir = TempDir::new().unwrap();
        let auth = open(&dir);
        auth.sign_up("alex@example.com", "secret1").unwrap();

        let err = auth.sign_up("ALEX@example.com", "secret2").unwrap_err();
        assert!(matches!(err, WeddingError::Duplicate { .. }));
    }

    #[test]
    fn test_sign_up_validation() {
        let dir = TempDir::new().unwrap();
        let auth = open(&dir);
        assert!(matches!(
            auth.sign_up("not-an-email", "secret1"),
            Err(WeddingError::Auth(_))
        ));
        assert!(matches!(
            auth.sign_up("alex@example.com", "short"),
            Err(WeddingError::Auth(_))
        ));
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_sign_in_and_out() {
        let dir = TempDir::new().unwrap();
        let auth = open(&dir);
        let user = auth.sign_up("alex@example.com", "secret1").unwrap();
        auth.sign_out().unwrap();
        assert!(auth.current_user().is_none());
        assert!(!dir.path().join("session.json").exists());

        let err = auth.sign_in("alex@example.com", "wrong-pass").unwrap_err();
        assert!(matches!(err, WeddingError::Auth(_)));
        let err = auth.sign_in("nobody@example.com", "secret1").unwrap_err();
        assert!(matches!(err, WeddingError::Auth(_)));

        let signed_in = auth.sign_in(" Alex@Example.com ", "secret1").unwrap();
        assert_eq!(signed_in, user);
    }

    #[test]
    fn test_listener_called_immediately_and_on_change() {
        let dir = TempDir::new().unwrap();
        let auth = open(&dir);
        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let sub = auth.on_auth_state_changed(Arc::new(move |user: Option<&User>| {
            sink.lock().unwrap().push(user.map(|u| u.email.clone()));
        }));

        auth.sign_up("alex@example.com", "secret1").unwrap();
        auth.sign_out().unwrap();
        drop(sub);
        auth.sign_in("alex@example.com", "secret1").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![None, Some("alex@example.com".to_string()), None]
        );
    }
}
