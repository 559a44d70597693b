//! Durable session store: token pair, cached profile, auth-state stream.
//!
//! ARCHITECTURE
//! ============
//! The store is an explicitly constructed instance injected into the auth
//! gateway and the request layer; nothing reads it as ambient global state.
//! Committing a session is one atomic operation: a single in-memory swap
//! under the lock followed by a single document written to disk, so readers
//! never observe a half-updated token/user combination.
//!
//! Authentication state is exposed as a `tokio::sync::watch` channel of
//! `bool`: subscribers read the current value immediately and are notified
//! on every transition. No expiry is enforced locally; an expired-but-present
//! access token still reads as authenticated until the backend rejects it.
//!
//! ERROR HANDLING
//! ==============
//! Disk failures never poison in-memory state: the swap and the state
//! emission happen first, persistence errors are logged and returned last.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::types::UserProfile;

/// The persisted session document. Field names are the storage keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct SessionDocument {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<UserProfile>,
}

/// Owns the access/refresh tokens and the cached user profile.
pub struct SessionStore {
    state: Mutex<SessionDocument>,
    path: Option<PathBuf>,
    auth_tx: watch::Sender<bool>,
}

impl SessionStore {
    /// Open a file-backed store, loading any session persisted at `path`.
    ///
    /// A missing file starts an empty (unauthenticated) session. An
    /// unreadable document is discarded with a warning rather than failing
    /// startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let state = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<SessionDocument>(&bytes) {
                Ok(document) => document,
                Err(error) => {
                    warn!(%error, path = %path.display(), "session document unreadable; starting empty");
                    SessionDocument::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => SessionDocument::default(),
            Err(error) => return Err(SessionError::Io(error)),
        };
        let (auth_tx, _) = watch::channel(state.access_token.is_some());
        Ok(Self {
            state: Mutex::new(state),
            path: Some(path),
            auth_tx,
        })
    }

    /// Open a memory-only store that never touches disk. Used in contexts
    /// without durable storage and in tests.
    #[must_use]
    pub fn ephemeral() -> Self {
        let (auth_tx, _) = watch::channel(false);
        Self {
            state: Mutex::new(SessionDocument::default()),
            path: None,
            auth_tx,
        }
    }

    /// Current access token, if present.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.locked().access_token.clone()
    }

    /// Current refresh token, if present.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.locked().refresh_token.clone()
    }

    /// Cached profile of the authenticated user, if present.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.locked().user.clone()
    }

    /// Whether an access token is currently stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        *self.auth_tx.borrow()
    }

    /// Subscribe to authentication-state transitions. The receiver's initial
    /// borrow is the current value (replay-latest); every later transition
    /// notifies it until dropped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.auth_tx.subscribe()
    }

    /// Commit a full session (both tokens plus the user) in one operation.
    /// Called after every successful login/register response.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be persisted; in-memory
    /// state and the auth stream are already updated when this happens.
    pub fn set_session(
        &self,
        access_token: String,
        refresh_token: String,
        user: UserProfile,
    ) -> Result<(), SessionError> {
        let document = {
            let mut state = self.locked();
            *state = SessionDocument {
                access_token: Some(access_token),
                refresh_token: Some(refresh_token),
                user: Some(user),
            };
            state.clone()
        };
        self.update_auth_state(true);
        debug!("session committed");
        self.persist(&document)
    }

    /// Overwrite the token pair, keeping the cached user. Called after a
    /// successful refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be persisted.
    pub fn set_tokens(&self, access_token: String, refresh_token: String) -> Result<(), SessionError> {
        let document = {
            let mut state = self.locked();
            state.access_token = Some(access_token);
            state.refresh_token = Some(refresh_token);
            state.clone()
        };
        self.update_auth_state(true);
        self.persist(&document)
    }

    /// Replace the cached profile, keeping the tokens. Called after a
    /// successful profile update.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be persisted.
    pub fn set_user(&self, user: UserProfile) -> Result<(), SessionError> {
        let document = {
            let mut state = self.locked();
            state.user = Some(user);
            state.clone()
        };
        self.persist(&document)
    }

    /// Remove all three fields unconditionally and delete the persisted
    /// document. Used on logout.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted document exists but could not be
    /// removed.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        {
            let mut state = self.locked();
            *state = SessionDocument::default();
        }
        self.update_auth_state(false);
        debug!("session cleared");
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => return Err(error.into()),
            }
        }
        Ok(())
    }

    fn locked(&self) -> MutexGuard<'_, SessionDocument> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emit on the watch channel only when the value actually flips, so
    /// subscribers see one notification per transition.
    fn update_auth_state(&self, authenticated: bool) {
        self.auth_tx.send_if_modified(|current| {
            if *current == authenticated {
                false
            } else {
                *current = authenticated;
                true
            }
        });
    }

    fn persist(&self, document: &SessionDocument) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let result = write_document(path, document);
        if let Err(error) = &result {
            warn!(%error, path = %path.display(), "failed to persist session");
        }
        result
    }
}

fn write_document(path: &Path, document: &SessionDocument) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = serde_json::to_vec_pretty(document)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
