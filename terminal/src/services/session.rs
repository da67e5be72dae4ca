//! # Session Persistence
//!
//! The session is two entries (`token`, `user.json`) under a session
//! directory next to the binary.
//!
//! Restore rules: a session exists only when both entries are present,
//! and a user payload that fails to parse wipes both entries, with no
//! retry or partial recovery. Expiry is never tracked locally; it is
//! discovered reactively through a 401 response.

use parking_lot::RwLock;
use shared::User;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::AppError;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// A restored session: both entries present and parseable.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// On-disk session state with an in-memory token mirror.
///
/// The mirror exists so the HTTP layer can sign every request without
/// touching the disk; it is updated by `load`/`save`/`clear` only.
pub struct SessionStore {
    dir: PathBuf,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Store under the default session directory in the working
    /// directory.
    pub fn new() -> Self {
        Self::with_dir(PathBuf::from("./cointerm-session"))
    }

    /// Store under an explicit directory. Tests use this with a temp dir.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            token: RwLock::new(None),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    /// Current token, if a session is held.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Restore the persisted session, if any.
    ///
    /// Returns `None` when either entry is missing. A present but
    /// corrupted user payload clears BOTH entries and returns `None`.
    pub fn load(&self) -> Option<StoredSession> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => return None,
        };
        let raw_user = fs::read_to_string(self.user_path()).ok()?;

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                *self.token.write() = Some(token.clone());
                Some(StoredSession { token, user })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored user payload is corrupted, clearing session");
                self.clear();
                None
            }
        }
    }

    /// Persist a session: token first, then the user blob, as two
    /// sequential writes.
    pub fn save(&self, token: &str, user: &User) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(self.token_path(), token).map_err(|e| AppError::Session(e.to_string()))?;
        let raw_user =
            serde_json::to_string(user).map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(self.user_path(), raw_user).map_err(|e| AppError::Session(e.to_string()))?;
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    /// Remove both entries. Missing files are not an error.
    pub fn clear(&self) {
        *self.token.write() = None;
        remove_if_present(&self.token_path());
        remove_if_present(&self.user_path());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_if_present(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove session entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> SessionStore {
        let dir = std::env::temp_dir().join(format!(
            "cointerm-session-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        SessionStore::with_dir(dir)
    }

    fn sample_user() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            balance: 10_000.0,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        store.save("tok-123", &sample_user()).unwrap();

        let session = store.load().expect("session should restore");
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.username, "alice");
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear();
    }

    #[test]
    fn corrupted_user_clears_both_entries() {
        let store = temp_store();
        store.save("tok-123", &sample_user()).unwrap();
        fs::write(store.user_path(), "{not json").unwrap();

        assert!(store.load().is_none());
        assert!(!store.token_path().exists());
        assert!(!store.user_path().exists());
        assert!(store.token().is_none());
    }

    #[test]
    fn missing_entries_mean_anonymous() {
        let store = temp_store();
        assert!(store.load().is_none());

        // Token alone is not a session, and is left in place.
        fs::create_dir_all(store.token_path().parent().unwrap()).unwrap();
        fs::write(store.token_path(), "tok-123").unwrap();
        assert!(store.load().is_none());
        assert!(store.token_path().exists());

        store.clear();
    }

    #[test]
    fn clear_is_idempotent() {
        let store = temp_store();
        store.clear();
        store.save("tok", &sample_user()).unwrap();
        store.clear();
        store.clear();
        assert!(store.load().is_none());
    }
}
