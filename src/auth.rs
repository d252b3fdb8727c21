use crate::error::StudioError;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};

pub const USERS_KEY: &str = "users";
pub const SESSION_KEY: &str = "currentUser";

pub const MIN_PASSWORD_LEN: usize = 4;

/// A registered account. Created once at registration, never mutated.
/// Plaintext password by design of the demo; field names keep the original
/// on-disk JSON contract.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(rename = "registrationDate")]
    pub registration_date: String,
}

/// The single logged-in account of this profile. Replaced wholesale on
/// login, removed on logout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    #[serde(rename = "loginTime")]
    pub login_time: String,
}

/// Owns the account list and the session record on top of the store.
/// Every mutation rewrites the full collection (last writer wins).
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: KvStore,
}

impl SessionManager {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.store.get_json(USERS_KEY).unwrap_or_default()
    }

    /// Validate and append a new account.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<(), StudioError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() || password_confirm.is_empty() {
            return Err(StudioError::Validation(
                "Будь ласка, заповніть всі поля".into(),
            ));
        }
        if password != password_confirm {
            return Err(StudioError::Validation("Паролі не співпадають".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(StudioError::Validation(
                "Пароль повинен містити щонайменше 4 символи".into(),
            ));
        }

        let mut accounts = self.accounts();
        if accounts.iter().any(|a| a.username == username) {
            return Err(StudioError::DuplicateUser(
                "Користувач з таким логіном вже існує".into(),
            ));
        }

        accounts.push(Account {
            username: username.to_string(),
            password: password.to_string(),
            registration_date: chrono::Utc::now().to_rfc3339(),
        });
        self.store.set_json(USERS_KEY, &accounts);
        tracing::info!("registered account '{username}'");
        Ok(())
    }

    /// Exact-match credential check. On success a new session supersedes any
    /// existing one.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, StudioError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(StudioError::Validation(
                "Будь ласка, заповніть всі поля".into(),
            ));
        }

        let accounts = self.accounts();
        let matched = accounts
            .iter()
            .any(|a| a.username == username && a.password == password);
        if !matched {
            return Err(StudioError::Auth("Неправильний логін або пароль".into()));
        }

        let session = Session {
            username: username.to_string(),
            login_time: chrono::Utc::now().to_rfc3339(),
        };
        self.store.set_json(SESSION_KEY, &session);
        tracing::info!("session opened for '{username}'");
        Ok(session)
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.get_json(SESSION_KEY)
    }

    /// Delete the session record. Confirmation is the caller's concern.
    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
        tracing::info!("session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionManager, MIN_PASSWORD_LEN};
    use crate::error::StudioError;
    use crate::store::KvStore;
    use tempfile::tempdir;

    fn manager(dir: &std::path::Path) -> SessionManager {
        SessionManager::new(KvStore::open(dir))
    }

    #[test]
    fn register_then_login_round_trip() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        auth.register("alice", "pass1", "pass1").expect("register");
        let session = auth.login("alice", "pass1").expect("login");
        assert_eq!(session.username, "alice");
        assert_eq!(
            auth.current_session().expect("session").username,
            "alice"
        );
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        auth.register("alice", "pass1", "pass1").expect("first");
        let err = auth.register("alice", "other", "other").unwrap_err();
        assert!(matches!(err, StudioError::DuplicateUser(_)));
        assert_eq!(auth.accounts().len(), 1);
    }

    #[test]
    fn wrong_password_fails_without_session_mutation() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        auth.register("alice", "pass1", "pass1").expect("register");
        let err = auth.login("alice", "wrong").unwrap_err();
        assert!(matches!(err, StudioError::Auth(_)));
        assert!(auth.current_session().is_none());
    }

    #[test]
    fn validation_rules() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        assert!(matches!(
            auth.register("", "pass1", "pass1").unwrap_err(),
            StudioError::Validation(_)
        ));
        assert!(matches!(
            auth.register("bob", "pass1", "pass2").unwrap_err(),
            StudioError::Validation(_)
        ));
        let short = "a".repeat(MIN_PASSWORD_LEN - 1);
        assert!(matches!(
            auth.register("bob", &short, &short).unwrap_err(),
            StudioError::Validation(_)
        ));
        assert!(auth.accounts().is_empty());
    }

    #[test]
    fn username_match_is_case_sensitive() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        auth.register("Alice", "pass1", "pass1").expect("register");
        auth.register("alice", "pass1", "pass1")
            .expect("different case is a different user");
        assert!(auth.login("ALICE", "pass1").is_err());
    }

    #[test]
    fn login_supersedes_previous_session_and_logout_removes_it() {
        let dir = tempdir().expect("tempdir");
        let auth = manager(dir.path());

        auth.register("alice", "pass1", "pass1").expect("register");
        auth.register("bob", "pass2", "pass2").expect("register");

        auth.login("alice", "pass1").expect("login alice");
        auth.login("bob", "pass2").expect("login bob");
        assert_eq!(auth.current_session().expect("session").username, "bob");

        auth.logout();
        assert!(auth.current_session().is_none());
    }
}
