use stego_studio::auth::SessionManager;
use stego_studio::error::StudioError;
use stego_studio::store::KvStore;
use tempfile::tempdir;

#[test]
fn register_login_wrong_password_scenario() {
    let dir = tempdir().expect("tempdir");
    let auth = SessionManager::new(KvStore::open(dir.path()));

    auth.register("alice", "pass1", "pass1").expect("register");

    let session = auth.login("alice", "pass1").expect("login");
    assert_eq!(session.username, "alice");

    let err = auth.login("alice", "wrong").unwrap_err();
    assert!(matches!(err, StudioError::Auth(_)));
    // the failed login must not touch the stored session
    assert_eq!(auth.current_session().expect("session").username, "alice");
}

#[test]
fn session_survives_a_new_manager_over_the_same_profile() {
    let dir = tempdir().expect("tempdir");
    {
        let auth = SessionManager::new(KvStore::open(dir.path()));
        auth.register("bob", "secret", "secret").expect("register");
        auth.login("bob", "secret").expect("login");
    }

    // a fresh manager over the same profile dir sees the session
    let reopened = SessionManager::new(KvStore::open(dir.path()));
    assert_eq!(reopened.current_session().expect("session").username, "bob");

    reopened.logout();
    assert!(reopened.current_session().is_none());
}

#[test]
fn accounts_persist_in_the_users_key() {
    let dir = tempdir().expect("tempdir");
    let auth = SessionManager::new(KvStore::open(dir.path()));
    auth.register("carol", "pass1", "pass1").expect("register");

    let raw = std::fs::read_to_string(dir.path().join("users.json")).expect("users file");
    let users: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(users[0]["username"], "carol");
    // original on-disk field names are kept
    assert!(users[0]["registrationDate"].is_string());
}
