use chrono::{TimeDelta, Utc};
use serde_json::json;
use uuid::Uuid;

use avicor_client::api::ApiError;
use avicor_client::domain::auth::{LoginCredentials, User};
use avicor_client::services::auth::{login, logout};
use avicor_client::session::{
    InMemorySessionStorage, SessionStorage, SessionStore, TOKEN_EXPIRY_KEY, TOKEN_KEY, USER_KEY,
};

mod common;

use common::{FailingStorage, StubApi};

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "admin@example.com".into(),
        password: "Secreta123".into(),
    }
}

#[test]
fn token_round_trips_without_expiry() {
    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());

    session.set_token("tok-1", None);

    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert!(session.is_authenticated());
    assert_eq!(storage.get(TOKEN_EXPIRY_KEY).unwrap(), None);
}

#[test]
fn token_with_future_expiry_is_returned() {
    let session = SessionStore::new(InMemorySessionStorage::default());

    session.set_token("tok-2", Some(TimeDelta::hours(24)));

    assert_eq!(session.token().as_deref(), Some("tok-2"));
}

#[test]
fn expired_token_clears_the_whole_session() {
    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());

    let past = Utc::now().timestamp_millis() - 1_000;
    storage.set(TOKEN_KEY, "stale").unwrap();
    storage.set(TOKEN_EXPIRY_KEY, &past.to_string()).unwrap();
    storage
        .set(USER_KEY, &json!({ "id": Uuid::new_v4(), "email": "a@b.c" }).to_string())
        .unwrap();

    assert_eq!(session.token(), None);

    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(TOKEN_EXPIRY_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn unparseable_expiry_is_ignored() {
    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());

    storage.set(TOKEN_KEY, "tok-garbled").unwrap();
    storage.set(TOKEN_EXPIRY_KEY, "not-a-number").unwrap();

    assert_eq!(session.token().as_deref(), Some("tok-garbled"));
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-garbled"));
    assert_eq!(
        storage.get(TOKEN_EXPIRY_KEY).unwrap().as_deref(),
        Some("not-a-number")
    );
}

#[test]
fn storing_a_token_without_ttl_drops_the_previous_expiry() {
    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());

    let past = Utc::now().timestamp_millis() - 1_000;
    storage.set(TOKEN_KEY, "old-token").unwrap();
    storage.set(TOKEN_EXPIRY_KEY, &past.to_string()).unwrap();

    session.set_token("fresh-token", None);

    assert_eq!(storage.get(TOKEN_EXPIRY_KEY).unwrap(), None);
    assert_eq!(session.token().as_deref(), Some("fresh-token"));
}

#[test]
fn user_record_is_independent_of_token_state() {
    let session = SessionStore::new(InMemorySessionStorage::default());
    let user = User {
        id: Uuid::new_v4(),
        email: "someone@example.com".into(),
    };

    session.set_user(&user);

    assert_eq!(session.user(), Some(user));
    assert!(!session.is_authenticated());
}

#[test]
fn clear_removes_every_key() {
    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());

    session.set_token("tok-3", Some(TimeDelta::hours(1)));
    session.set_user(&User {
        id: Uuid::new_v4(),
        email: "x@y.z".into(),
    });
    session.clear();

    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(TOKEN_EXPIRY_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[test]
fn storage_faults_degrade_to_no_session() {
    let session = SessionStore::new(FailingStorage);

    session.set_token("tok-4", Some(TimeDelta::hours(1)));
    session.set_user(&User {
        id: Uuid::new_v4(),
        email: "x@y.z".into(),
    });

    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert!(!session.is_authenticated());
    logout(&session);
}

#[tokio::test]
async fn login_stores_token_with_a_24_hour_window() {
    let api = StubApi::new();
    let user_id = Uuid::new_v4();
    api.push_response(Ok(json!({
        "status": "success",
        "token": "jwt-token",
        "data": { "id": user_id.to_string(), "email": "admin@example.com" }
    })));

    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());
    let before = Utc::now().timestamp_millis();

    let response = login(&api, &session, &credentials()).await.unwrap();

    let after = Utc::now().timestamp_millis();
    assert_eq!(response.token, "jwt-token");
    assert_eq!(session.token().as_deref(), Some("jwt-token"));
    assert_eq!(session.user().map(|u| u.id), Some(user_id));

    let expires_at: i64 = storage
        .get(TOKEN_EXPIRY_KEY)
        .unwrap()
        .unwrap()
        .parse()
        .unwrap();
    let day_ms = 24 * 60 * 60 * 1_000;
    assert!(expires_at >= before + day_ms);
    assert!(expires_at <= after + day_ms);

    let calls = api.calls();
    assert_eq!(calls[0].method, "POST_PUBLIC");
    assert_eq!(calls[0].path, "/auth/login");
}

#[tokio::test]
async fn failed_login_clears_any_existing_session_and_rethrows() {
    let api = StubApi::new();
    api.push_response(Err(ApiError::Unauthorized));

    let storage = InMemorySessionStorage::default();
    let session = SessionStore::new(storage.clone());
    session.set_token("stale-token", None);
    session.set_user(&User {
        id: Uuid::new_v4(),
        email: "old@example.com".into(),
    });

    let err = login(&api, &session, &credentials()).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn logout_after_login_leaves_nothing_behind() {
    let api = StubApi::new();
    api.push_response(Ok(json!({
        "status": "success",
        "token": "jwt-token",
        "data": { "id": Uuid::new_v4().to_string(), "email": "admin@example.com" }
    })));

    let session = SessionStore::new(InMemorySessionStorage::default());
    login(&api, &session, &credentials()).await.unwrap();
    assert!(session.is_authenticated());

    logout(&session);

    assert!(!session.is_authenticated());
    assert_eq!(session.user(), None);
}
