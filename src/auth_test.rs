use super::*;

fn sample_user() -> UserProfile {
    UserProfile {
        id: 3,
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        profile_photo: None,
        bio: None,
    }
}

fn gateway_with_store() -> (AuthGateway, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::ephemeral());
    let gateway = AuthGateway::new(
        ApiConfig::new("http://127.0.0.1:1/api"),
        Arc::clone(&store),
    );
    (gateway, store)
}

// =============================================================================
// commit
// =============================================================================

#[test]
fn commit_populates_store_and_flips_stream() {
    let (gateway, store) = gateway_with_store();
    let mut rx = store.subscribe();
    assert!(!*rx.borrow_and_update());

    let response = AuthResponse {
        access_token: "acc".to_owned(),
        refresh_token: "ref".to_owned(),
        user: sample_user(),
    };
    gateway.commit(&response).unwrap();

    assert_eq!(store.access_token().as_deref(), Some("acc"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref"));
    assert_eq!(store.user().unwrap().id, 3);
    assert!(rx.has_changed().unwrap());
    assert!(*rx.borrow_and_update());
}

#[test]
fn commit_emits_true_exactly_once() {
    let (gateway, store) = gateway_with_store();
    let mut rx = store.subscribe();

    let response = AuthResponse {
        access_token: "acc".to_owned(),
        refresh_token: "ref".to_owned(),
        user: sample_user(),
    };
    gateway.commit(&response).unwrap();
    assert!(rx.has_changed().unwrap());
    assert!(*rx.borrow_and_update());
    assert!(!rx.has_changed().unwrap());
}

// =============================================================================
// refresh
// =============================================================================

#[tokio::test]
async fn refresh_without_stored_token_errors() {
    let (gateway, store) = gateway_with_store();
    let error = gateway.refresh().await.unwrap_err();
    assert!(matches!(error, ApiError::MissingRefreshToken));
    assert!(store.access_token().is_none());
    assert!(!store.is_authenticated());
}

// =============================================================================
// fallback strings
// =============================================================================

#[test]
fn fallbacks_are_user_facing_sentences() {
    for fallback in [
        REGISTER_FALLBACK,
        LOGIN_FALLBACK,
        REFRESH_FALLBACK,
        PROFILE_FALLBACK,
    ] {
        assert!(fallback.ends_with('.'));
        assert!(!fallback.is_empty());
    }
}
