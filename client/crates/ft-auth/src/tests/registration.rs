use crate::error::AuthError;
use crate::flows::{AuthMode, Authenticator, RegistrationForm};
use crate::messages::{ALREADY_REGISTERED_LOCAL, REGISTRATION_FAILED};
use crate::store::SessionFlags;
use crate::tests::{FakeAuthApi, Reply, memory_store};

use std::sync::Arc;

use ft_config::FallbackPolicy;
use googletest::assert_that;
use googletest::prelude::eq;

fn jane() -> RegistrationForm {
    RegistrationForm {
        full_name: "Jane".to_string(),
        email: "j@x.com".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        agree_terms: true,
    }
}

fn authenticator(api: FakeAuthApi, policy: FallbackPolicy) -> Authenticator {
    Authenticator::new(memory_store(), Arc::new(api), policy)
}

#[tokio::test]
async fn given_remote_accepts_when_register_then_no_local_record_and_not_signed_in() {
    // Given
    let auth = authenticator(FakeAuthApi::online(), FallbackPolicy::NetworkOnly);

    // When
    let outcome = auth.register(&jane()).await.unwrap();

    // Then
    assert_eq!(outcome.mode, AuthMode::Remote);
    assert_that!(auth.store().users().unwrap().len(), eq(0));
    assert_eq!(auth.store().session_flags().unwrap(), SessionFlags::default());
}

#[tokio::test]
async fn given_remote_unreachable_when_register_then_local_record_appended() {
    // Given
    let auth = authenticator(FakeAuthApi::offline(), FallbackPolicy::NetworkOnly);

    // When
    let outcome = auth.register(&jane()).await.unwrap();

    // Then
    assert_eq!(outcome.mode, AuthMode::Local);
    let users = auth.store().users().unwrap();
    assert_that!(users.len(), eq(1));
    assert_eq!(users[0].full_name, "Jane");
    assert_eq!(auth.store().session_flags().unwrap(), SessionFlags::default());
}

#[tokio::test]
async fn given_offline_when_registering_same_email_twice_then_second_already_registered() {
    // Given
    let auth = authenticator(FakeAuthApi::offline(), FallbackPolicy::NetworkOnly);
    auth.register(&jane()).await.unwrap();

    // When
    let error = auth.register(&jane()).await.unwrap_err();

    // Then
    assert!(matches!(error, AuthError::AlreadyRegistered { .. }));
    assert_eq!(error.user_message(), ALREADY_REGISTERED_LOCAL);
    assert_that!(auth.store().users().unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_remote_conflict_when_register_then_server_message_and_no_local_record() {
    // Given
    let api = FakeAuthApi::online().with_register(Reply::Rejected(409, Some("Email already exists")));
    let auth = authenticator(api, FallbackPolicy::NetworkOnly);

    // When
    let error = auth.register(&jane()).await.unwrap_err();

    // Then
    assert!(matches!(error, AuthError::RegistrationRejected { .. }));
    assert_eq!(error.user_message(), "Email already exists");
    assert_that!(auth.store().users().unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_invalid_message_rejection_and_network_only_when_register_then_surfaced() {
    // Given
    let api = FakeAuthApi::online().with_register(Reply::Rejected(400, Some("Invalid email")));
    let auth = authenticator(api, FallbackPolicy::NetworkOnly);

    // When
    let error = auth.register(&jane()).await.unwrap_err();

    // Then
    assert_eq!(error.user_message(), "Invalid email");
    assert_that!(auth.store().users().unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_invalid_message_rejection_and_legacy_policy_when_register_then_local_record() {
    // Given
    let api = FakeAuthApi::online().with_register(Reply::Rejected(400, Some("Invalid email")));
    let auth = authenticator(api, FallbackPolicy::LegacyHeuristic);

    // When
    let outcome = auth.register(&jane()).await.unwrap();

    // Then
    assert_eq!(outcome.mode, AuthMode::Local);
    assert_that!(auth.store().users().unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_rejection_without_message_when_register_then_generic_failure() {
    // Given
    let api = FakeAuthApi::online().with_register(Reply::Rejected(500, None));
    let auth = authenticator(api, FallbackPolicy::NetworkOnly);

    // When
    let error = auth.register(&jane()).await.unwrap_err();

    // Then
    assert_eq!(error.user_message(), REGISTRATION_FAILED);
}

#[tokio::test]
async fn given_password_mismatch_when_register_then_no_network_call() {
    // Given
    let api = Arc::new(FakeAuthApi::online());
    let auth = Authenticator::new(memory_store(), api.clone(), FallbackPolicy::NetworkOnly);
    let form = RegistrationForm {
        confirm_password: "other".to_string(),
        ..jane()
    };

    // When
    let result = auth.register(&form).await;

    // Then
    assert!(matches!(result, Err(AuthError::Validation { .. })));
    assert_that!(api.calls().len(), eq(0));
}
