use crate::commands::Commands;
use crate::dispatch::run;
use crate::tests::offline_app;

use googletest::assert_that;
use googletest::prelude::eq;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn given_offline_service_when_register_then_login_with_same_credentials_succeeds() {
    // Given
    let (app, _temp, _guard) = offline_app();
    let register = Commands::Register {
        full_name: "Jane".to_string(),
        email: "j@x.com".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        agree_terms: true,
    };
    let login = Commands::Login {
        email: "j@x.com".to_string(),
        password: "pw".to_string(),
        remember_me: false,
    };

    // When
    let registered = run(register, &app).await.unwrap();
    let logged_in = run(login, &app).await.unwrap();

    // Then
    assert!(registered);
    assert!(logged_in);
    assert!(app.store().session_flags().unwrap().is_signed_in());
}

#[tokio::test]
#[serial]
async fn given_offline_service_and_no_account_when_login_then_failure_exit() {
    // Given
    let (app, _temp, _guard) = offline_app();
    let login = Commands::Login {
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        remember_me: false,
    };

    // When
    let succeeded = run(login, &app).await.unwrap();

    // Then
    assert!(!succeeded);
    assert!(!app.store().session_flags().unwrap().is_signed_in());
}

#[tokio::test]
#[serial]
async fn given_signed_in_when_logout_then_session_cleared() {
    // Given
    let (app, _temp, _guard) = offline_app();
    app.store()
        .sign_in(
            &ft_auth::CurrentUser {
                name: "Jane".to_string(),
                email: "j@x.com".to_string(),
            },
            true,
        )
        .unwrap();

    // When
    let succeeded = run(Commands::Logout, &app).await.unwrap();

    // Then
    assert!(succeeded);
    assert!(!app.store().session_flags().unwrap().is_signed_in());
}

#[tokio::test]
#[serial]
async fn given_offline_service_when_watch_one_probe_then_completes() {
    // Given
    let (app, _temp, _guard) = offline_app();

    // When
    let succeeded = run(Commands::Watch { count: Some(1) }, &app).await.unwrap();

    // Then
    assert!(succeeded);
}

#[tokio::test]
#[serial]
async fn given_fresh_store_when_status_then_succeeds_without_accounts() {
    // Given
    let (app, _temp, _guard) = offline_app();

    // When
    let succeeded = run(Commands::Status, &app).await.unwrap();

    // Then
    assert!(succeeded);
    assert_that!(app.store().users().unwrap().len(), eq(0));
}
