use crate::Cli;
use crate::commands::Commands;

use ft_auth::Surface;

use clap::Parser;

#[test]
fn given_login_args_when_parsed_then_fields_captured() {
    // When
    let cli = Cli::try_parse_from([
        "fintrack",
        "login",
        "--email",
        "a@x.com",
        "--password",
        "p",
        "--remember-me",
    ])
    .unwrap();

    // Then
    match cli.command {
        Commands::Login {
            email,
            password,
            remember_me,
        } => {
            assert_eq!(email, "a@x.com");
            assert_eq!(password, "p");
            assert!(remember_me);
        }
        _ => panic!("expected login command"),
    }
    assert_eq!(cli.api_url, None);
}

#[test]
fn given_global_api_url_after_subcommand_when_parsed_then_captured() {
    // When
    let cli = Cli::try_parse_from(["fintrack", "status", "--api-url", "http://h:1/api"]).unwrap();

    // Then
    assert_eq!(cli.api_url.as_deref(), Some("http://h:1/api"));
}

#[test]
fn given_open_with_page_path_when_parsed_then_surface_classified() {
    // When
    let cli = Cli::try_parse_from(["fintrack", "open", "pages/signup.html"]).unwrap();

    // Then
    assert!(matches!(
        cli.command,
        Commands::Open {
            surface: Surface::Auth
        }
    ));
}

#[test]
fn given_unknown_surface_when_parsed_then_error() {
    // When
    let result = Cli::try_parse_from(["fintrack", "open", "nowhere"]);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_register_without_terms_flag_when_parsed_then_terms_false() {
    // When
    let cli = Cli::try_parse_from([
        "fintrack",
        "register",
        "--full-name",
        "Jane",
        "--email",
        "j@x.com",
        "--password",
        "pw",
        "--confirm-password",
        "pw",
    ])
    .unwrap();

    // Then
    assert!(matches!(
        cli.command,
        Commands::Register {
            agree_terms: false,
            ..
        }
    ));
}
