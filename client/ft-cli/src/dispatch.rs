use crate::app::App;
use crate::commands::Commands;
use crate::error::Result as CliResult;
use crate::terminal_navigator::TerminalNavigator;
use crate::terminal_presenter::TerminalPresenter;

use ft_auth::{LoginForm, Navigation, RegistrationForm, RouteGuard, Surface};

use std::sync::Arc;

use log::{debug, warn};

/// Run one command to completion and report whether its flow succeeded.
///
/// Flow failures were already shown by the presenter. Errors returned here
/// are infrastructure failures.
pub async fn run(command: Commands, app: &App) -> CliResult<bool> {
    let presenter = Arc::new(TerminalPresenter::new());
    let navigator = Arc::new(TerminalNavigator::new());

    match command {
        Commands::Login {
            email,
            password,
            remember_me,
        } => {
            let controller = app.controller(presenter, navigator);
            let form = LoginForm::new(email, password, remember_me);

            Ok(controller.submit_login(&form).await.is_ok())
        }

        Commands::Register {
            full_name,
            email,
            password,
            confirm_password,
            agree_terms,
        } => {
            let controller = app.controller(presenter, navigator);
            let form = RegistrationForm {
                full_name,
                email,
                password,
                confirm_password,
                agree_terms,
            };

            match controller.submit_registration(&form).await {
                Ok(pending) => {
                    if let Err(e) = pending.await {
                        warn!("Delayed navigation did not complete: {e}");
                    }
                    Ok(true)
                }
                Err(_) => Ok(false),
            }
        }

        Commands::Logout => {
            let controller = app.controller(presenter, navigator);
            let mut context = app.session_context();
            controller.logout(&mut context)?;
            Ok(true)
        }

        Commands::Open { surface } => {
            let mut context = app.session_context();
            let mut guard = RouteGuard::new(navigator);

            if let Some(resolution) = guard.on_page_load(&mut context, surface).await
                && resolution.navigation == Navigation::Allow
            {
                println!("Rendering {} ({})", surface.entry_page(), resolution.state);
            }
            Ok(true)
        }

        Commands::Status => {
            let mut context = app.session_context();
            let resolution = context.init_on_load(Surface::App).await?;
            let flags = app.store().session_flags()?;

            println!("Session: {}", resolution.state);
            match context.current_user()? {
                Some(user) => println!("User: {} <{}>", user.name, user.email),
                None => println!("User: none"),
            }
            println!("Remember me: {}", flags.remember_me);
            Ok(true)
        }

        Commands::Watch { count } => {
            let monitor = Arc::new(app.monitor());
            let handle = Arc::clone(&monitor).spawn(presenter);

            match count {
                Some(limit) => monitor.wait_for_probes(limit).await,
                None => {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        warn!("Failed to listen for Ctrl-C: {e}");
                    }
                }
            }

            handle.stop();
            debug!("Watch finished after {} probes", monitor.probe_count());
            Ok(true)
        }
    }
}
