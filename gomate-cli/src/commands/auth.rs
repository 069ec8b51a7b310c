//! Sign in, register, and sign out.

use anyhow::Result;
use gomate_client::{App, KeyValueStore, RemoteApi};
use gomate_core::view;
use gomate_types::RegisterRequest;

/// Minimum password length accepted by `register`.
const MIN_PASSWORD_LEN: usize = 6;

/// Run the login command.
pub async fn login<S: KeyValueStore, A: RemoteApi>(
    app: &App<S, A>,
    username: &str,
    password: &str,
) -> Result<()> {
    let committed = app.login(username, password).await?;
    println!(
        "Logged in as {}",
        view::display_name(Some(&committed.value.user))
    );
    warn_if_unsaved(committed.persisted);
    Ok(())
}

/// Run the register command.
pub async fn register<S: KeyValueStore, A: RemoteApi>(
    app: &App<S, A>,
    request: RegisterRequest,
) -> Result<()> {
    validate(&request)?;

    let committed = app.register(&request).await;
    println!(
        "Registered and logged in as {}",
        view::display_name(Some(&committed.value.user))
    );
    warn_if_unsaved(committed.persisted);
    Ok(())
}

/// Run the logout command.
pub async fn logout<S: KeyValueStore, A: RemoteApi>(app: &App<S, A>) {
    let committed = app.logout().await;
    println!("Logged out");
    warn_if_unsaved(committed.persisted);
}

fn validate(request: &RegisterRequest) -> Result<()> {
    if request.username.trim().is_empty() {
        anyhow::bail!("Username is required");
    }
    if !request.email.contains('@') {
        anyhow::bail!("Email address is invalid");
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        anyhow::bail!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        );
    }
    Ok(())
}

pub(crate) fn warn_if_unsaved(persisted: bool) {
    if !persisted {
        eprintln!("Warning: change applied but could not be saved; it will be lost on exit");
    }
}
