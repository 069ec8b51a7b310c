//! Show who is signed in and the persisted preferences.

use gomate_client::{App, KeyValueStore, RemoteApi};
use gomate_core::view;
use gomate_core::AppState;

/// Run the status command.
pub async fn run<S: KeyValueStore, A: RemoteApi>(app: &App<S, A>) {
    print!("{}", render(&app.state().await));
}

fn render(state: &AppState) -> String {
    let mut out = String::from("=== gomate status ===\n\n");

    match &state.auth.user {
        Some(user) if state.auth.authenticated => {
            out.push_str(&format!(
                "Account:\n  [{}] {}\n  Username: {}\n  Email:    {}\n",
                view::avatar_initial(Some(user)),
                view::display_name(Some(user)),
                user.username,
                user.email
            ));
        }
        _ => {
            out.push_str("Account: Not signed in\n");
            out.push_str("Run 'gomate login --username <name>' to sign in.\n");
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Theme:     {}\n",
        if state.theme.dark { "dark" } else { "light" }
    ));
    out.push_str(&format!("Favorites: {}\n", state.favorites.len()));
    out
}
