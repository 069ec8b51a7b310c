//! Switch the theme.

use clap::ValueEnum;
use gomate_client::{App, KeyValueStore, RemoteApi};

use super::auth::warn_if_unsaved;

/// Theme argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Dark mode
    Dark,
    /// Light mode
    Light,
    /// Flip the current mode
    Toggle,
}

/// Run the theme command.
pub async fn run<S: KeyValueStore, A: RemoteApi>(app: &App<S, A>, mode: Mode) {
    let committed = match mode {
        Mode::Dark => app.set_theme(true).await,
        Mode::Light => app.set_theme(false).await,
        Mode::Toggle => app.toggle_theme().await,
    };

    println!("Theme: {}", if committed.value { "dark" } else { "light" });
    warn_if_unsaved(committed.persisted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomate_client::{ClientConfig, MemoryStore, MockApi};

    #[tokio::test]
    async fn modes() {
        let store = MemoryStore::new();
        let app = App::new(store.clone(), MockApi::new(), ClientConfig::default());

        run(&app, Mode::Dark).await;
        assert!(app.is_dark().await);
        assert_eq!(store.peek("theme").as_deref(), Some("dark"));

        run(&app, Mode::Toggle).await;
        assert!(!app.is_dark().await);

        run(&app, Mode::Light).await;
        assert_eq!(store.peek("theme").as_deref(), Some("light"));
    }
}
