//! App - the main interface for GoMate.
//!
//! This module provides [`App`], which owns the application state and runs
//! the operations ("thunks") that pair a remote or persisted I/O call with a
//! state transition.
//!
//! # Architecture
//!
//! App keeps the pure slices (from gomate-core) behind a lock and performs
//! the actual I/O through the [`KeyValueStore`] and [`RemoteApi`] traits.
//!
//! ```text
//! Front end → App → RemoteApi → Network
//!              ↓ ↘
//!              ↓   KeyValueStore → Disk
//!              ↓
//!         gomate-core (pure reducers)
//! ```
//!
//! The state lock is taken only to read or to commit, never across I/O.
//! Favorites toggling is the exception: a dedicated gate is held across its
//! read-persist-commit so that overlapping toggles apply one after another.
//!
//! # Example
//!
//! ```ignore
//! use gomate_client::{App, ClientConfig, MemoryStore, MockApi};
//!
//! let app = App::new(MemoryStore::new(), MockApi::new(), ClientConfig::default());
//! app.restore().await;
//! app.login("emilys", "emilyspass").await?;
//! ```

use futures_util::future::try_join_all;
use gomate_core::{
    enrich, free_position, sample_countries, synthesize_registration, view, Action, AppState, AuthAction,
    DestinationsAction, FavoritesAction, ThemeAction, ThemeState, CANDIDATE_COUNTRIES, DEFAULT_SAMPLE_SIZE,
    FETCH_FAILED_MESSAGE,
};
use gomate_types::{Destination, DestinationId, LoginRequest, RegisterRequest, Session, User};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::api::{ApiError, RemoteApi};
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY, FAVORITES_KEY, THEME_KEY, USER_KEY};

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credential exchange failed. Displays the server's reason when known.
    #[error("{}", .0.login_message())]
    Auth(#[source] ApiError),

    /// At least one country lookup failed, so no destinations were loaded.
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Fetch(#[source] ApiError),

    /// A single country lookup by name failed.
    #[error("no destination found for {name:?}")]
    Lookup {
        /// Name that was looked up.
        name: String,
        /// Underlying API error.
        #[source]
        source: ApiError,
    },
}

/// Configuration for App.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Destinations per fetch. [`App::new`] clamps it to
    /// `1..=CANDIDATE_COUNTRIES.len()`.
    pub sample_size: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Make sampling and enrichment deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of destinations per fetch.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

/// A committed change together with whether it reached storage.
///
/// In-memory state is authoritative: a failed write is logged and the
/// change is committed anyway, so `persisted == false` means the change
/// will not survive a restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Committed<T> {
    /// Result of the operation.
    pub value: T,
    /// Whether every storage write succeeded.
    pub persisted: bool,
}

/// What [`App::restore`] found in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restored {
    /// A session was restored.
    pub session: bool,
    /// A favorites list was restored.
    pub favorites: bool,
    /// A theme preference was restored.
    pub theme: bool,
}

/// The GoMate application: state plus the operations that change it.
pub struct App<S, A> {
    store: S,
    api: A,
    config: ClientConfig,
    state: Mutex<AppState>,
    favorites_gate: Mutex<()>,
    rng: Mutex<StdRng>,
}

impl<S: KeyValueStore, A: RemoteApi> App<S, A> {
    /// Create an app with initial state. Nothing is read from storage until
    /// [`restore`](Self::restore) is called.
    pub fn new(store: S, api: A, mut config: ClientConfig) -> Self {
        let sample_size = config.sample_size.clamp(1, CANDIDATE_COUNTRIES.len());
        if sample_size != config.sample_size {
            tracing::warn!(
                requested = config.sample_size,
                sample_size,
                "sample size out of range, clamped"
            );
            config.sample_size = sample_size;
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            api,
            config,
            state: Mutex::new(AppState::new()),
            favorites_gate: Mutex::new(()),
            rng: Mutex::new(rng),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the persisted store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the remote API.
    pub fn api(&self) -> &A {
        &self.api
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a session, persist it, and sign in.
    ///
    /// On failure the state is untouched.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Committed<Session>, ClientError> {
        let request = LoginRequest::new(username, password);
        let response = self.api.login(&request).await.map_err(|e| {
            tracing::debug!(username = %username, error = %e, "login failed");
            ClientError::Auth(e)
        })?;

        let session = response.into_session();
        let persisted = self.persist_session(&session).await;
        self.dispatch(AuthAction::LoginSucceeded(session.clone()))
            .await;

        tracing::info!(username = %session.user.username, "logged in");
        Ok(Committed {
            value: session,
            persisted,
        })
    }

    /// Create an account locally and sign in with it.
    ///
    /// The credential service has no sign-up endpoint; the session is
    /// synthesized and then follows the same path as a login.
    pub async fn register(&self, request: &RegisterRequest) -> Committed<Session> {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let response = {
            let mut rng = self.rng.lock().await;
            synthesize_registration(request, &mut *rng, now_millis)
        };

        let session = response.into_session();
        let persisted = self.persist_session(&session).await;
        self.dispatch(AuthAction::LoginSucceeded(session.clone()))
            .await;

        tracing::info!(username = %session.user.username, "registered");
        Committed {
            value: session,
            persisted,
        }
    }

    /// Sign in from the persisted token and user, without any network call.
    ///
    /// Returns `true` when a session was restored. A missing or empty token,
    /// or a missing or unreadable user record, leaves the state signed out.
    pub async fn restore_session(&self) -> bool {
        let token = match self.read(AUTH_TOKEN_KEY).await {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };

        let Some(user_json) = self.read(USER_KEY).await else {
            return false;
        };

        let user = match User::from_json(&user_json) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable persisted user");
                return false;
            }
        };

        tracing::info!(username = %user.username, "session restored");
        self.dispatch(AuthAction::Restored(Session { user, token }))
            .await;
        true
    }

    /// Forget the persisted session and sign out.
    ///
    /// Removal failures are logged; the sign-out happens regardless.
    pub async fn logout(&self) -> Committed<()> {
        let token_removed = self.remove(AUTH_TOKEN_KEY).await;
        let user_removed = self.remove(USER_KEY).await;
        self.dispatch(AuthAction::LoggedOut).await;

        tracing::info!("logged out");
        Committed {
            value: (),
            persisted: token_removed && user_removed,
        }
    }

    async fn persist_session(&self, session: &Session) -> bool {
        let user_json = match session.user.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "cannot encode user for storage");
                return false;
            }
        };

        let token_written = self.write(AUTH_TOKEN_KEY, &session.token).await;
        let user_written = self.write(USER_KEY, &user_json).await;
        token_written && user_written
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Add `destination` to favorites, or remove it if its id is present.
    ///
    /// Returns whether it is a favorite afterwards. The full list is
    /// persisted before the change is committed; a failed write is logged
    /// and the change is committed anyway.
    pub async fn toggle_favorite(&self, destination: &Destination) -> Committed<bool> {
        let _gate = self.favorites_gate.lock().await;

        let toggle = self.state.lock().await.favorites.toggle(destination);

        let persisted = match Destination::list_to_json(&toggle.items) {
            Ok(json) => self.write(FAVORITES_KEY, &json).await,
            Err(e) => {
                tracing::warn!(error = %e, "cannot encode favorites for storage");
                false
            }
        };

        self.dispatch(toggle.action).await;

        tracing::debug!(
            id = %destination.id,
            favorited = toggle.favorited,
            persisted,
            "favorite toggled"
        );
        Committed {
            value: toggle.favorited,
            persisted,
        }
    }

    /// Replace the favorites list with the persisted one.
    ///
    /// Returns `true` when a list was restored. A missing or unreadable
    /// value leaves the list unchanged.
    pub async fn restore_favorites(&self) -> bool {
        let Some(json) = self.read(FAVORITES_KEY).await else {
            return false;
        };

        match Destination::list_from_json(&json) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "favorites restored");
                self.dispatch(FavoritesAction::Replaced(items)).await;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable persisted favorites");
                false
            }
        }
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Persist and apply a theme preference.
    pub async fn set_theme(&self, dark: bool) -> Committed<bool> {
        let persisted = self.write(THEME_KEY, ThemeState::token_for(dark)).await;
        self.dispatch(ThemeAction::Set(dark)).await;

        tracing::debug!(dark, persisted, "theme set");
        Committed {
            value: dark,
            persisted,
        }
    }

    /// Flip the theme preference.
    pub async fn toggle_theme(&self) -> Committed<bool> {
        let dark = !self.is_dark().await;
        let persisted = self.write(THEME_KEY, ThemeState::token_for(dark)).await;
        self.dispatch(ThemeAction::Toggled).await;

        tracing::debug!(dark, persisted, "theme toggled");
        Committed {
            value: dark,
            persisted,
        }
    }

    /// Apply the persisted theme preference, if any.
    ///
    /// `"dark"` means dark; any other stored value means light. Returns
    /// `true` when a value was found.
    pub async fn restore_theme(&self) -> bool {
        let Some(token) = self.read(THEME_KEY).await else {
            return false;
        };

        let dark = ThemeState::from_token(&token);
        self.dispatch(ThemeAction::Set(dark)).await;
        true
    }

    // =========================================================================
    // Destinations
    // =========================================================================

    /// Sample candidate countries, look them all up concurrently, and load
    /// the enriched destinations.
    ///
    /// All-or-nothing: if any lookup fails, the previous list is kept, the
    /// slice records [`FETCH_FAILED_MESSAGE`], and one error is returned.
    pub async fn fetch_destinations(&self) -> Result<Vec<Destination>, ClientError> {
        self.dispatch(DestinationsAction::Started).await;

        let names = {
            let mut rng = self.rng.lock().await;
            sample_countries(&mut *rng, self.config.sample_size)
        };
        tracing::debug!(countries = ?names, "fetching destinations");

        let records = match try_join_all(names.iter().map(|name| self.api.country(name))).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "destination fetch failed");
                self.dispatch(DestinationsAction::Failed(FETCH_FAILED_MESSAGE.to_string()))
                    .await;
                return Err(ClientError::Fetch(e));
            }
        };

        let destinations: Vec<Destination> = {
            let mut rng = self.rng.lock().await;
            records
                .iter()
                .enumerate()
                .map(|(index, record)| enrich(index, record, &mut *rng))
                .collect()
        };

        self.dispatch(DestinationsAction::Loaded(destinations.clone()))
            .await;
        tracing::debug!(count = destinations.len(), "destinations loaded");
        Ok(destinations)
    }

    /// Look up one country by name and enrich it, outside any batch.
    ///
    /// The result gets the lowest `dest-N` id not used by a favorite or by
    /// the loaded batch, so toggling it can never hit a different entry.
    /// The destinations slice is not changed.
    pub async fn lookup_destination(&self, name: &str) -> Result<Destination, ClientError> {
        let record = self.api.country(name).await.map_err(|source| {
            tracing::debug!(name, error = %source, "country lookup failed");
            ClientError::Lookup {
                name: name.to_string(),
                source,
            }
        })?;

        let position = {
            let state = self.state.lock().await;
            free_position(
                state
                    .favorites
                    .items
                    .iter()
                    .chain(&state.destinations.destinations),
            )
        };

        let mut rng = self.rng.lock().await;
        Ok(enrich(position, &record, &mut *rng))
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Restore every persisted slice: session, favorites, theme.
    pub async fn restore(&self) -> Restored {
        let restored = Restored {
            session: self.restore_session().await,
            favorites: self.restore_favorites().await,
            theme: self.restore_theme().await,
        };
        tracing::debug!(?restored, "state restored");
        restored
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Snapshot of the whole state.
    pub async fn state(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.state.lock().await.auth.session()
    }

    /// Check if signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.auth.authenticated
    }

    /// Check if dark mode is on.
    pub async fn is_dark(&self) -> bool {
        self.state.lock().await.theme.dark
    }

    /// Favorites in insertion order.
    pub async fn favorites(&self) -> Vec<Destination> {
        self.state.lock().await.favorites.items.clone()
    }

    /// Check whether a destination id is a favorite.
    pub async fn is_favorite(&self, id: &DestinationId) -> bool {
        view::is_favorite(&self.state.lock().await.favorites.items, id)
    }

    /// Destinations from the last successful fetch.
    pub async fn destinations(&self) -> Vec<Destination> {
        self.state.lock().await.destinations.destinations.clone()
    }

    /// Loaded destinations whose name or region contains `query`.
    pub async fn search(&self, query: &str) -> Vec<Destination> {
        let state = self.state.lock().await;
        view::filter_destinations(&state.destinations.destinations, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Find a loaded destination by id.
    pub async fn find_destination(&self, id: &DestinationId) -> Option<Destination> {
        let state = self.state.lock().await;
        view::find_destination(&state.destinations.destinations, id).cloned()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn dispatch(&self, action: impl Into<Action>) {
        let mut state = self.state.lock().await;
        *state = std::mem::take(&mut *state).reduce(action.into());
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage write failed, keeping in-memory change");
                false
            }
        }
    }

    async fn remove(&self, key: &str) -> bool {
        match self.store.remove(key).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage remove failed");
                false
            }
        }
    }
}
