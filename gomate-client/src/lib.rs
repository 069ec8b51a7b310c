//! # gomate-client
//!
//! State client for the GoMate travel app.
//!
//! This is the library that front ends use: it owns the application state
//! and runs the operations that pair a remote or persisted I/O call with a
//! state transition.
//!
//! ## Features
//!
//! - **Persisted slices**: session, favorites and theme survive restarts
//!   through a pluggable [`KeyValueStore`] (file-backed or in-memory)
//! - **REST access**: credential exchange and country lookup over reqwest,
//!   behind the [`RemoteApi`] trait (HTTP or mock)
//! - **Pure state machine**: uses gomate-core for side-effect-free reducers
//! - **Deterministic mocks**: a seeded RNG drives sampling and enrichment
//!
//! ## Example
//!
//! ```ignore
//! use gomate_client::{App, ClientConfig, HttpApi, ApiConfig, FileStore};
//!
//! let store = FileStore::open("state.json").await?;
//! let api = HttpApi::new(ApiConfig::default());
//! let app = App::new(store, api, ClientConfig::default());
//!
//! app.restore().await;
//! app.login("emilys", "emilyspass").await?;
//! let destinations = app.fetch_destinations().await?;
//! app.toggle_favorite(&destinations[0]).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod app;
pub mod storage;

pub use api::{ApiConfig, ApiError, HttpApi, MockApi, RemoteApi};
pub use app::{App, ClientConfig, ClientError, Committed, Restored};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, StorageError, AUTH_TOKEN_KEY, FAVORITES_KEY,
    THEME_KEY, USER_KEY,
};
