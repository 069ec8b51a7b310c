//! # gomate-core
//!
//! Pure logic for GoMate (no I/O, instant tests).
//!
//! This crate implements the application state slices, their reducers, the
//! derived view logic, and the synthesis of destination records, without
//! any network or disk I/O.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce output
//! without side effects. Randomness is always passed in as an [`rand::Rng`], so
//! a seeded generator makes every function deterministic.
//!
//! The actual I/O (HTTP, persisted storage) is performed by `gomate-client`,
//! which sequences that I/O with the transitions defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod catalog;
pub mod destinations;
pub mod favorites;
pub mod registration;
pub mod state;
pub mod theme;
pub mod view;

pub use auth::{AuthAction, AuthState};
pub use catalog::{enrich, free_position, sample_countries, CANDIDATE_COUNTRIES, DEFAULT_SAMPLE_SIZE};
pub use destinations::{DestinationsAction, DestinationsState, FETCH_FAILED_MESSAGE};
pub use favorites::{FavoritesAction, FavoritesState, Toggle};
pub use registration::synthesize_registration;
pub use state::{Action, AppState};
pub use theme::{ThemeAction, ThemeState};
