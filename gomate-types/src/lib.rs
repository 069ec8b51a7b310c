//! # gomate-types
//!
//! Data model and wire formats for the GoMate travel client.
//!
//! This crate provides the foundational types used across all GoMate crates:
//! - [`User`], [`Session`] - Identity returned by the credential service
//! - [`Destination`], [`TransportOption`] - Enriched country records shown to users
//! - [`LoginRequest`], [`LoginResponse`], [`CountryRecord`] - REST payloads
//! - [`TypesError`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod ids;
mod model;
mod payloads;

pub use error::TypesError;
pub use ids::DestinationId;
pub use model::{Destination, DestinationStatus, Session, TransportKind, TransportOption, User};
pub use payloads::{
    ApiErrorBody, CountryFlags, CountryName, CountryRecord, Currency, LoginRequest,
    LoginResponse, RegisterRequest,
};
