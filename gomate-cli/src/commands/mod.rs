//! CLI command implementations.

pub mod auth;
pub mod destinations;
pub mod favorites;
pub mod status;
pub mod theme;
