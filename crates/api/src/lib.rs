//! Presence analyzer API server library.
//!
//! Exposes config, state, error handling, routes and the user directory
//! downloader so integration tests and the binaries can share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod users_sync;
