//! Core module: configuration, shared state and the HTTP server
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - state shared by every handler
//! - [`Server`] - HTTP server lifecycle
//! - [`ServerError`] - startup/serving errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
