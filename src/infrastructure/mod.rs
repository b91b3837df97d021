//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Startup bulk load of departments (seed)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod seed;
pub mod server;
pub mod state;

pub use state::AppState;
