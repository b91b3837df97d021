pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod registry;

// Re-exports for the binary and the integration tests
pub use infrastructure::AppState;
pub use infrastructure::config;
pub use infrastructure::seed;
pub use infrastructure::server;
