// Configuration types shared across all Plandeck crates
pub mod config;

// Re-export commonly used config types for convenience
pub use config::{AuthConfig, ConfigError, PlandeckConfig, ServerConfig};
