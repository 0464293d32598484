//! Environment-driven configuration.

use std::env;

/// Get the current environment name.
///
/// Reads the `ENVIRONMENT` variable; defaults to `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Returns true when running in a production environment.
pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}
