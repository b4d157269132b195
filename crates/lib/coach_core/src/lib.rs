//! # coach_core
//!
//! Core domain logic for Coach.

pub mod config;
pub mod profile;
pub mod prompt;
pub mod provider;
pub mod settings;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
