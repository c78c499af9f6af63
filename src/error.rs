//! Error types for the harmonic progression engine

use std::fmt;

/// Errors that can occur when constructing engine components
///
/// The engine itself is total: every tick-path operation degrades to a safe
/// musical default instead of failing. The only fallible surface is
/// configuration.
#[derive(Debug, Clone)]
pub enum HarmonyError {
    /// Invalid configuration parameters
    InvalidConfig(String),
}

impl fmt::Display for HarmonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarmonyError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for HarmonyError {}
