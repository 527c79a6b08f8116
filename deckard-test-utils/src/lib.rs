//! Test utilities shared across the deckard workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG directory isolation ([`EnvTestGuard`])
//! - Throwaway home directories with a `.netrc` ([`NetrcGuard`])

pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use env::EnvTestGuard;
pub use netrc::NetrcGuard;
