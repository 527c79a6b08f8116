//! # Deckard CLI Library
//!
//! Command definitions and handlers for the deckard tool. The binary is a thin
//! shell around [`cli::handle_cli`].

pub mod cli;
pub mod clients;
pub mod completion;
