//! Foundation types for folio.
//!
//! Shared by every folio crate: the error type and the terminal
//! configuration loaded from TOML.

pub mod config;
pub mod error;
