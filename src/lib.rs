//! Shadeline Library
//!
//! Core functionality for the Shadeline application: converting key colors to
//! OKLCH, building the lightness-indexed gradient between white and black,
//! resolving colors at positions, and keeping pinned palette entries in sync
//! as the key colors change.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod gradient;
pub mod models;
pub mod services;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
