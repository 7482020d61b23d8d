//! Cross-cutting engine types: errors and configuration

pub mod config;
pub mod error;
