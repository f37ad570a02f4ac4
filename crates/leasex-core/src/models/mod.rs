//! Data models: extraction candidates, contract records and configuration.

pub mod candidates;
pub mod config;
pub mod contract;
