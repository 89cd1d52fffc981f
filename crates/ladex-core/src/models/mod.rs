//! Data models for service responses and configuration.

pub mod config;
pub mod document;
pub mod expense;
