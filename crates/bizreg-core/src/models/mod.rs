//! Data models for companies, attached files, and configuration.

pub mod company;
pub mod config;
pub mod file;
