//! API route handlers.

pub mod companies;
pub mod files;
