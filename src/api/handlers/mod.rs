//! HTTP request handlers.

pub mod episodes;
pub mod health;
