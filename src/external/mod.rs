//! Clients for external APIs consumed by the application.

pub mod sr;
