//! Sveriges Radio open API client.

pub mod client;
pub mod publish_date;
pub mod types;

pub use client::SrClient;
pub use types::{Episode, Program};
