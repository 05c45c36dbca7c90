//! Data transfer objects for API responses.

mod episode;
mod error;

pub use episode::LatestEpisodeResponse;
pub use error::ErrorResponse;
