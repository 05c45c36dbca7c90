//! Latest-episode endpoint handler.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};

use crate::api::dto::LatestEpisodeResponse;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates episode routes.
///
/// # Routes
/// - `GET /program/{program_name}/latest` - latest published episode of a program
pub fn episode_routes() -> Router<AppState> {
    Router::new().route("/program/{program_name}/latest", get(get_latest_episode))
}

/// GET /program/{program_name}/latest
///
/// Program name matching is case-insensitive and exact; an unknown
/// program yields 404, upstream failures yield 500.
async fn get_latest_episode(
    State(state): State<AppState>,
    Path(program_name): Path<String>,
) -> AppResult<Json<LatestEpisodeResponse>> {
    match state
        .services
        .episodes
        .get_latest_episode(&program_name)
        .await?
    {
        Some(episode) => Ok(Json(episode.into())),
        None => Err(AppError::NotFound {
            entity: "program".to_string(),
            field: "name".to_string(),
            value: program_name,
        }),
    }
}
