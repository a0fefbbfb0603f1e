use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{nutshells::dto::Person, state::AppState};

pub fn nutshells_routes() -> Router<AppState> {
    Router::new()
        .route("/nutshells", get(list_people))
        .route("/nutshells/refresh", post(refresh_people))
}

#[instrument(skip(state))]
pub async fn list_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.nutshells.people().await.as_ref().clone())
}

/// Re-reads every page. On failure the published list is left as it was.
#[instrument(skip(state))]
pub async fn refresh_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, (StatusCode, String)> {
    let people = state
        .nutshells
        .load_all(state.config.people.start_page)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;
    Ok(Json(people.as_ref().clone()))
}
