//! Blame endpoint.
//!
//! GET /api/v1/blame?path=<relative path>
//!
//! Returns per-line revision, author and date for a working-copy file.
//! The svn call runs on a blocking worker; the blame itself is synchronous.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::blame::InputFile;
use crate::error::{AppError, Result};
use crate::models::BlameResponse;
use crate::routes::BlameState;
use crate::svn::SvnClient;

pub fn routes<C>(state: Arc<BlameState<C>>) -> Router
where
    C: SvnClient + Send + Sync + 'static,
{
    Router::new()
        .route("/api/v1/blame", get(get_blame::<C>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct BlameQuery {
    path: String,
}

async fn get_blame<C>(
    State(state): State<Arc<BlameState<C>>>,
    Query(query): Query<BlameQuery>,
) -> Result<Json<BlameResponse>>
where
    C: SvnClient + Send + Sync + 'static,
{
    let response = tokio::task::spawn_blocking(move || {
        let file = InputFile::from_disk(&state.base_dir, &query.path)?;
        let lines = state.command.blame_file(&file)?;
        Ok::<_, AppError>(BlameResponse {
            path: query.path,
            lines,
        })
    })
    .await
    .map_err(|e| AppError::Internal(format!("Blame task failed: {}", e)))??;

    Ok(Json(response))
}
