//! AI priority suggestion endpoint
//!
//! The flow layer in tm-core already folds invalid model output into the
//! Medium fallback; this layer is where hard failures become a visible
//! message instead of a fabricated label.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use tm_core::task::{validate_text, Priority};

use super::task::ErrorResponse;
use crate::state::AppState;

const SUGGESTION_FAILED: &str =
    "Failed to get AI suggestion. Please try again or set priority manually.";

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub priority: Priority,
}

/// POST /api/suggest - Suggest a priority for a task description
async fn suggest_priority(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = validate_text(&req.text) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    match state.suggest().suggest(&req.text).await {
        Ok(priority) => Ok(Json(SuggestResponse { priority })),
        Err(tm_core::Error::InvalidInput(e)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => {
            error!("AI priority suggestion failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: SUGGESTION_FAILED.to_string(),
                }),
            ))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/suggest", post(suggest_priority))
}
