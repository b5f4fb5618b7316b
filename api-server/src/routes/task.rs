//! Task API endpoints
//!
//! RESTful API for the task list operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tm_core::task::{validate_text, Priority, Task};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Which partition of the list to return
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    #[default]
    All,
    Pending,
    Completed,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub view: Option<TaskView>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}

#[derive(Debug, Deserialize)]
pub struct SetPriorityRequest {
    pub priority: Priority,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            completed: task.completed,
            priority: task.priority,
            created_at: task.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn not_found(id: Uuid) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Task {} not found", id),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List tasks, optionally filtered and partitioned
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Json<Vec<TaskResponse>> {
    let filter = query.filter.unwrap_or_default();
    let store = state.task_store();

    let tasks = match query.view.unwrap_or_default() {
        TaskView::All => store.filtered(&filter).await,
        TaskView::Pending => store.pending(&filter).await,
        TaskView::Completed => store.completed(&filter).await,
    };

    Json(tasks.into_iter().map(TaskResponse::from).collect())
}

/// POST /api/tasks - Create a new task
///
/// A non-None priority in the request is the accept-AI-suggestion path;
/// otherwise the task starts without one.
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = validate_text(&req.text) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    let created = match req.priority {
        Some(priority) if priority != Priority::None => {
            state
                .task_store()
                .add_with_priority(req.text, priority)
                .await
        }
        _ => state.task_store().add(req.text).await,
    };

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// POST /api/tasks/{id}/toggle - Flip a task's completed flag
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.task_store().toggle(id).await {
        Ok(task) => Ok(Json(TaskResponse::from(task))),
        Err(tm_core::Error::TaskNotFound(_)) => Err(not_found(id)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// PUT /api/tasks/{id}/priority - Set a task's priority
///
/// Accepts all four values; `"None"` clears the priority.
async fn set_task_priority(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetPriorityRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.task_store().set_priority(id, req.priority).await {
        Ok(task) => Ok(Json(TaskResponse::from(task))),
        Err(tm_core::Error::TaskNotFound(_)) => Err(not_found(id)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// DELETE /api/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if state.task_store().delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", delete(delete_task))
        .route("/api/tasks/{id}/toggle", post(toggle_task))
        .route("/api/tasks/{id}/priority", put(set_task_priority))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tempfile::TempDir;
    use tm_core::ai::SuggestConfig;
    use tower::ServiceExt;

    async fn test_app() -> (Router, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(temp_dir.path().to_path_buf(), SuggestConfig::default())
            .await
            .unwrap();
        let app = router().with_state(state);
        (app, temp_dir)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (app, _temp) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/tasks",
                serde_json::json!({"text": "Write quarterly report"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = json_body(response).await;
        assert_eq!(created["text"], "Write quarterly report");
        assert_eq!(created["completed"], false);
        assert_eq!(created["priority"], "None");

        let response = app
            .oneshot(Request::get("/api/tasks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let tasks = json_body(response).await;
        assert_eq!(tasks.as_array().unwrap().len(), 1);
        assert_eq!(tasks[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_create_rejects_short_text() {
        let (app, _temp) = test_app().await;

        let response = app
            .oneshot(post_json("/api/tasks", serde_json::json!({"text": "ab"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_suggested_priority() {
        let (app, _temp) = test_app().await;

        let response = app
            .oneshot(post_json(
                "/api/tasks",
                serde_json::json!({"text": "Fix the blocker", "priority": "High"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = json_body(response).await;
        assert_eq!(created["priority"], "High");
    }

    #[tokio::test]
    async fn test_toggle() {
        let (app, _temp) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/tasks",
                serde_json::json!({"text": "Toggle me"}),
            ))
            .await
            .unwrap();
        let created = json_body(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/tasks/{}/toggle", id),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["completed"], true);

        // Unknown id is a 404
        let response = app
            .oneshot(post_json(
                &format!("/api/tasks/{}/toggle", Uuid::new_v4()),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_and_clear_priority() {
        let (app, _temp) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/tasks",
                serde_json::json!({"text": "Prioritize me"}),
            ))
            .await
            .unwrap();
        let id = json_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/tasks/{}/priority", id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"priority": "Low"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["priority"], "Low");

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/tasks/{}/priority", id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"priority": "None"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["priority"], "None");
    }

    #[tokio::test]
    async fn test_delete() {
        let (app, _temp) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/tasks",
                serde_json::json!({"text": "Delete me"}),
            ))
            .await
            .unwrap();
        let id = json_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/api/tasks/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Deleting again is a 404
        let response = app
            .oneshot(
                Request::delete(format!("/api/tasks/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_filter_and_views() {
        let (app, _temp) = test_app().await;

        for text in ["Write quarterly report", "Plan offsite", "Review report"] {
            app.clone()
                .oneshot(post_json("/api/tasks", serde_json::json!({"text": text})))
                .await
                .unwrap();
        }

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/tasks?filter=report")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let tasks = json_body(response).await;
        assert_eq!(tasks.as_array().unwrap().len(), 2);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/tasks?view=completed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(json_body(response).await.as_array().unwrap().is_empty());

        let response = app
            .oneshot(
                Request::get("/api/tasks?view=pending")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
    }
}
