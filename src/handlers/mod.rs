//! HTTP handlers for the goal tracker
//!
//! Each endpoint lives in its own file as a method on `GoalServer`;
//! this module wires them into an axum router.

pub mod complete;
pub mod index;

use crate::GoalServer;
use crate::error::TrackerError;
use crate::storage::MetadataStore;
use axum::Router;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompleteForm {
    pub goal: Option<String>,
    pub category: Option<String>,
}

/// A store failure surfaced to the browser as `500 Internal Server Error`
pub struct HandlerError(TrackerError);

impl From<TrackerError> for HandlerError {
    fn from(e: TrackerError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Build the router: `GET /` lists goals, `POST /complete` toggles one
pub fn router<S>(server: Arc<GoalServer<S>>) -> Router
where
    S: MetadataStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_page::<S>))
        .route("/complete", post(complete_goal::<S>))
        .with_state(server)
        .layer(TraceLayer::new_for_http())
}

// Both handlers read and write the goal files inline on the runtime worker.
// Each request is a couple of small local file operations.
async fn index_page<S>(
    State(server): State<Arc<GoalServer<S>>>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, HandlerError>
where
    S: MetadataStore + Send + Sync + 'static,
{
    Ok(Html(server.handle_index(query.category.as_deref())?))
}

async fn complete_goal<S>(
    State(server): State<Arc<GoalServer<S>>>,
    Form(form): Form<CompleteForm>,
) -> Result<Redirect, HandlerError>
where
    S: MetadataStore + Send + Sync + 'static,
{
    let location = server.handle_complete(form.goal.as_deref(), form.category.as_deref())?;
    Ok(Redirect::to(&location))
}
