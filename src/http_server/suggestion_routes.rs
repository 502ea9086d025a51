//! Customer Suggestion HTTP Routes
//!
//! - `POST /suggestions` - submit a suggestion, stamped server-side
//! - `GET /suggestions` - list suggestions

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use super::errors::ApiResult;
use super::response::MessageResponse;
use super::state::ShopState;
use crate::models::{CustomerSuggestion, NewSuggestion};
use crate::store::suggestions;

/// Create suggestion routes
pub fn suggestion_routes(state: Arc<ShopState>) -> Router {
    Router::new()
        .route(
            "/suggestions",
            get(list_suggestions_handler).post(create_suggestion_handler),
        )
        .with_state(state)
}

async fn create_suggestion_handler(
    State(state): State<Arc<ShopState>>,
    payload: Result<Json<NewSuggestion>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    let input = input.validate()?;

    state
        .db
        .run(move |conn| suggestions::insert(conn, &input, Utc::now()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Suggestion added successfully")),
    ))
}

async fn list_suggestions_handler(
    State(state): State<Arc<ShopState>>,
) -> ApiResult<Json<Vec<CustomerSuggestion>>> {
    let rows = state.db.run(|conn| suggestions::list(conn)).await?;
    Ok(Json(rows))
}
