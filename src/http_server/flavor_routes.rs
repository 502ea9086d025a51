//! Flavor HTTP Routes
//!
//! - `GET /flavors` - list every flavor
//! - `POST /flavors` - add a flavor

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::ApiResult;
use super::response::MessageResponse;
use super::state::ShopState;
use crate::models::{Flavor, NewFlavor};
use crate::store::flavors;

/// Create flavor routes
pub fn flavor_routes(state: Arc<ShopState>) -> Router {
    Router::new()
        .route("/flavors", get(list_flavors_handler).post(create_flavor_handler))
        .with_state(state)
}

async fn list_flavors_handler(State(state): State<Arc<ShopState>>) -> ApiResult<Json<Vec<Flavor>>> {
    let rows = state.db.run(|conn| flavors::list(conn)).await?;
    Ok(Json(rows))
}

async fn create_flavor_handler(
    State(state): State<Arc<ShopState>>,
    payload: Result<Json<NewFlavor>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    let input = input.validate()?;

    state.db.run(move |conn| flavors::insert(conn, &input)).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Flavor added successfully")),
    ))
}
