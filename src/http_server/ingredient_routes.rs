//! Ingredient HTTP Routes
//!
//! - `GET /ingredients` - list stock
//! - `POST /ingredients` - add an ingredient
//! - `PUT /ingredients/:id` - overwrite an ingredient's quantity

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::errors::ApiResult;
use super::response::MessageResponse;
use super::state::ShopState;
use crate::models::{Ingredient, NewIngredient, QuantityUpdate};
use crate::store::ingredients;

/// Create ingredient routes
pub fn ingredient_routes(state: Arc<ShopState>) -> Router {
    Router::new()
        .route(
            "/ingredients",
            get(list_ingredients_handler).post(create_ingredient_handler),
        )
        .route("/ingredients/:id", put(update_ingredient_handler))
        .with_state(state)
}

async fn list_ingredients_handler(
    State(state): State<Arc<ShopState>>,
) -> ApiResult<Json<Vec<Ingredient>>> {
    let rows = state.db.run(|conn| ingredients::list(conn)).await?;
    Ok(Json(rows))
}

async fn create_ingredient_handler(
    State(state): State<Arc<ShopState>>,
    payload: Result<Json<NewIngredient>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    let input = input.validate()?;

    state
        .db
        .run(move |conn| ingredients::insert(conn, &input))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Ingredient added successfully")),
    ))
}

async fn update_ingredient_handler(
    State(state): State<Arc<ShopState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuantityUpdate>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(update) = payload?;
    let update = update.validate()?;

    state
        .db
        .run(move |conn| ingredients::update_quantity(conn, id, update.quantity))
        .await?;

    Ok(Json(MessageResponse::new("Ingredient updated successfully")))
}
