use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use service::restaurant_service;

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::{RestaurantDetailView, RestaurantView};

/// 列出所有餐厅
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurants",
    responses((status = 200, description = "All restaurants", body = [RestaurantView]))
)]
#[instrument(skip(state))]
pub async fn list_restaurants(State(state): State<ServerState>) -> Result<Json<Vec<RestaurantView>>, ApiError> {
    let restaurants = restaurant_service::list_restaurants(&state.db).await?;
    info!(count = restaurants.len(), "list restaurants");
    Ok(Json(restaurants.iter().map(RestaurantView::from).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its priced pizzas", body = RestaurantDetailView),
        (status = 404, description = "Restaurant not found", body = crate::views::ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetailView>, ApiError> {
    // non-numeric ids cannot match a row
    let Path(id) = id.map_err(|_| ApiError::restaurant_not_found())?;
    let detail = restaurant_service::get_restaurant_detail(&state.db, id).await?;
    Ok(Json(RestaurantDetailView::from(&detail)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its restaurant_pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = crate::views::ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::restaurant_not_found())?;
    restaurant_service::delete_restaurant(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
