use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{instrument, warn};

use service::restaurant_pizza_service;

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::{NewRestaurantPizza, RestaurantPizzaView};

/// 创建餐厅-披萨关联（带价格）
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "restaurant_pizzas",
    request_body = crate::views::NewRestaurantPizza,
    responses(
        (status = 201, description = "Created", body = crate::views::RestaurantPizzaView),
        (status = 400, description = "Validation errors", body = crate::views::ErrorsBody),
    )
)]
#[instrument(skip_all)]
pub async fn create_restaurant_pizza(
    State(state): State<ServerState>,
    payload: Result<Json<NewRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaView>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed restaurant_pizza body");
        ApiError::Validation(vec![rejection.body_text()])
    })?;
    let created = restaurant_pizza_service::create_restaurant_pizza(
        &state.db,
        input.price,
        input.pizza_id,
        input.restaurant_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(RestaurantPizzaView::from(&created))))
}
