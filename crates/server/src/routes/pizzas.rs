use axum::{extract::State, Json};
use tracing::instrument;

use service::pizza_service;

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::PizzaView;

#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "pizzas",
    responses((status = 200, description = "All pizzas", body = [PizzaView]))
)]
#[instrument(skip(state))]
pub async fn list_pizzas(State(state): State<ServerState>) -> Result<Json<Vec<PizzaView>>, ApiError> {
    let pizzas = pizza_service::list_pizzas(&state.db).await?;
    Ok(Json(pizzas.iter().map(PizzaView::from).collect()))
}
