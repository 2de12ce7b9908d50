//! JSON shapes returned by the API.
//!
//! Each view lists its fields explicitly. Nested parents are rendered with
//! their own plain view, so no view ever carries an association collection
//! and no output can loop back through `restaurant_pizzas`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use models::{pizza, restaurant, restaurant_pizza};
use service::{restaurant_pizza_service::CreatedRestaurantPizza, restaurant_service::RestaurantDetail};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantView {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&restaurant::Model> for RestaurantView {
    fn from(m: &restaurant::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), address: m.address.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PizzaView {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&pizza::Model> for PizzaView {
    fn from(m: &pizza::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), ingredients: m.ingredients.clone() }
    }
}

/// One priced pizza inside a restaurant detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    pub price: i32,
    pub pizza: PizzaView,
}

impl From<&(restaurant_pizza::Model, pizza::Model)> for RestaurantPizzaEntry {
    fn from((rp, pizza): &(restaurant_pizza::Model, pizza::Model)) -> Self {
        Self { id: rp.id, price: rp.price, pizza: pizza.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantDetailView {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl From<&RestaurantDetail> for RestaurantDetailView {
    fn from(d: &RestaurantDetail) -> Self {
        Self {
            id: d.restaurant.id,
            name: d.restaurant.name.clone(),
            address: d.restaurant.address.clone(),
            restaurant_pizzas: d.restaurant_pizzas.iter().map(RestaurantPizzaEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantPizzaView {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaView,
    pub restaurant: RestaurantView,
}

impl From<&CreatedRestaurantPizza> for RestaurantPizzaView {
    fn from(c: &CreatedRestaurantPizza) -> Self {
        Self {
            id: c.restaurant_pizza.id,
            price: c.restaurant_pizza.price,
            pizza_id: c.restaurant_pizza.pizza_id,
            restaurant_id: c.restaurant_pizza.restaurant_id,
            pizza: (&c.pizza).into(),
            restaurant: (&c.restaurant).into(),
        }
    }
}

/// Request body for `POST /restaurant_pizzas`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewRestaurantPizza {
    /// Any JSON integer; values outside 1..=30 are validation errors.
    pub price: i64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}
