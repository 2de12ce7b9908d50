use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::views::{
    ErrorBody, ErrorsBody, NewRestaurantPizza, PizzaView, RestaurantDetailView, RestaurantPizzaEntry,
    RestaurantPizzaView, RestaurantView,
};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health,
        crate::routes::restaurants::list_restaurants,
        crate::routes::restaurants::get_restaurant,
        crate::routes::restaurants::delete_restaurant,
        crate::routes::pizzas::list_pizzas,
        crate::routes::restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantView,
            PizzaView,
            RestaurantPizzaEntry,
            RestaurantDetailView,
            RestaurantPizzaView,
            NewRestaurantPizza,
            ErrorBody,
            ErrorsBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas"),
    )
)]
pub struct ApiDoc;
