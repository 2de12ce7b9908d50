use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument, warn};

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

/// A freshly stored association with both parents loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatedRestaurantPizza {
    pub restaurant_pizza: restaurant_pizza::Model,
    pub pizza: pizza::Model,
    pub restaurant: restaurant::Model,
}

/// Offer a pizza at a restaurant.
///
/// The price is checked before any store access. Missing pizza or restaurant
/// rows are reported as validation errors and nothing is written.
#[instrument(skip(db))]
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    price: i64,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<CreatedRestaurantPizza, ServiceError> {
    let price = match restaurant_pizza::validate_price(price) {
        Ok(price) => price,
        Err(e) => {
            warn!(price, error = %e, "restaurant_pizza_rejected");
            return Err(e.into());
        }
    };

    let created = db
        .transaction::<_, CreatedRestaurantPizza, ServiceError>(|txn| {
            Box::pin(async move {
                let pizza = pizza::find(txn, pizza_id)
                    .await?
                    .ok_or_else(|| ServiceError::Validation(format!("pizza {pizza_id} does not exist")))?;
                let restaurant = restaurant::find(txn, restaurant_id)
                    .await?
                    .ok_or_else(|| ServiceError::Validation(format!("restaurant {restaurant_id} does not exist")))?;
                let restaurant_pizza = restaurant_pizza::create(txn, price, pizza.id, restaurant.id).await?;
                Ok(CreatedRestaurantPizza { restaurant_pizza, pizza, restaurant })
            })
        })
        .await
        .inspect_err(|e| warn!(pizza_id, restaurant_id, error = %e, "restaurant_pizza_rejected"))?;

    info!(
        restaurant_pizza_id = created.restaurant_pizza.id,
        pizza_id,
        restaurant_id,
        price,
        "restaurant_pizza_created"
    );
    Ok(created)
}
