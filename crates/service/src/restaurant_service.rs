use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

/// A restaurant with its associations and their pizzas, ordered by association id.
#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantDetail {
    pub restaurant: restaurant::Model,
    pub restaurant_pizzas: Vec<(restaurant_pizza::Model, pizza::Model)>,
}

/// List all restaurants ordered by id.
#[instrument(skip(db))]
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<restaurant::Model>, ServiceError> {
    Ok(restaurant::list(db).await?)
}

/// Get restaurant by id.
#[instrument(skip(db))]
pub async fn get_restaurant(db: &DatabaseConnection, id: i32) -> Result<restaurant::Model, ServiceError> {
    restaurant::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Restaurant"))
}

/// Restaurant plus its priced pizzas, read in one transaction.
#[instrument(skip(db))]
pub async fn get_restaurant_detail(db: &DatabaseConnection, id: i32) -> Result<RestaurantDetail, ServiceError> {
    let detail = db
        .transaction::<_, RestaurantDetail, ServiceError>(|txn| {
            Box::pin(async move {
                let restaurant = restaurant::find(txn, id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Restaurant"))?;
                let restaurant_pizzas = restaurant_pizza::for_restaurant(txn, id).await?;
                Ok(RestaurantDetail { restaurant, restaurant_pizzas })
            })
        })
        .await?;
    Ok(detail)
}

/// Delete a restaurant and every association referencing it, atomically.
#[instrument(skip(db))]
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            if restaurant::find(txn, id).await?.is_none() {
                return Err(ServiceError::not_found("Restaurant"));
            }
            let removed = restaurant_pizza::delete_for_restaurant(txn, id).await?;
            restaurant::delete(txn, id).await?;
            info!(restaurant_id = id, restaurant_pizzas = removed, "restaurant_deleted");
            Ok(())
        })
    })
    .await?;
    Ok(())
}
