use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::{pizza, restaurant_pizza};
use crate::errors::ServiceError;

/// List all pizzas ordered by id.
#[instrument(skip(db))]
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<pizza::Model>, ServiceError> {
    Ok(pizza::list(db).await?)
}

/// Get pizza by id.
pub async fn get_pizza(db: &DatabaseConnection, id: i32) -> Result<pizza::Model, ServiceError> {
    pizza::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Pizza"))
}

/// Delete a pizza and every association referencing it, atomically.
#[instrument(skip(db))]
pub async fn delete_pizza(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            if pizza::find(txn, id).await?.is_none() {
                return Err(ServiceError::not_found("Pizza"));
            }
            let removed = restaurant_pizza::delete_for_pizza(txn, id).await?;
            pizza::delete(txn, id).await?;
            info!(pizza_id = id, restaurant_pizzas = removed, "pizza_deleted");
            Ok(())
        })
    })
    .await?;
    Ok(())
}
