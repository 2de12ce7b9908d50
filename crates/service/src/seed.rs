//! Sample data for local development. Wipes all three tables first.
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::info;

use models::{pizza, restaurant, restaurant_pizza};
use crate::errors::ServiceError;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Dominion Pizza", "Good Italian, 38 Park Ave, Brooklyn"),
    ("Pizzeria Sottocasa", "298 Atlantic Ave, Brooklyn"),
    ("Kiki's Pizza", "421 Court St, Brooklyn"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Margherita", "Dough, Tomato Sauce, Cheese, Basil"),
    ("Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Bianca", "Dough, Ricotta, Mozzarella, Garlic"),
];

/// (price, pizza index, restaurant index)
const OFFERINGS: &[(i32, usize, usize)] = &[(12, 0, 0), (15, 1, 0), (9, 0, 1), (18, 2, 1), (14, 1, 2)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SeedSummary, ServiceError> {
    let summary = db
        .transaction::<_, SeedSummary, ServiceError>(|txn| {
            Box::pin(async move {
                let db_err = |e: sea_orm::DbErr| ServiceError::Db(e.to_string());
                restaurant_pizza::Entity::delete_many().exec(txn).await.map_err(db_err)?;
                restaurant::Entity::delete_many().exec(txn).await.map_err(db_err)?;
                pizza::Entity::delete_many().exec(txn).await.map_err(db_err)?;

                let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
                for (name, address) in RESTAURANTS {
                    restaurants.push(restaurant::create(txn, name, address).await?);
                }
                let mut pizzas = Vec::with_capacity(PIZZAS.len());
                for (name, ingredients) in PIZZAS {
                    pizzas.push(pizza::create(txn, name, ingredients).await?);
                }
                for &(price, p, r) in OFFERINGS {
                    restaurant_pizza::create(txn, price, pizzas[p].id, restaurants[r].id).await?;
                }
                Ok(SeedSummary {
                    restaurants: restaurants.len(),
                    pizzas: pizzas.len(),
                    restaurant_pizzas: OFFERINGS.len(),
                })
            })
        })
        .await?;
    info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "sample_data_seeded"
    );
    Ok(summary)
}
