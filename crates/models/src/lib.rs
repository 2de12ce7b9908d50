//! Persistence layer: sea-orm entities for restaurants, pizzas and the priced
//! `restaurant_pizzas` association, plus connection setup.
pub mod errors;
pub mod db;
pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;

#[cfg(test)]
mod tests;
