//! Service layer providing the persistence operations behind each route.
//! - One store transaction per write, committed before returning.
//! - Reuses validation and entity definitions in `models` crate.
//! - Cascading deletes are explicit: associations first, then the parent.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod restaurant_service;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod seed;
