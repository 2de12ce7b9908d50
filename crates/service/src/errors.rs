use sea_orm::TransactionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Whether the caller sent bad input, as opposed to a missing row or a store failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ServiceError::Db(db.to_string()),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("Restaurant").to_string(), "Restaurant not found");
    }

    #[test]
    fn validation_classification() {
        assert!(ServiceError::Validation("x".into()).is_validation());
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_validation());
        assert!(!ServiceError::Model(ModelError::Db("x".into())).is_validation());
        assert!(!ServiceError::not_found("Pizza").is_validation());
    }

    #[test]
    fn transaction_error_unwraps_inner() {
        let e: ServiceError = TransactionError::Transaction(ServiceError::not_found("Pizza")).into();
        assert!(matches!(e, ServiceError::NotFound(_)));
        let e: ServiceError = TransactionError::<ServiceError>::Connection(sea_orm::DbErr::Custom("boom".into())).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }
}
