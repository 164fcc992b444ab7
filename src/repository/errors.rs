use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Automobile with VIN '{vin}' already exists")]
    DuplicateVin { vin: String },

    #[error("Automobile with id {id} no longer exists")]
    Missing { id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn duplicate_vin(vin: impl Into<String>) -> Self {
        Self::DuplicateVin { vin: vin.into() }
    }
}
