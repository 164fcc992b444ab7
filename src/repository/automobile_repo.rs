use async_trait::async_trait;

use super::RepositoryError;
use crate::models::Automobile;

/// Persistence port for automobile records.
///
/// Implementations own VIN uniqueness and the atomicity of each single call.
/// Records come back in ascending id order.
#[async_trait]
pub trait AutomobileRepository: Send + Sync {
    /// Short label for the backing store, reported by the health check.
    fn backend_name(&self) -> &'static str;

    /// Round-trip to the store; always succeeds for in-process stores.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Automobile>, RepositoryError>;

    /// Case-sensitive substring match on color AND make. A `None` filter
    /// matches every record; a `Some` filter never matches a record whose
    /// field is absent.
    async fn find_by_color_containing_and_make_containing(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<Vec<Automobile>, RepositoryError>;

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Automobile>, RepositoryError>;

    /// Inserts when `automobile.id == 0` and assigns a fresh id, otherwise
    /// overwrites the row with that id.
    ///
    /// Returns `RepositoryError::Missing` when updating a row that is gone and
    /// `RepositoryError::DuplicateVin` when the VIN is already taken.
    async fn save(&self, automobile: &Automobile) -> Result<Automobile, RepositoryError>;

    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
