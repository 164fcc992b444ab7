use std::sync::Arc;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Automobile, AutosList};
use crate::repository::{AutomobileRepository, RepositoryError};

#[derive(Clone)]
pub struct AutosService {
    repository: Arc<dyn AutomobileRepository>,
}

impl AutosService {
    pub fn new(repository: Arc<dyn AutomobileRepository>) -> Self {
        Self { repository }
    }

    pub fn store_backend(&self) -> &'static str {
        self.repository.backend_name()
    }

    pub async fn check_store(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }

    pub async fn list_autos(&self) -> Result<AutosList, AppError> {
        let automobiles = self.repository.find_all().await?;
        tracing::debug!("{} Listed {} automobiles", API_NAME, automobiles.len());
        Ok(AutosList::new(automobiles))
    }

    /// Substring search over color AND make. `None` means no match at all,
    /// as opposed to the always-present list from `list_autos`.
    pub async fn search_autos(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<Option<AutosList>, AppError> {
        if color.is_none() && make.is_none() {
            return self.list_autos().await.map(Some);
        }

        let automobiles = self
            .repository
            .find_by_color_containing_and_make_containing(color, make)
            .await?;

        tracing::debug!(
            "{} Search color={:?} make={:?} matched {} automobiles",
            API_NAME,
            color,
            make,
            automobiles.len()
        );

        if automobiles.is_empty() {
            return Ok(None);
        }
        Ok(Some(AutosList::new(automobiles)))
    }

    pub async fn add_auto(&self, mut automobile: Automobile) -> Result<Automobile, AppError> {
        automobile.validate()?;
        // the store assigns identity
        automobile.id = 0;

        let saved = self.repository.save(&automobile).await?;
        tracing::info!("{} Added automobile {} with id {}", API_NAME, saved.vin, saved.id);
        Ok(saved)
    }

    pub async fn get_auto(&self, vin: &str) -> Result<Option<Automobile>, AppError> {
        Ok(self.repository.find_by_vin(vin).await?)
    }

    pub async fn update_auto(
        &self,
        vin: &str,
        color: &str,
        owner: &str,
    ) -> Result<Automobile, AppError> {
        let mut automobile = self
            .repository
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| AppError::NotFound(vin.to_string()))?;

        automobile.color = Some(color.to_string());
        automobile.owner = Some(owner.to_string());

        // A delete that lands between the lookup and the save surfaces as Missing.
        let updated = self.repository.save(&automobile).await.map_err(|e| match e {
            RepositoryError::Missing { .. } => AppError::NotFound(vin.to_string()),
            other => other.into(),
        })?;

        tracing::info!("{} Updated automobile {}", API_NAME, vin);
        Ok(updated)
    }

    pub async fn delete_auto(&self, vin: &str) -> Result<(), AppError> {
        let automobile = self
            .repository
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| AppError::NotFound(vin.to_string()))?;

        if !self.repository.delete(automobile.id).await? {
            return Err(AppError::NotFound(vin.to_string()));
        }

        tracing::info!("{} Deleted automobile {}", API_NAME, vin);
        Ok(())
    }
}
