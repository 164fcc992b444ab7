use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{AutomobileRepository, RepositoryError};
use crate::models::Automobile;

#[derive(Default)]
struct Rows {
    last_id: i64,
    by_id: BTreeMap<i64, Automobile>,
}

/// Process-local store with the same contract as the Postgres one.
#[derive(Default)]
pub struct InMemoryAutomobileRepository {
    rows: RwLock<Rows>,
}

impl InMemoryAutomobileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains(field: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(needle) => field.is_some_and(|value| value.contains(needle)),
    }
}

#[async_trait]
impl AutomobileRepository for InMemoryAutomobileRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_all(&self) -> Result<Vec<Automobile>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn find_by_color_containing_and_make_containing(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<Vec<Automobile>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .values()
            .filter(|auto| contains(auto.color.as_deref(), color))
            .filter(|auto| contains(Some(auto.make.as_str()), make))
            .cloned()
            .collect())
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Automobile>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().find(|auto| auto.vin == vin).cloned())
    }

    async fn save(&self, automobile: &Automobile) -> Result<Automobile, RepositoryError> {
        let mut rows = self.rows.write().await;

        let vin_taken = rows
            .by_id
            .values()
            .any(|other| other.vin == automobile.vin && other.id != automobile.id);
        if vin_taken {
            return Err(RepositoryError::duplicate_vin(&automobile.vin));
        }

        let mut saved = automobile.clone();
        if saved.is_persisted() {
            if !rows.by_id.contains_key(&saved.id) {
                return Err(RepositoryError::Missing { id: saved.id });
            }
        } else {
            rows.last_id += 1;
            saved.id = rows.last_id;
        }

        rows.by_id.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.write().await;
        Ok(rows.by_id.remove(&id).is_some())
    }
}
