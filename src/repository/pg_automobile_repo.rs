use async_trait::async_trait;
use sqlx::PgPool;

use super::{AutomobileRepository, RepositoryError};
use crate::models::Automobile;

const COLUMNS: &str = "id, model_year, make, model, color, owner_name, purchase_date, vin";

#[derive(Clone)]
pub struct PgAutomobileRepository {
    pool: PgPool,
}

impl PgAutomobileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn is_duplicate_error(err: &sqlx::Error) -> bool {
        // unique_violation
        matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
    }

    fn map_write_error(err: sqlx::Error, vin: &str) -> RepositoryError {
        if Self::is_duplicate_error(&err) {
            RepositoryError::duplicate_vin(vin)
        } else {
            RepositoryError::Database(err)
        }
    }

    async fn insert(&self, automobile: &Automobile) -> Result<Automobile, RepositoryError> {
        let query = format!(
            "INSERT INTO automobiles (model_year, make, model, color, owner_name, purchase_date, vin)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            COLUMNS
        );

        sqlx::query_as::<_, Automobile>(&query)
            .bind(automobile.year)
            .bind(&automobile.make)
            .bind(&automobile.model)
            .bind(&automobile.color)
            .bind(&automobile.owner)
            .bind(automobile.purchase_date)
            .bind(&automobile.vin)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &automobile.vin))
    }

    async fn update(&self, automobile: &Automobile) -> Result<Automobile, RepositoryError> {
        let query = format!(
            "UPDATE automobiles
             SET model_year = $1, make = $2, model = $3, color = $4, owner_name = $5,
                 purchase_date = $6, vin = $7
             WHERE id = $8
             RETURNING {}",
            COLUMNS
        );

        sqlx::query_as::<_, Automobile>(&query)
            .bind(automobile.year)
            .bind(&automobile.make)
            .bind(&automobile.model)
            .bind(&automobile.color)
            .bind(&automobile.owner)
            .bind(automobile.purchase_date)
            .bind(&automobile.vin)
            .bind(automobile.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, &automobile.vin))?
            .ok_or(RepositoryError::Missing { id: automobile.id })
    }
}

#[async_trait]
impl AutomobileRepository for PgAutomobileRepository {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Automobile>, RepositoryError> {
        let query = format!("SELECT {} FROM automobiles ORDER BY id", COLUMNS);
        let rows = sqlx::query_as::<_, Automobile>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_color_containing_and_make_containing(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> Result<Vec<Automobile>, RepositoryError> {
        // literal, case-sensitive substring match
        let query = format!(
            "SELECT {} FROM automobiles
             WHERE ($1::text IS NULL OR strpos(color, $1) > 0)
               AND ($2::text IS NULL OR strpos(make, $2) > 0)
             ORDER BY id",
            COLUMNS
        );
        let rows = sqlx::query_as::<_, Automobile>(&query)
            .bind(color)
            .bind(make)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Automobile>, RepositoryError> {
        let query = format!("SELECT {} FROM automobiles WHERE vin = $1", COLUMNS);
        let row = sqlx::query_as::<_, Automobile>(&query)
            .bind(vin)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, automobile: &Automobile) -> Result<Automobile, RepositoryError> {
        if automobile.is_persisted() {
            self.update(automobile).await
        } else {
            self.insert(automobile).await
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM automobiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
