//! Dog repository

use crate::domain::{Dog, DogInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

/// Persistence contract consumed by the dog handlers.
///
/// Keyed operations return `Ok(None)` when no record matches; `Err` is
/// reserved for storage failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Dog>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>>;
    async fn create(&self, input: &DogInput) -> Result<Dog>;
    async fn update(&self, id: &str, input: &DogInput) -> Result<Option<Dog>>;
    /// Removes the record and returns it as it was before removal
    async fn delete(&self, id: &str) -> Result<Option<Dog>>;
    async fn ping(&self) -> Result<()>;
}

pub struct DogRepositoryImpl {
    pool: MySqlPool,
}

impl DogRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for DogRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Dog>> {
        let dogs = sqlx::query_as::<_, Dog>(
            r#"
            SELECT id, name, weight
            FROM dogs
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(dogs)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>> {
        let dog = sqlx::query_as::<_, Dog>(
            r#"
            SELECT id, name, weight
            FROM dogs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dog)
    }

    async fn create(&self, input: &DogInput) -> Result<Dog> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO dogs (id, name, weight, created_at, updated_at)
            VALUES (?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&id)
        .bind(&input.name)
        .bind(input.weight)
        .execute(&self.pool)
        .await?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create dog")))
    }

    async fn update(&self, id: &str, input: &DogInput) -> Result<Option<Dog>> {
        sqlx::query(
            r#"
            UPDATE dogs
            SET name = ?, weight = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(input.weight)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // rows_affected is 0 for an unchanged row, so re-read to tell a miss apart.
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Dog>(
            r#"
            SELECT id, name, weight
            FROM dogs
            WHERE id = ?
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(dog) = existing else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM dogs WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(dog))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
