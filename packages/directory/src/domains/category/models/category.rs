use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Service category, self-referential for hierarchy (e.g. "Food" →
/// "Food Pantries")
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A category joined with its parent's name, for transport projection
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryWithParent {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub parent_name: Option<String>,
}

impl Category {
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM categories ORDER BY name")
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        name: &str,
        parent_id: Option<Uuid>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO categories (id, name, parent_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(parent_id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Load a category together with its parent's name
    pub async fn find_with_parent(
        id: Uuid,
        pool: &PgPool,
    ) -> Result<CategoryWithParent, sqlx::Error> {
        sqlx::query_as::<_, CategoryWithParent>(
            r#"
            SELECT c.id, c.name, c.parent_id, p.name AS parent_name
            FROM categories c
            LEFT JOIN categories p ON p.id = c.parent_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
