use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Ledger row for a generated artifact. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub filename: String,
    pub file_path: String,
    pub created_at: OffsetDateTime,
}

impl Report {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        topic: &str,
        filename: &str,
        file_path: &str,
    ) -> anyhow::Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (user_id, topic, filename, file_path)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, topic, filename, file_path, created_at
            "#,
        )
        .bind(user_id)
        .bind(topic)
        .bind(filename)
        .bind(file_path)
        .fetch_one(db)
        .await?;
        Ok(report)
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Report>> {
        let rows = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, user_id, topic, filename, file_path, created_at
            FROM reports
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
