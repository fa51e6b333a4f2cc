use async_trait::async_trait;
use sqlx::query_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{CreateMediaParams, MediaRepo, RepoError, UpdateMediaParams};
use crate::domain::entities::MediaRecord;

use super::{PostgresRepositories, map_sqlx_error};

const MEDIA_COLUMNS: &str =
    "id, filename, alt, content_type, width, height, url, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct MediaRow {
    id: Uuid,
    filename: String,
    alt: String,
    content_type: String,
    width: Option<i32>,
    height: Option<i32>,
    url: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<MediaRow> for MediaRecord {
    fn from(row: MediaRow) -> Self {
        Self {
            id: row.id,
            filename: row.filename,
            alt: row.alt,
            content_type: row.content_type,
            width: row.width,
            height: row.height,
            url: row.url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MediaRepo for PostgresRepositories {
    async fn list_media(&self) -> Result<Vec<MediaRecord>, RepoError> {
        let rows = query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(MediaRecord::from).collect())
    }

    async fn find_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        let row = query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(MediaRecord::from))
    }

    async fn create_media(&self, params: CreateMediaParams) -> Result<MediaRecord, RepoError> {
        let row = query_as::<_, MediaRow>(&format!(
            "INSERT INTO media (id, filename, alt, content_type, width, height, url, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.filename)
        .bind(params.alt)
        .bind(params.content_type)
        .bind(params.width)
        .bind(params.height)
        .bind(params.url)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(MediaRecord::from(row))
    }

    async fn update_media(&self, params: UpdateMediaParams) -> Result<MediaRecord, RepoError> {
        let row = query_as::<_, MediaRow>(&format!(
            "UPDATE media SET alt = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.alt)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(MediaRecord::from(row))
    }

    async fn delete_media(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        let row = query_as::<_, MediaRow>(&format!(
            "DELETE FROM media WHERE id = $1 RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(MediaRecord::from))
    }

    async fn delete_all_media(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM media")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
