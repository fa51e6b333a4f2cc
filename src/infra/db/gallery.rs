use async_trait::async_trait;
use serde_json::Value;
use sqlx::query_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{
    CreateGalleryItemParams, GalleryRepo, RepoError, UpdateGalleryItemParams,
};
use crate::domain::entities::GalleryItemRecord;

use super::{PostgresRepositories, map_sqlx_error};

const GALLERY_COLUMNS: &str =
    "id, image_id, title, description, exif, sort_order, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct GalleryItemRow {
    id: Uuid,
    image_id: Uuid,
    title: Option<String>,
    description: Option<String>,
    exif: Option<Value>,
    sort_order: i32,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<GalleryItemRow> for GalleryItemRecord {
    fn from(row: GalleryItemRow) -> Self {
        Self {
            id: row.id,
            image_id: row.image_id,
            title: row.title,
            description: row.description,
            exif: row.exif,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl GalleryRepo for PostgresRepositories {
    async fn list_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, RepoError> {
        let rows = query_as::<_, GalleryItemRow>(&format!(
            "SELECT {GALLERY_COLUMNS} FROM gallery_items \
             ORDER BY sort_order DESC, created_at DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(GalleryItemRecord::from).collect())
    }

    async fn find_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItemRecord>, RepoError> {
        let row = query_as::<_, GalleryItemRow>(&format!(
            "SELECT {GALLERY_COLUMNS} FROM gallery_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(GalleryItemRecord::from))
    }

    async fn create_gallery_item(
        &self,
        params: CreateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError> {
        let row = query_as::<_, GalleryItemRow>(&format!(
            "INSERT INTO gallery_items (id, image_id, title, description, exif, sort_order, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) \
             RETURNING {GALLERY_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.image_id)
        .bind(params.title)
        .bind(params.description)
        .bind(params.exif)
        .bind(params.sort_order)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(GalleryItemRecord::from(row))
    }

    async fn update_gallery_item(
        &self,
        params: UpdateGalleryItemParams,
    ) -> Result<GalleryItemRecord, RepoError> {
        let row = query_as::<_, GalleryItemRow>(&format!(
            "UPDATE gallery_items SET title = $2, description = $3, sort_order = $4, \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING {GALLERY_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.title)
        .bind(params.description)
        .bind(params.sort_order)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(GalleryItemRecord::from(row))
    }

    async fn delete_gallery_item(
        &self,
        id: Uuid,
    ) -> Result<Option<GalleryItemRecord>, RepoError> {
        let row = query_as::<_, GalleryItemRow>(&format!(
            "DELETE FROM gallery_items WHERE id = $1 RETURNING {GALLERY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(GalleryItemRecord::from))
    }

    async fn delete_all_gallery_items(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM gallery_items")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
