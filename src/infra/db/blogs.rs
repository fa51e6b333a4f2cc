use async_trait::async_trait;
use serde_json::Value;
use sqlx::query_as;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::application::repos::{
    BlogsRepo, CreateBlogParams, ReadScope, RepoError, UpdateBlogParams,
};
use crate::domain::entities::BlogRecord;
use crate::domain::types::ContentStatus;

use super::{PostgresRepositories, map_sqlx_error};

const BLOG_COLUMNS: &str = "id, title, slug, summary, image_id, published_at, content, \
     meta_title, meta_description, meta_image_id, status, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    slug: String,
    summary: Option<String>,
    image_id: Option<Uuid>,
    published_at: Option<Date>,
    content: Value,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_image_id: Option<Uuid>,
    status: ContentStatus,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<BlogRow> for BlogRecord {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            summary: row.summary,
            image_id: row.image_id,
            published_at: row.published_at,
            content: row.content,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            meta_image_id: row.meta_image_id,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn scope_condition(scope: ReadScope) -> &'static str {
    if scope.includes_drafts() {
        ""
    } else {
        " AND status = 'published'"
    }
}

#[async_trait]
impl BlogsRepo for PostgresRepositories {
    async fn list_blogs(&self, scope: ReadScope) -> Result<Vec<BlogRecord>, RepoError> {
        let rows = query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE 1=1{} \
             ORDER BY published_at DESC NULLS LAST, created_at DESC",
            scope_condition(scope)
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(BlogRecord::from).collect())
    }

    async fn find_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError> {
        let row = query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(BlogRecord::from))
    }

    async fn find_blog_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<BlogRecord>, RepoError> {
        let row = query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE slug = $1{}",
            scope_condition(scope)
        ))
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(BlogRecord::from))
    }

    async fn blog_slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM blogs WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool())
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }

    async fn create_blog(&self, params: CreateBlogParams) -> Result<BlogRecord, RepoError> {
        let row = query_as::<_, BlogRow>(&format!(
            "INSERT INTO blogs (id, title, slug, summary, image_id, published_at, content, \
             meta_title, meta_description, meta_image_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12) \
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.title)
        .bind(params.slug)
        .bind(params.summary)
        .bind(params.image_id)
        .bind(params.published_at)
        .bind(params.content)
        .bind(params.meta_title)
        .bind(params.meta_description)
        .bind(params.meta_image_id)
        .bind(params.status)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(BlogRecord::from(row))
    }

    async fn update_blog(&self, params: UpdateBlogParams) -> Result<BlogRecord, RepoError> {
        let row = query_as::<_, BlogRow>(&format!(
            "UPDATE blogs SET title = $2, slug = $3, summary = $4, image_id = $5, \
             published_at = $6, content = $7, meta_title = $8, meta_description = $9, \
             meta_image_id = $10, status = $11, updated_at = now() \
             WHERE id = $1 \
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.title)
        .bind(params.slug)
        .bind(params.summary)
        .bind(params.image_id)
        .bind(params.published_at)
        .bind(params.content)
        .bind(params.meta_title)
        .bind(params.meta_description)
        .bind(params.meta_image_id)
        .bind(params.status)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(BlogRecord::from(row))
    }

    async fn delete_blog(&self, id: Uuid) -> Result<Option<BlogRecord>, RepoError> {
        let row = query_as::<_, BlogRow>(&format!(
            "DELETE FROM blogs WHERE id = $1 RETURNING {BLOG_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(BlogRecord::from))
    }

    async fn delete_all_blogs(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM blogs")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
