use async_trait::async_trait;
use serde_json::Value;
use sqlx::query_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{
    CreateProjectParams, ProjectsRepo, ReadScope, RepoError, UpdateProjectParams,
};
use crate::domain::entities::ProjectRecord;
use crate::domain::types::ContentStatus;

use super::{PostgresRepositories, map_sqlx_error};

const PROJECT_COLUMNS: &str = "id, title, slug, description, image_id, technology_ids, \
     live_url, source_url, featured, sort_order, content, status, published_at, \
     created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    slug: String,
    description: Option<String>,
    image_id: Option<Uuid>,
    technology_ids: Vec<Uuid>,
    live_url: Option<String>,
    source_url: Option<String>,
    featured: bool,
    sort_order: i32,
    content: Option<Value>,
    status: ContentStatus,
    published_at: Option<OffsetDateTime>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image_id: row.image_id,
            technology_ids: row.technology_ids,
            live_url: row.live_url,
            source_url: row.source_url,
            featured: row.featured,
            sort_order: row.sort_order,
            content: row.content,
            status: row.status,
            published_at: row.published_at,
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
impl ProjectsRepo for PostgresRepositories {
    async fn list_projects(&self, scope: ReadScope) -> Result<Vec<ProjectRecord>, RepoError> {
        let rows = query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE 1=1{} \
             ORDER BY sort_order DESC, created_at DESC",
            scope_condition(scope)
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ProjectRecord::from).collect())
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError> {
        let row = query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProjectRecord::from))
    }

    async fn find_project_by_slug(
        &self,
        scope: ReadScope,
        slug: &str,
    ) -> Result<Option<ProjectRecord>, RepoError> {
        let row = query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = $1{}",
            scope_condition(scope)
        ))
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProjectRecord::from))
    }

    async fn project_slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM projects WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool())
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }

    async fn create_project(
        &self,
        params: CreateProjectParams,
    ) -> Result<ProjectRecord, RepoError> {
        let row = query_as::<_, ProjectRow>(&format!(
            "INSERT INTO projects (id, title, slug, description, image_id, technology_ids, \
             live_url, source_url, featured, sort_order, content, status, published_at, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.title)
        .bind(params.slug)
        .bind(params.description)
        .bind(params.image_id)
        .bind(params.technology_ids)
        .bind(params.live_url)
        .bind(params.source_url)
        .bind(params.featured)
        .bind(params.sort_order)
        .bind(params.content)
        .bind(params.status)
        .bind(params.published_at)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ProjectRecord::from(row))
    }

    async fn update_project(
        &self,
        params: UpdateProjectParams,
    ) -> Result<ProjectRecord, RepoError> {
        let row = query_as::<_, ProjectRow>(&format!(
            "UPDATE projects SET title = $2, slug = $3, description = $4, image_id = $5, \
             technology_ids = $6, live_url = $7, source_url = $8, featured = $9, \
             sort_order = $10, content = $11, status = $12, published_at = $13, \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.title)
        .bind(params.slug)
        .bind(params.description)
        .bind(params.image_id)
        .bind(params.technology_ids)
        .bind(params.live_url)
        .bind(params.source_url)
        .bind(params.featured)
        .bind(params.sort_order)
        .bind(params.content)
        .bind(params.status)
        .bind(params.published_at)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ProjectRecord::from(row))
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, RepoError> {
        let row = query_as::<_, ProjectRow>(&format!(
            "DELETE FROM projects WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProjectRecord::from))
    }

    async fn delete_all_projects(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM projects")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
