use async_trait::async_trait;
use sqlx::query_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{CreateSkillParams, RepoError, SkillsRepo, UpdateSkillParams};
use crate::domain::entities::SkillRecord;
use crate::domain::types::SkillCategory;

use super::{PostgresRepositories, map_sqlx_error};

const SKILL_COLUMNS: &str = "id, name, description, category, url, icon_id, sort_order, \
     show_on_stack, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct SkillRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    category: SkillCategory,
    url: Option<String>,
    icon_id: Option<Uuid>,
    sort_order: i32,
    show_on_stack: bool,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<SkillRow> for SkillRecord {
    fn from(row: SkillRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            url: row.url,
            icon_id: row.icon_id,
            sort_order: row.sort_order,
            show_on_stack: row.show_on_stack,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SkillsRepo for PostgresRepositories {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, RepoError> {
        let rows = query_as::<_, SkillRow>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills \
             ORDER BY category ASC, sort_order DESC, name ASC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(SkillRecord::from).collect())
    }

    async fn find_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError> {
        let row = query_as::<_, SkillRow>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(SkillRecord::from))
    }

    async fn create_skill(&self, params: CreateSkillParams) -> Result<SkillRecord, RepoError> {
        let row = query_as::<_, SkillRow>(&format!(
            "INSERT INTO skills (id, name, description, category, url, icon_id, sort_order, \
             show_on_stack, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.name)
        .bind(params.description)
        .bind(params.category)
        .bind(params.url)
        .bind(params.icon_id)
        .bind(params.sort_order)
        .bind(params.show_on_stack)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(SkillRecord::from(row))
    }

    async fn update_skill(&self, params: UpdateSkillParams) -> Result<SkillRecord, RepoError> {
        let row = query_as::<_, SkillRow>(&format!(
            "UPDATE skills SET name = $2, description = $3, category = $4, url = $5, \
             icon_id = $6, sort_order = $7, show_on_stack = $8, updated_at = now() \
             WHERE id = $1 \
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.name)
        .bind(params.description)
        .bind(params.category)
        .bind(params.url)
        .bind(params.icon_id)
        .bind(params.sort_order)
        .bind(params.show_on_stack)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(SkillRecord::from(row))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<Option<SkillRecord>, RepoError> {
        let row = query_as::<_, SkillRow>(&format!(
            "DELETE FROM skills WHERE id = $1 RETURNING {SKILL_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(SkillRecord::from))
    }

    async fn delete_all_skills(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM skills")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
