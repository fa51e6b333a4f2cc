use async_trait::async_trait;
use sqlx::{query_as, types::Json};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{
    CreateExperienceParams, ExperiencesRepo, RepoError, UpdateExperienceParams,
};
use crate::domain::entities::{ExperienceRecord, PositionRecord};

use super::{PostgresRepositories, map_sqlx_error};

const EXPERIENCE_COLUMNS: &str = "id, company, logo_id, website, location, is_current, \
     sort_order, positions, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    company: String,
    logo_id: Option<Uuid>,
    website: Option<String>,
    location: Option<String>,
    is_current: bool,
    sort_order: i32,
    positions: Json<Vec<PositionRecord>>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<ExperienceRow> for ExperienceRecord {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: row.id,
            company: row.company,
            logo_id: row.logo_id,
            website: row.website,
            location: row.location,
            is_current: row.is_current,
            sort_order: row.sort_order,
            positions: row.positions.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ExperiencesRepo for PostgresRepositories {
    async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, RepoError> {
        let rows = query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences \
             ORDER BY sort_order DESC, created_at DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ExperienceRecord::from).collect())
    }

    async fn find_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError> {
        let row = query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ExperienceRecord::from))
    }

    async fn create_experience(
        &self,
        params: CreateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError> {
        let row = query_as::<_, ExperienceRow>(&format!(
            "INSERT INTO experiences (id, company, logo_id, website, location, is_current, \
             sort_order, positions, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) \
             RETURNING {EXPERIENCE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(params.company)
        .bind(params.logo_id)
        .bind(params.website)
        .bind(params.location)
        .bind(params.is_current)
        .bind(params.sort_order)
        .bind(Json(params.positions))
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ExperienceRecord::from(row))
    }

    async fn update_experience(
        &self,
        params: UpdateExperienceParams,
    ) -> Result<ExperienceRecord, RepoError> {
        let row = query_as::<_, ExperienceRow>(&format!(
            "UPDATE experiences SET company = $2, logo_id = $3, website = $4, location = $5, \
             is_current = $6, sort_order = $7, positions = $8, updated_at = now() \
             WHERE id = $1 \
             RETURNING {EXPERIENCE_COLUMNS}"
        ))
        .bind(params.id)
        .bind(params.company)
        .bind(params.logo_id)
        .bind(params.website)
        .bind(params.location)
        .bind(params.is_current)
        .bind(params.sort_order)
        .bind(Json(params.positions))
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ExperienceRecord::from(row))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<Option<ExperienceRecord>, RepoError> {
        let row = query_as::<_, ExperienceRow>(&format!(
            "DELETE FROM experiences WHERE id = $1 RETURNING {EXPERIENCE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ExperienceRecord::from))
    }

    async fn delete_all_experiences(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM experiences")
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
