use async_trait::async_trait;
use serde_json::Value;
use sqlx::{query_as, types::Json};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{GlobalsRepo, RepoError, UpsertProfileParams};
use crate::domain::entities::{NavLinkRecord, NavigationRecord, ProfileRecord, SocialLinkRecord};
use crate::domain::types::NavArea;

use super::{PostgresRepositories, map_sqlx_error};

const PROFILE_COLUMNS: &str = "name, title, bio, avatar_id, email, phone, location, \
     timezone, github, languages, social_links, updated_at";

#[derive(sqlx::FromRow)]
struct ProfileRow {
    name: String,
    title: String,
    bio: Value,
    avatar_id: Option<Uuid>,
    email: String,
    phone: Option<String>,
    location: Option<String>,
    timezone: Option<String>,
    github: Option<String>,
    languages: Vec<String>,
    social_links: Json<Vec<SocialLinkRecord>>,
    updated_at: OffsetDateTime,
}

impl From<ProfileRow> for ProfileRecord {
    fn from(row: ProfileRow) -> Self {
        Self {
            name: row.name,
            title: row.title,
            bio: row.bio,
            avatar_id: row.avatar_id,
            email: row.email,
            phone: row.phone,
            location: row.location,
            timezone: row.timezone,
            github: row.github,
            languages: row.languages,
            social_links: row.social_links.0,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NavigationRow {
    area: NavArea,
    links: Json<Vec<NavLinkRecord>>,
    updated_at: OffsetDateTime,
}

impl From<NavigationRow> for NavigationRecord {
    fn from(row: NavigationRow) -> Self {
        Self {
            area: row.area,
            links: row.links.0,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl GlobalsRepo for PostgresRepositories {
    async fn load_profile(&self) -> Result<Option<ProfileRecord>, RepoError> {
        let row = query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profile WHERE id = 1"
        ))
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProfileRecord::from))
    }

    async fn upsert_profile(
        &self,
        params: UpsertProfileParams,
    ) -> Result<ProfileRecord, RepoError> {
        let row = query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profile (id, name, title, bio, avatar_id, email, phone, location, \
             timezone, github, languages, social_links, updated_at) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             ON CONFLICT (id) DO UPDATE SET \
                name = EXCLUDED.name, title = EXCLUDED.title, bio = EXCLUDED.bio, \
                avatar_id = EXCLUDED.avatar_id, email = EXCLUDED.email, \
                phone = EXCLUDED.phone, location = EXCLUDED.location, \
                timezone = EXCLUDED.timezone, github = EXCLUDED.github, \
                languages = EXCLUDED.languages, social_links = EXCLUDED.social_links, \
                updated_at = EXCLUDED.updated_at \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(params.name)
        .bind(params.title)
        .bind(params.bio)
        .bind(params.avatar_id)
        .bind(params.email)
        .bind(params.phone)
        .bind(params.location)
        .bind(params.timezone)
        .bind(params.github)
        .bind(params.languages)
        .bind(Json(params.social_links))
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(ProfileRecord::from(row))
    }

    async fn load_navigation(
        &self,
        area: NavArea,
    ) -> Result<Option<NavigationRecord>, RepoError> {
        let row = query_as::<_, NavigationRow>(
            "SELECT area, links, updated_at FROM navigation WHERE area = $1",
        )
        .bind(area)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(NavigationRecord::from))
    }

    async fn upsert_navigation(
        &self,
        area: NavArea,
        links: Vec<NavLinkRecord>,
    ) -> Result<NavigationRecord, RepoError> {
        let row = query_as::<_, NavigationRow>(
            "INSERT INTO navigation (area, links, updated_at) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (area) DO UPDATE SET \
                links = EXCLUDED.links, updated_at = EXCLUDED.updated_at \
             RETURNING area, links, updated_at",
        )
        .bind(area)
        .bind(Json(links))
        .bind(OffsetDateTime::now_utc())
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(NavigationRecord::from(row))
    }
}
