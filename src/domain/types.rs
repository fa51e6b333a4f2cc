use serde::{Deserialize, Serialize};

/// Publication state for draft-capable collections (projects, blogs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "content_status", rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn is_published(self) -> bool {
        matches!(self, ContentStatus::Published)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "skill_category", rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

/// Employment type for a position within an experience. Stored inside the
/// positions JSON document, so serde naming is the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Github,
    Twitter,
    Instagram,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "nav_area", rename_all = "snake_case")]
pub enum NavArea {
    Header,
    Footer,
}

/// Document collections managed by the backend. The enum doubles as the cache
/// contract: each collection owns a tag, an index path, and (for collections
/// with per-item pages) a detail path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Media,
    Skills,
    Projects,
    Experiences,
    Gallery,
    Blogs,
}

impl Collection {
    pub fn tag(self) -> &'static str {
        match self {
            Collection::Media => "media",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::Experiences => "experiences",
            Collection::Gallery => "gallery",
            Collection::Blogs => "blogs",
        }
    }

    /// The public path listing documents of this collection. Collections
    /// without a dedicated listing surface through the homepage.
    pub fn index_path(self) -> &'static str {
        match self {
            Collection::Blogs => "/blog",
            Collection::Gallery => "/gallery",
            Collection::Media
            | Collection::Skills
            | Collection::Projects
            | Collection::Experiences => "/",
        }
    }

    pub fn detail_path(self, slug: &str) -> Option<String> {
        match self {
            Collection::Blogs => Some(format!("/blog/{slug}")),
            Collection::Projects => Some(format!("/projects/{slug}")),
            _ => None,
        }
    }

    /// Whether documents in this collection carry a draft/published status.
    pub fn draft_capable(self) -> bool {
        matches!(self, Collection::Projects | Collection::Blogs)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Singleton globals. Like [`Collection`], carries the cache tag contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Global {
    Profile,
    Header,
    Footer,
}

impl Global {
    pub fn tag(self) -> &'static str {
        match self {
            Global::Profile => "global_profile",
            Global::Header => "global_header",
            Global::Footer => "global_footer",
        }
    }
}

impl std::fmt::Display for Global {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
