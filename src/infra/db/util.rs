use sqlx::error::DatabaseError;

use crate::application::repos::RepoError;

/// Translate an `sqlx` failure into the repository error the services match
/// on. Slug collisions on `projects_slug_key` / `blogs_slug_key` must come
/// through as [`RepoError::Duplicate`] carrying the constraint name: the slug
/// generator keys its retry loop off it.
pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::Database(db) => classify_database_error(&*db),
        other => RepoError::from_persistence(other),
    }
}

fn classify_database_error(db: &dyn DatabaseError) -> RepoError {
    let message = db.message();

    if message.contains("duplicate key") {
        return RepoError::Duplicate {
            constraint: db.constraint().unwrap_or("unknown").to_string(),
        };
    }

    // Dangling media references and malformed uuid/enum literals.
    if message.contains("violates foreign key constraint")
        || message.contains("invalid input syntax")
    {
        return RepoError::InvalidInput {
            message: message.to_string(),
        };
    }

    // Remaining constraint failures, e.g. the profile singleton CHECK (id = 1).
    if message.contains("violates") {
        return RepoError::Integrity {
            message: message.to_string(),
        };
    }

    if message.contains("canceling statement due to user request") {
        return RepoError::Timeout;
    }

    RepoError::from_persistence(message)
}
