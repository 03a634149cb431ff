use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::tour::{Tour, TourDraft, TourError};

/// Flat CRUD for tours, keyed by slug. The full record lives in a JSONB
/// column; the slug is mirrored into its own column for the unique index.
#[derive(Clone)]
pub struct TourRepository {
    pool: PgPool,
}

/// An `ON CONFLICT (slug) DO NOTHING` insert reports a duplicate as zero
/// affected rows; nothing was written in that case.
fn insert_created(rows_affected: u64, slug: &str) -> Result<(), TourError> {
    if rows_affected == 0 {
        return Err(TourError::DuplicateSlug(slug.to_string()));
    }
    Ok(())
}

impl TourRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: TourDraft) -> RepoResult<Tour> {
        let tour = draft.into_tour()?;
        let result = sqlx::query(
            "INSERT INTO tours (id, slug, content) VALUES ($1, $2, $3) \
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(&tour.slug)
        .bind(serde_json::to_value(&tour)?)
        .execute(&self.pool)
        .await?;

        insert_created(result.rows_affected(), &tour.slug)?;
        Ok(tour)
    }

    pub async fn list(&self) -> RepoResult<Vec<Tour>> {
        let rows = sqlx::query("SELECT content FROM tours ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|row| {
                let content: Value = row.get("content");
                Ok(serde_json::from_value(content)?)
            })
            .collect()
    }

    pub async fn get(&self, slug: &str) -> RepoResult<Tour> {
        let row = sqlx::query("SELECT content FROM tours WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("tour `{slug}`")))?;
        let content: Value = row.get("content");
        Ok(serde_json::from_value(content)?)
    }

    /// Full replace. The slug in the path is the identity; a differing slug
    /// in the payload is overridden, tours are not renamed through update.
    pub async fn update(&self, slug: &str, draft: TourDraft) -> RepoResult<Tour> {
        let mut tour = draft.into_tour()?;
        tour.slug = slug.to_string();

        let result = sqlx::query("UPDATE tours SET content = $2, updated_at = now() WHERE slug = $1")
            .bind(slug)
            .bind(serde_json::to_value(&tour)?)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("tour `{slug}`")));
        }
        Ok(tour)
    }

    pub async fn delete(&self, slug: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM tours WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("tour `{slug}`")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_affected_rows_means_duplicate_slug() {
        let err = insert_created(0, "druk-path-trek").unwrap_err();
        assert_eq!(
            err.to_string(),
            "a tour with slug `druk-path-trek` already exists"
        );
    }

    #[test]
    fn one_affected_row_is_a_create() {
        insert_created(1, "druk-path-trek").unwrap();
    }
}
