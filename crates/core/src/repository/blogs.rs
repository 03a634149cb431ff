use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::blog::{resolve_published_at, BlogDraft, BlogError, BlogPost, PostStatus};

/// CRUD for blog posts, keyed by slug. Status and the publish timestamp are
/// mirrored into columns so listings can filter without unpacking JSONB.
#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

/// An `ON CONFLICT (slug) DO NOTHING` insert reports a duplicate as zero
/// affected rows; nothing was written in that case.
fn insert_created(rows_affected: u64, slug: &str) -> Result<(), BlogError> {
    if rows_affected == 0 {
        return Err(BlogError::DuplicateSlug(slug.to_string()));
    }
    Ok(())
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: BlogDraft) -> RepoResult<BlogPost> {
        let status = draft.status.unwrap_or(PostStatus::Draft);
        let published_at = resolve_published_at(None, status, Utc::now());
        let post = draft.into_post(published_at)?;

        let result = sqlx::query(
            "INSERT INTO blog_posts (id, slug, status, published_at, content) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (slug) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(&post.slug)
        .bind(post.status.as_str())
        .bind(post.published_at)
        .bind(serde_json::to_value(&post)?)
        .execute(&self.pool)
        .await?;

        insert_created(result.rows_affected(), &post.slug)?;
        Ok(post)
    }

    pub async fn list(&self, status: Option<PostStatus>) -> RepoResult<Vec<BlogPost>> {
        let rows = sqlx::query(
            "SELECT content FROM blog_posts \
             WHERE $1::text IS NULL OR status = $1 \
             ORDER BY created_at DESC",
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| {
                let content: Value = row.get("content");
                Ok(serde_json::from_value(content)?)
            })
            .collect()
    }

    pub async fn get(&self, slug: &str) -> RepoResult<BlogPost> {
        let row = sqlx::query("SELECT content FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("blog post `{slug}`")))?;
        let content: Value = row.get("content");
        Ok(serde_json::from_value(content)?)
    }

    /// Full replace by slug. `published_at` is carried over from the stored
    /// post: set once on the first transition to published, never moved.
    pub async fn update(&self, slug: &str, draft: BlogDraft) -> RepoResult<BlogPost> {
        let row = sqlx::query("SELECT published_at FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("blog post `{slug}`")))?;
        let previous: Option<DateTime<Utc>> = row.get("published_at");

        let status = draft.status.unwrap_or(PostStatus::Draft);
        let published_at = resolve_published_at(previous, status, Utc::now());
        let mut post = draft.into_post(published_at)?;
        post.slug = slug.to_string();

        sqlx::query(
            "UPDATE blog_posts SET status = $2, published_at = $3, content = $4, \
             updated_at = now() WHERE slug = $1",
        )
        .bind(slug)
        .bind(post.status.as_str())
        .bind(post.published_at)
        .bind(serde_json::to_value(&post)?)
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn delete(&self, slug: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("blog post `{slug}`")));
        }
        Ok(())
    }
}
