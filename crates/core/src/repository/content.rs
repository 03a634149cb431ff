use std::collections::HashSet;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use sqlx::{PgPool, Row};

use super::{RepoError, RepoResult};
use crate::content::merge::apply_section_update;
use crate::content::reorder::move_home_section;
use crate::content::seed::default_document;
use crate::content::validate::SectionError;
use crate::content::{ContentDocument, Section};

/// The content document together with its optimistic-concurrency token.
/// Clients echo `version` back as `baseVersion` on every write.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContent {
    pub version: i64,
    pub document: ContentDocument,
}

/// Repository for the singleton content document. All writes are guarded by
/// a version precondition; a stale base version fails with a conflict and
/// leaves the store untouched.
#[derive(Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

/// The version precondition applied to every content write. The SQL
/// `WHERE version = $n` guard in `save` is the authority under races; this
/// check gives the accurate current version in the error.
fn ensure_version(current: i64, given: i64) -> Result<(), RepoError> {
    if current != given {
        return Err(RepoError::Conflict { current, given });
    }
    Ok(())
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self) -> RepoResult<Option<StoredContent>> {
        let row = sqlx::query("SELECT version, content FROM site_content WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| {
            let version: i64 = row.get("version");
            let content: Value = row.get("content");
            let document = serde_json::from_value(content)?;
            Ok(StoredContent { version, document })
        })
        .transpose()
    }

    /// Return the document, seeding the defaults if the store is empty.
    /// Seeding happens at most once; an insert race with another process is
    /// resolved by `ON CONFLICT DO NOTHING` plus a re-read.
    pub async fn get_or_seed(&self) -> RepoResult<StoredContent> {
        if let Some(stored) = self.fetch().await? {
            return Ok(stored);
        }

        let document = default_document();
        sqlx::query(
            "INSERT INTO site_content (id, version, content, created_at, updated_at) \
             VALUES (1, 1, $1, $2, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(serde_json::to_value(&document)?)
        .bind(document.created_at)
        .execute(&self.pool)
        .await?;
        tracing::info!("seeded default content document");

        self.fetch()
            .await?
            .ok_or_else(|| RepoError::NotFound("content document".into()))
    }

    /// Replace the whole section list. Duplicate section ids are rejected
    /// before anything touches the store.
    pub async fn replace(
        &self,
        sections: Vec<Section>,
        base_version: i64,
    ) -> RepoResult<StoredContent> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.section_id.as_str()) {
                return Err(SectionError::Field {
                    field: "sections".into(),
                    message: format!("duplicate sectionId `{}`", section.section_id),
                }
                .into());
            }
        }

        let current = self.get_or_seed().await?;
        ensure_version(current.version, base_version)?;
        let mut document = current.document;
        document.sections = sections;
        document.updated_at = Utc::now();
        self.save(&document, base_version).await
    }

    /// Merge a single section's field bag into the document.
    pub async fn update_section(
        &self,
        section_id: &str,
        patch: &Value,
        base_version: i64,
    ) -> RepoResult<StoredContent> {
        let current = self.get_or_seed().await?;
        ensure_version(current.version, base_version)?;
        let updated = apply_section_update(&current.document, section_id, patch)?;
        self.save(&updated, base_version).await
    }

    /// Move a home section from one position to another and renumber.
    pub async fn reorder(
        &self,
        from: usize,
        to: usize,
        base_version: i64,
    ) -> RepoResult<StoredContent> {
        let current = self.get_or_seed().await?;
        ensure_version(current.version, base_version)?;
        let mut document = current.document;
        document.sections = move_home_section(&document.sections, from, to)?;
        document.updated_at = Utc::now();
        self.save(&document, base_version).await
    }

    async fn save(
        &self,
        document: &ContentDocument,
        base_version: i64,
    ) -> RepoResult<StoredContent> {
        let result = sqlx::query(
            "UPDATE site_content SET version = version + 1, content = $1, updated_at = now() \
             WHERE id = 1 AND version = $2",
        )
        .bind(serde_json::to_value(document)?)
        .bind(base_version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            let current = self.fetch().await?.map(|s| s.version).unwrap_or(0);
            return Err(RepoError::Conflict {
                current,
                given: base_version,
            });
        }

        Ok(StoredContent {
            version: base_version + 1,
            document: document.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_base_version_is_a_conflict() {
        let err = ensure_version(7, 5).unwrap_err();
        let RepoError::Conflict { current, given } = err else {
            panic!("expected Conflict");
        };
        assert_eq!((current, given), (7, 5));
    }

    #[test]
    fn matching_base_version_passes() {
        ensure_version(3, 3).unwrap();
    }
}
