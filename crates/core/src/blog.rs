use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

/// A blog post. The rich `content` document is opaque to this layer and is
/// stored as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<Value>,
    pub featured_image: Option<String>,
    pub author: Option<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: Option<PostStatus>,
}

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("a blog post with slug `{0}` already exists")]
    DuplicateSlug(String),
}

impl BlogDraft {
    /// Validate into a post. `published_at` is decided by the caller via
    /// [`resolve_published_at`], since it depends on the stored post.
    pub fn into_post(self, published_at: Option<DateTime<Utc>>) -> Result<BlogPost, BlogError> {
        let mut missing = Vec::new();

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                missing.push("title");
                String::new()
            }
        };
        let slug = match self.slug {
            Some(s) if !s.trim().is_empty() => s,
            _ => slugify(&title),
        };
        if slug.is_empty() {
            missing.push("slug");
        }
        let content = match self.content {
            Some(c) => c,
            None => {
                missing.push("content");
                Value::Null
            }
        };
        let author = match self.author {
            Some(a) if !a.name.trim().is_empty() => a,
            _ => {
                missing.push("author.name");
                Author {
                    name: String::new(),
                }
            }
        };

        if !missing.is_empty() {
            return Err(BlogError::MissingFields(missing));
        }

        Ok(BlogPost {
            title,
            slug,
            content,
            featured_image: self.featured_image,
            author,
            tags: self.tags,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            status: self.status.unwrap_or(PostStatus::Draft),
            published_at,
        })
    }
}

/// Decide a post's `published_at` for an incoming write.
///
/// The timestamp is set exactly once, on the first transition to
/// `published`, and is never altered afterwards — not by later edits, and
/// deliberately not by an unpublish/republish cycle either. The first
/// publication date is treated as a stable editorial fact.
pub fn resolve_published_at(
    previous: Option<DateTime<Utc>>,
    status: PostStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match previous {
        Some(ts) => Some(ts),
        None if status == PostStatus::Published => Some(now),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn draft_post_has_no_publish_timestamp() {
        assert_eq!(resolve_published_at(None, PostStatus::Draft, at(100)), None);
    }

    #[test]
    fn first_publish_stamps_now() {
        assert_eq!(
            resolve_published_at(None, PostStatus::Published, at(100)),
            Some(at(100))
        );
    }

    #[test]
    fn later_updates_do_not_move_the_timestamp() {
        let first = resolve_published_at(None, PostStatus::Published, at(100));
        let second = resolve_published_at(first, PostStatus::Published, at(200));
        assert_eq!(second, Some(at(100)));
    }

    #[test]
    fn unpublish_and_republish_keeps_the_original_date() {
        let first = resolve_published_at(None, PostStatus::Published, at(100));
        let unpublished = resolve_published_at(first, PostStatus::Draft, at(200));
        let republished = resolve_published_at(unpublished, PostStatus::Published, at(300));
        assert_eq!(republished, Some(at(100)));
    }

    #[test]
    fn slug_derived_and_required_fields_enumerated() {
        let draft = BlogDraft {
            title: Some("Paro Tshechu: A First-Timer's Guide".into()),
            content: Some(json!({"blocks": []})),
            author: Some(Author {
                name: "Sonam".into(),
            }),
            ..BlogDraft::default()
        };
        let post = draft.into_post(None).unwrap();
        assert_eq!(post.slug, "paro-tshechu-a-first-timer-s-guide");
        assert_eq!(post.status, PostStatus::Draft);

        let err = BlogDraft::default().into_post(None).unwrap_err();
        let BlogError::MissingFields(missing) = err else {
            panic!("expected MissingFields");
        };
        assert_eq!(missing, vec!["title", "slug", "content", "author.name"]);
    }
}
