use chrono::Utc;
use serde_json::Value;

use super::document::ContentDocument;
use super::section::{Section, SectionBody};
use super::validate::SectionError;

/// Replace exactly one section of the document with a new field bag.
///
/// `patch` is the flat JSON object the editor submits for that section. The
/// section's `sectionId` is taken from the call, never from the patch; its
/// `order` and `isActive` envelope fields are preserved unless the patch
/// overrides them, so editing a hidden section's copy does not re-publish
/// it. Every other section is carried over untouched, so a failed or
/// succeeded update can never disturb siblings. If no section matches, a new
/// one is appended at the end of its partition, active by default.
pub fn apply_section_update(
    document: &ContentDocument,
    section_id: &str,
    patch: &Value,
) -> Result<ContentDocument, SectionError> {
    let mut fields = match patch {
        Value::Object(map) => map.clone(),
        _ => return Err(SectionError::NotAnObject),
    };

    // Envelope keys are handled here; the body decoder must not see them.
    fields.remove("sectionId");
    let explicit_order = match fields.remove("order") {
        Some(v) => Some(
            v.as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| SectionError::Field {
                    field: "order".into(),
                    message: "must be an integer".into(),
                })?,
        ),
        None => None,
    };
    let explicit_active = match fields.remove("isActive") {
        Some(v) => Some(v.as_bool().ok_or_else(|| SectionError::Field {
            field: "isActive".into(),
            message: "must be a boolean".into(),
        })?),
        None => None,
    };

    let body = SectionBody::from_fields(section_id, fields).map_err(SectionError::Shape)?;
    body.validate()?;

    let mut updated = document.clone();
    match updated
        .sections
        .iter()
        .position(|s| s.section_id == section_id)
    {
        Some(index) => {
            let existing = &updated.sections[index];
            let order = explicit_order.unwrap_or(existing.order);
            let is_active = explicit_active.unwrap_or(existing.is_active);
            updated.sections[index] = Section {
                section_id: section_id.to_string(),
                order,
                is_active,
                body,
            };
        }
        None => {
            let order = explicit_order.unwrap_or(document.partition_len(section_id) as i32 + 1);
            updated.sections.push(Section {
                section_id: section_id.to_string(),
                order,
                is_active: explicit_active.unwrap_or(true),
                body,
            });
        }
    }
    updated.updated_at = Utc::now();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::seed::default_document;
    use serde_json::json;

    #[test]
    fn siblings_are_structurally_unchanged() {
        let doc = default_document();
        let before_gallery = doc.section("gallery").unwrap().clone();

        let patch = json!({
            "items": [{"title": "New Award", "year": "2025", "order": 1}]
        });
        let updated = apply_section_update(&doc, "awards", &patch).unwrap();

        assert_eq!(updated.section("gallery").unwrap(), &before_gallery);
        for section in &doc.sections {
            if section.section_id != "awards" {
                assert_eq!(
                    updated.section(&section.section_id).unwrap(),
                    section,
                    "section {} was disturbed",
                    section.section_id
                );
            }
        }
    }

    #[test]
    fn update_replaces_the_target_bag() {
        let doc = default_document();
        let patch = json!({
            "items": [{"title": "New Award", "order": 1}]
        });
        let updated = apply_section_update(&doc, "awards", &patch).unwrap();

        let awards = updated.section("awards").unwrap();
        let SectionBody::Awards(ref body) = awards.body else {
            panic!("expected awards body");
        };
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].title, "New Award");
    }

    #[test]
    fn order_is_preserved_when_patch_omits_it() {
        let doc = default_document();
        let original_order = doc.section("testimonials").unwrap().order;
        let patch = json!({"testimonials": []});
        let updated = apply_section_update(&doc, "testimonials", &patch).unwrap();
        assert_eq!(updated.section("testimonials").unwrap().order, original_order);
    }

    #[test]
    fn patch_without_is_active_keeps_a_hidden_section_hidden() {
        let doc = default_document();
        let doc =
            apply_section_update(&doc, "gallery", &json!({"images": [], "isActive": false}))
                .unwrap();
        assert!(!doc.section("gallery").unwrap().is_active);

        // Editing the field bag alone must not re-publish the section.
        let doc = apply_section_update(
            &doc,
            "gallery",
            &json!({"images": [{"url": "/images/gallery/haa-valley.jpg", "order": 1}]}),
        )
        .unwrap();
        assert!(!doc.section("gallery").unwrap().is_active);

        let doc = apply_section_update(&doc, "gallery", &json!({"images": [], "isActive": true}))
            .unwrap();
        assert!(doc.section("gallery").unwrap().is_active);
    }

    #[test]
    fn order_beyond_i32_is_rejected() {
        let doc = default_document();
        let err =
            apply_section_update(&doc, "gallery", &json!({"images": [], "order": 1i64 << 40}))
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for `order`: must be an integer"
        );
    }

    #[test]
    fn order_can_be_explicitly_overridden() {
        let doc = default_document();
        let patch = json!({"testimonials": [], "order": 42});
        let updated = apply_section_update(&doc, "testimonials", &patch).unwrap();
        assert_eq!(updated.section("testimonials").unwrap().order, 42);
    }

    #[test]
    fn unknown_section_id_appends_at_end_of_its_partition() {
        let doc = default_document();
        let patch = json!({
            "hero": {"title": "Visas & permits"},
            "content": "All visitors require a visa."
        });
        let updated = apply_section_update(&doc, "visa-info", &patch).unwrap();

        assert_eq!(updated.sections.len(), doc.sections.len() + 1);
        let added = updated.section("visa-info").unwrap();
        // First static-page-partition member in a home-only default document.
        assert_eq!(added.order, 1);
        assert!(added.is_active);
    }

    #[test]
    fn no_duplicate_section_ids_after_repeated_updates() {
        let mut doc = default_document();
        for _ in 0..3 {
            doc = apply_section_update(&doc, "gallery", &json!({"images": []})).unwrap();
            doc = apply_section_update(&doc, "visa-info", &json!({"content": "x"})).unwrap();
        }
        let mut ids: Vec<&str> = doc.sections.iter().map(|s| s.section_id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn invalid_rating_rejects_the_whole_write() {
        let doc = default_document();
        let patch = json!({
            "testimonials": [{"name": "A", "content": "ok", "rating": 9, "order": 1}]
        });
        let err = apply_section_update(&doc, "testimonials", &patch).unwrap_err();
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn non_object_patch_is_rejected() {
        let doc = default_document();
        let err = apply_section_update(&doc, "gallery", &json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, SectionError::NotAnObject));
    }
}
