use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slug::slugify;

/// A bookable tour. Flat record, identified by its globally unique slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Free text, e.g. "7 Days / 6 Nights".
    pub duration: String,
    pub price: f64,
    pub image_url: String,
    pub group_size: String,
    pub difficulty: String,
    pub best_time: String,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Free-text theme name, matched by slug-of-title against the content
    /// document's travel themes at render time. No referential integrity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_theme: Option<String>,
    /// Featured in the home-page hero carousel.
    #[serde(default)]
    pub is_hero: bool,
    /// Featured in tour listings.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub short: String,
    pub long: String,
}

/// An incoming tour payload before validation. Everything optional; the
/// required-field check enumerates every missing field at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub group_size: Option<String>,
    pub difficulty: Option<String>,
    pub best_time: Option<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub travel_theme: Option<String>,
    #[serde(default)]
    pub is_hero: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Error)]
pub enum TourError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("price must be a positive number")]
    InvalidPrice,

    #[error("a tour with slug `{0}` already exists")]
    DuplicateSlug(String),
}

impl TourDraft {
    /// Validate into a full tour. The slug is derived from the title when
    /// absent; a blank derived slug counts as missing.
    pub fn into_tour(self) -> Result<Tour, TourError> {
        let mut missing = Vec::new();

        fn required(
            missing: &mut Vec<&'static str>,
            name: &'static str,
            value: Option<String>,
        ) -> String {
            match value {
                Some(v) if !v.trim().is_empty() => v,
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        }

        let title = required(&mut missing, "title", self.title);
        let slug = match self.slug {
            Some(s) if !s.trim().is_empty() => s,
            _ => slugify(&title),
        };
        if slug.is_empty() {
            missing.push("slug");
        }
        let description = required(&mut missing, "description", self.description);
        let duration = required(&mut missing, "duration", self.duration);
        let image_url = required(&mut missing, "imageUrl", self.image_url);
        let group_size = required(&mut missing, "groupSize", self.group_size);
        let difficulty = required(&mut missing, "difficulty", self.difficulty);
        let best_time = required(&mut missing, "bestTime", self.best_time);
        let price = match self.price {
            Some(p) => p,
            None => {
                missing.push("price");
                0.0
            }
        };

        if !missing.is_empty() {
            return Err(TourError::MissingFields(missing));
        }
        if !(price > 0.0) {
            return Err(TourError::InvalidPrice);
        }

        Ok(Tour {
            title,
            slug,
            description,
            duration,
            price,
            image_url,
            group_size,
            difficulty,
            best_time,
            included: self.included,
            excluded: self.excluded,
            itinerary: self.itinerary,
            gallery: self.gallery,
            travel_theme: self.travel_theme,
            is_hero: self.is_hero,
            featured: self.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TourDraft {
        TourDraft {
            title: Some("Druk Path Trek".into()),
            slug: None,
            description: Some("A classic five-day trek from Paro to Thimphu.".into()),
            duration: Some("7 Days / 6 Nights".into()),
            price: Some(2890.0),
            image_url: Some("/images/tours/druk-path.jpg".into()),
            group_size: Some("4-12".into()),
            difficulty: Some("Moderate".into()),
            best_time: Some("March-May, September-November".into()),
            ..TourDraft::default()
        }
    }

    #[test]
    fn slug_is_derived_from_title() {
        let tour = full_draft().into_tour().unwrap();
        assert_eq!(tour.slug, "druk-path-trek");
    }

    #[test]
    fn explicit_slug_wins() {
        let mut draft = full_draft();
        draft.slug = Some("druk-path-classic".into());
        assert_eq!(draft.into_tour().unwrap().slug, "druk-path-classic");
    }

    #[test]
    fn every_missing_field_is_enumerated() {
        let draft = TourDraft {
            title: Some("Druk Path Trek".into()),
            price: Some(2890.0),
            ..TourDraft::default()
        };
        let err = draft.into_tour().unwrap_err();
        let TourError::MissingFields(missing) = err else {
            panic!("expected MissingFields, got {err}");
        };
        assert_eq!(
            missing,
            vec![
                "description",
                "duration",
                "imageUrl",
                "groupSize",
                "difficulty",
                "bestTime"
            ]
        );
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut draft = full_draft();
        draft.price = Some(0.0);
        assert!(matches!(draft.into_tour(), Err(TourError::InvalidPrice)));
    }
}
