use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A single section of the site content document.
///
/// On the wire a section is a flat JSON object: the `sectionId`, `order` and
/// `isActive` envelope fields sit next to the kind-specific field bag
/// (`{"sectionId": "gallery", "order": 1, "isActive": true, "images": [...]}`).
/// Internally the bag is a closed sum type keyed by the section's kind, so a
/// testimonials section can never smuggle gallery fields and rendering can
/// match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable human-readable identity, unique within the document.
    pub section_id: String,
    /// Position among sections of the same partition.
    pub order: i32,
    /// Public visibility toggle; inactive sections stay in the document.
    pub is_active: bool,
    pub body: SectionBody,
}

/// Section kinds recognized by the content model.
///
/// Every home-page section id maps to a dedicated kind; any other id is a
/// static page (`about-us`, `why-us`, `travel-info`, or whatever an editor
/// invents) and carries the static-page field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Gallery,
    Awards,
    AboutBhutan,
    CustomJourney,
    TravelThemes,
    WhyChooseUs,
    Testimonials,
    BookingProcess,
    SmallGroupTours,
    StaticPage,
}

impl SectionKind {
    pub fn of(section_id: &str) -> Self {
        match section_id {
            "gallery" => SectionKind::Gallery,
            "awards" => SectionKind::Awards,
            "aboutBhutan" => SectionKind::AboutBhutan,
            "customJourney" => SectionKind::CustomJourney,
            "travelThemes" => SectionKind::TravelThemes,
            "whyChooseUs" => SectionKind::WhyChooseUs,
            "testimonials" => SectionKind::Testimonials,
            "bookingProcess" => SectionKind::BookingProcess,
            "smallGroupTours" => SectionKind::SmallGroupTours,
            _ => SectionKind::StaticPage,
        }
    }
}

/// Kind-specific field bag. One variant per recognized kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Gallery(GallerySection),
    Awards(AwardsSection),
    AboutBhutan(AboutBhutanSection),
    CustomJourney(CustomJourneySection),
    TravelThemes(TravelThemesSection),
    WhyChooseUs(WhyChooseUsSection),
    Testimonials(TestimonialsSection),
    BookingProcess(BookingProcessSection),
    SmallGroupTours(SmallGroupToursSection),
    StaticPage(StaticPageSection),
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Gallery(_) => SectionKind::Gallery,
            SectionBody::Awards(_) => SectionKind::Awards,
            SectionBody::AboutBhutan(_) => SectionKind::AboutBhutan,
            SectionBody::CustomJourney(_) => SectionKind::CustomJourney,
            SectionBody::TravelThemes(_) => SectionKind::TravelThemes,
            SectionBody::WhyChooseUs(_) => SectionKind::WhyChooseUs,
            SectionBody::Testimonials(_) => SectionKind::Testimonials,
            SectionBody::BookingProcess(_) => SectionKind::BookingProcess,
            SectionBody::SmallGroupTours(_) => SectionKind::SmallGroupTours,
            SectionBody::StaticPage(_) => SectionKind::StaticPage,
        }
    }

    /// Decode a field bag for the kind implied by `section_id`.
    ///
    /// `fields` must not contain the `sectionId`/`order`/`isActive` envelope
    /// keys; unknown keys for the kind are rejected.
    pub fn from_fields(section_id: &str, fields: Map<String, Value>) -> Result<Self, String> {
        let value = Value::Object(fields);
        let body = match SectionKind::of(section_id) {
            SectionKind::Gallery => {
                SectionBody::Gallery(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::Awards => {
                SectionBody::Awards(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::AboutBhutan => {
                SectionBody::AboutBhutan(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::CustomJourney => {
                SectionBody::CustomJourney(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::TravelThemes => {
                SectionBody::TravelThemes(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::WhyChooseUs => {
                SectionBody::WhyChooseUs(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::Testimonials => {
                SectionBody::Testimonials(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::BookingProcess => {
                SectionBody::BookingProcess(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::SmallGroupTours => {
                SectionBody::SmallGroupTours(serde_json::from_value(value).map_err(stringify)?)
            }
            SectionKind::StaticPage => {
                SectionBody::StaticPage(serde_json::from_value(value).map_err(stringify)?)
            }
        };
        Ok(body)
    }
}

fn stringify(err: serde_json::Error) -> String {
    err.to_string()
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = match serde_json::to_value(&self.body).map_err(S::Error::custom)? {
            Value::Object(map) => map,
            _ => return Err(S::Error::custom("section body must serialize to an object")),
        };
        map.insert("sectionId".into(), Value::String(self.section_id.clone()));
        map.insert("order".into(), Value::from(self.order));
        map.insert("isActive".into(), Value::Bool(self.is_active));
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let section_id = match map.remove("sectionId") {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(_) => return Err(D::Error::custom("sectionId must be a non-empty string")),
            None => return Err(D::Error::custom("sectionId is required")),
        };
        let order = match map.remove("order") {
            Some(v) => v
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| D::Error::custom("order must be an integer"))?,
            None => 0,
        };
        let is_active = match map.remove("isActive") {
            Some(v) => v
                .as_bool()
                .ok_or_else(|| D::Error::custom("isActive must be a boolean"))?,
            None => true,
        };
        let body = SectionBody::from_fields(&section_id, map).map_err(D::Error::custom)?;
        Ok(Section {
            section_id,
            order,
            is_active,
            body,
        })
    }
}

impl SectionBody {
    fn serialize_inner<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionBody::Gallery(b) => b.serialize(serializer),
            SectionBody::Awards(b) => b.serialize(serializer),
            SectionBody::AboutBhutan(b) => b.serialize(serializer),
            SectionBody::CustomJourney(b) => b.serialize(serializer),
            SectionBody::TravelThemes(b) => b.serialize(serializer),
            SectionBody::WhyChooseUs(b) => b.serialize(serializer),
            SectionBody::Testimonials(b) => b.serialize(serializer),
            SectionBody::BookingProcess(b) => b.serialize(serializer),
            SectionBody::SmallGroupTours(b) => b.serialize(serializer),
            SectionBody::StaticPage(b) => b.serialize(serializer),
        }
    }
}

impl Serialize for SectionBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_inner(serializer)
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GallerySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AwardsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<AwardItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AboutBhutanSection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CustomJourneySection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TravelThemesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_content: Option<String>,
    pub themes: Vec<ThemeItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WhyChooseUsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub reasons: Vec<ReasonItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TestimonialsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookingProcessSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SmallGroupToursSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    pub benefits: Vec<BenefitItem>,
}

/// Field set shared by all static informational pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StaticPageSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub navigation_items: Vec<NavigationItem>,
    pub team_members: Vec<TeamMember>,
    pub values: Vec<ValueItem>,
    pub faqs: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HeroBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GalleryImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AwardItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ReasonItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub content: String,
    /// 1 through 5 stars.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProcessStep {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BenefitItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NavigationItem {
    pub label: String,
    pub path: String,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValueItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_known_home_ids() {
        assert_eq!(SectionKind::of("gallery"), SectionKind::Gallery);
        assert_eq!(SectionKind::of("testimonials"), SectionKind::Testimonials);
        assert_eq!(SectionKind::of("aboutBhutan"), SectionKind::AboutBhutan);
    }

    #[test]
    fn kind_of_arbitrary_id_is_static_page() {
        assert_eq!(SectionKind::of("about-us"), SectionKind::StaticPage);
        assert_eq!(SectionKind::of("some-new-page"), SectionKind::StaticPage);
    }

    #[test]
    fn section_roundtrips_through_flat_json() {
        let section: Section = serde_json::from_value(json!({
            "sectionId": "gallery",
            "order": 2,
            "isActive": false,
            "title": "Moments from the kingdom",
            "images": [
                {"url": "https://img.example/punakha.jpg", "alt": "Punakha Dzong", "order": 1}
            ]
        }))
        .unwrap();

        assert_eq!(section.section_id, "gallery");
        assert_eq!(section.order, 2);
        assert!(!section.is_active);
        let SectionBody::Gallery(ref gallery) = section.body else {
            panic!("expected gallery body");
        };
        assert_eq!(gallery.images.len(), 1);
        assert!(gallery.images[0].is_active);

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["sectionId"], "gallery");
        assert_eq!(value["order"], 2);
        assert_eq!(value["isActive"], false);
        assert_eq!(value["images"][0]["url"], "https://img.example/punakha.jpg");

        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn cross_kind_fields_are_rejected() {
        // A testimonials section must not accept gallery fields.
        let err = serde_json::from_value::<Section>(json!({
            "sectionId": "testimonials",
            "images": [{"url": "https://img.example/x.jpg"}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("images"), "got: {err}");
    }

    #[test]
    fn unknown_section_id_decodes_as_static_page() {
        let section: Section = serde_json::from_value(json!({
            "sectionId": "visa-info",
            "hero": {"title": "Visas & permits"},
            "faqs": [{"question": "Do I need a visa?", "answer": "Yes.", "order": 1}]
        }))
        .unwrap();
        assert_eq!(section.order, 0);
        assert!(section.is_active);
        assert!(matches!(section.body, SectionBody::StaticPage(_)));
    }

    #[test]
    fn order_beyond_i32_is_rejected() {
        let err = serde_json::from_value::<Section>(json!({
            "sectionId": "gallery",
            "order": 1i64 << 40
        }))
        .unwrap_err();
        assert!(err.to_string().contains("order must be an integer"));
    }

    #[test]
    fn missing_section_id_is_an_error() {
        let err = serde_json::from_value::<Section>(json!({"order": 1})).unwrap_err();
        assert!(err.to_string().contains("sectionId"));
    }
}
