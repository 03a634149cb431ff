use chrono::Utc;

use super::document::ContentDocument;
use super::section::{
    AboutBhutanSection, AwardItem, AwardsSection, BenefitItem, BookingProcessSection,
    CustomJourneySection, GalleryImage, GallerySection, ProcessStep, ReasonItem, Section,
    SectionBody, SmallGroupToursSection, Testimonial, TestimonialsSection, ThemeItem,
    TravelThemesSection, WhyChooseUsSection,
};

/// Build the default content document used when the store is empty.
///
/// This is the only place default content is fabricated. It runs once, at
/// bootstrap; an existing document is never re-seeded, even if an editor
/// later empties it.
pub fn default_document() -> ContentDocument {
    let now = Utc::now();
    ContentDocument {
        sections: vec![
            section("gallery", 1, gallery()),
            section("awards", 2, awards()),
            section("aboutBhutan", 3, about_bhutan()),
            section("customJourney", 4, custom_journey()),
            section("travelThemes", 5, travel_themes()),
            section("whyChooseUs", 6, why_choose_us()),
            section("testimonials", 7, testimonials()),
            section("bookingProcess", 8, booking_process()),
            section("smallGroupTours", 9, small_group_tours()),
        ],
        created_at: now,
        updated_at: now,
    }
}

fn section(id: &str, order: i32, body: SectionBody) -> Section {
    Section {
        section_id: id.to_string(),
        order,
        is_active: true,
        body,
    }
}

fn gallery() -> SectionBody {
    SectionBody::Gallery(GallerySection {
        title: Some("Moments from the Kingdom".into()),
        subtitle: Some("Scenes our travellers bring home".into()),
        images: vec![
            GalleryImage {
                url: "/images/gallery/tigers-nest.jpg".into(),
                alt: Some("Taktsang Monastery clinging to the cliff above Paro".into()),
                caption: Some("Tiger's Nest, Paro".into()),
                order: 1,
                is_active: true,
            },
            GalleryImage {
                url: "/images/gallery/punakha-dzong.jpg".into(),
                alt: Some("Punakha Dzong at the confluence of two rivers".into()),
                caption: Some("Punakha Dzong".into()),
                order: 2,
                is_active: true,
            },
            GalleryImage {
                url: "/images/gallery/dochula-pass.jpg".into(),
                alt: Some("The 108 chortens of Dochula Pass under prayer flags".into()),
                caption: Some("Dochula Pass".into()),
                order: 3,
                is_active: true,
            },
        ],
    })
}

fn awards() -> SectionBody {
    SectionBody::Awards(AwardsSection {
        title: Some("Recognised for what matters".into()),
        subtitle: None,
        items: vec![
            AwardItem {
                title: "Best Himalayan Tour Operator".into(),
                description: Some("Travel & Leisure Readers' Choice".into()),
                image: Some("/images/awards/travel-leisure.png".into()),
                year: Some("2024".into()),
                order: 1,
                is_active: true,
            },
            AwardItem {
                title: "Sustainable Tourism Award".into(),
                description: Some("Tourism Council of Bhutan".into()),
                image: Some("/images/awards/tcb.png".into()),
                year: Some("2023".into()),
                order: 2,
                is_active: true,
            },
        ],
    })
}

fn about_bhutan() -> SectionBody {
    SectionBody::AboutBhutan(AboutBhutanSection {
        title: "The Last Shangri-La".into(),
        subtitle: Some("A kingdom that measures wealth in happiness".into()),
        content: "Bhutan is the world's only carbon-negative country, a land of \
                  fortress monasteries, fluttering prayer flags and valleys that \
                  have never seen mass tourism. Travel here is by invitation of \
                  the kingdom itself."
            .into(),
        cta_text: Some("Discover Bhutan".into()),
        cta_link: Some("/about-bhutan".into()),
    })
}

fn custom_journey() -> SectionBody {
    SectionBody::CustomJourney(CustomJourneySection {
        title: "Craft your own journey".into(),
        subtitle: Some("Tell us what moves you; we build the rest".into()),
        content: None,
        cta_text: Some("Start planning".into()),
        cta_link: Some("/contact".into()),
        steps: vec![
            ProcessStep {
                title: "Share your dates and interests".into(),
                description: None,
                order: 1,
                is_active: true,
            },
            ProcessStep {
                title: "Receive a tailored itinerary".into(),
                description: None,
                order: 2,
                is_active: true,
            },
        ],
    })
}

fn travel_themes() -> SectionBody {
    SectionBody::TravelThemes(TravelThemesSection {
        title: Some("Ways to travel".into()),
        theme_title: Some("Journeys by theme".into()),
        theme_content: Some("Every traveller comes to Bhutan for a different reason.".into()),
        themes: vec![
            ThemeItem {
                title: "Cultural Tours".into(),
                description: Some("Dzongs, festivals and living Buddhism".into()),
                image: Some("/images/themes/cultural.jpg".into()),
                order: 1,
                is_active: true,
            },
            ThemeItem {
                title: "Trekking".into(),
                description: Some("From the Druk Path to the Snowman Trek".into()),
                image: Some("/images/themes/trekking.jpg".into()),
                order: 2,
                is_active: true,
            },
            ThemeItem {
                title: "Festivals".into(),
                description: Some("Masked dances at Paro and Thimphu Tshechu".into()),
                image: Some("/images/themes/festivals.jpg".into()),
                order: 3,
                is_active: true,
            },
        ],
    })
}

fn why_choose_us() -> SectionBody {
    SectionBody::WhyChooseUs(WhyChooseUsSection {
        title: Some("Why travel with us".into()),
        subtitle: None,
        reasons: vec![
            ReasonItem {
                title: "Bhutanese owned and run".into(),
                description: Some("Our guides grew up in the valleys you will walk.".into()),
                icon: Some("home".into()),
                order: 1,
                is_active: true,
            },
            ReasonItem {
                title: "Everything handled".into(),
                description: Some("Visas, permits, the Sustainable Development Fee.".into()),
                icon: Some("check".into()),
                order: 2,
                is_active: true,
            },
            ReasonItem {
                title: "Small groups only".into(),
                description: Some("Never more than twelve travellers.".into()),
                icon: Some("users".into()),
                order: 3,
                is_active: true,
            },
        ],
    })
}

fn testimonials() -> SectionBody {
    SectionBody::Testimonials(TestimonialsSection {
        title: Some("What travellers say".into()),
        subtitle: None,
        testimonials: vec![Testimonial {
            name: "Elena Marchetti".into(),
            location: Some("Milan, Italy".into()),
            content: "Ten days in Bhutan rearranged something in me. Our guide Tashi \
                      treated us like family."
                .into(),
            rating: 5,
            image: None,
            order: 1,
            is_active: true,
        }],
    })
}

fn booking_process() -> SectionBody {
    SectionBody::BookingProcess(BookingProcessSection {
        title: Some("How booking works".into()),
        subtitle: None,
        steps: vec![
            ProcessStep {
                title: "Choose a tour or request a custom one".into(),
                description: None,
                order: 1,
                is_active: true,
            },
            ProcessStep {
                title: "Confirm with a deposit".into(),
                description: Some("We arrange your visa and permits.".into()),
                order: 2,
                is_active: true,
            },
            ProcessStep {
                title: "Fly in — everything else is done".into(),
                description: None,
                order: 3,
                is_active: true,
            },
        ],
    })
}

fn small_group_tours() -> SectionBody {
    SectionBody::SmallGroupTours(SmallGroupToursSection {
        title: Some("Small group departures".into()),
        subtitle: Some("Fixed dates, shared wonder".into()),
        content: None,
        cta_text: Some("See departures".into()),
        cta_link: Some("/tours".into()),
        benefits: vec![
            BenefitItem {
                title: "Guaranteed departures".into(),
                description: None,
                order: 1,
                is_active: true,
            },
            BenefitItem {
                title: "Like-minded travellers".into(),
                description: None,
                order: 2,
                is_active: true,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME_IDS: [&str; 9] = [
        "gallery",
        "awards",
        "aboutBhutan",
        "customJourney",
        "travelThemes",
        "whyChooseUs",
        "testimonials",
        "bookingProcess",
        "smallGroupTours",
    ];

    #[test]
    fn seeds_exactly_the_default_home_sections() {
        let doc = default_document();
        let ids: Vec<&str> = doc.sections.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(ids, HOME_IDS);
    }

    #[test]
    fn all_seeded_sections_are_active_and_ordered() {
        let doc = default_document();
        for (i, section) in doc.sections.iter().enumerate() {
            assert!(section.is_active, "{} inactive", section.section_id);
            assert_eq!(section.order, i as i32 + 1);
        }
    }

    #[test]
    fn seeded_document_passes_its_own_validation() {
        let doc = default_document();
        for section in &doc.sections {
            section.body.validate().unwrap();
        }
    }

    #[test]
    fn seeded_document_survives_a_wire_roundtrip() {
        let doc = default_document();
        let value = serde_json::to_value(&doc).unwrap();
        let back: ContentDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }
}
