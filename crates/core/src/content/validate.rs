use thiserror::Error;

use super::section::SectionBody;

/// Errors raised while decoding or validating a section patch.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section patch must be a JSON object")]
    NotAnObject,

    #[error("invalid section shape: {0}")]
    Shape(String),

    #[error("invalid value for `{field}`: {message}")]
    Field { field: String, message: String },
}

impl SectionError {
    fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        SectionError::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl SectionBody {
    /// Check field-level constraints the type system cannot express.
    /// The whole write is rejected on the first offending field.
    pub fn validate(&self) -> Result<(), SectionError> {
        match self {
            SectionBody::Gallery(gallery) => {
                for (i, image) in gallery.images.iter().enumerate() {
                    if image.url.trim().is_empty() {
                        return Err(SectionError::field(
                            format!("images[{i}].url"),
                            "must not be empty",
                        ));
                    }
                }
            }
            SectionBody::AboutBhutan(about) => {
                if about.title.trim().is_empty() {
                    return Err(SectionError::field("title", "must not be empty"));
                }
                if about.content.trim().is_empty() {
                    return Err(SectionError::field("content", "must not be empty"));
                }
            }
            SectionBody::Testimonials(section) => {
                for (i, t) in section.testimonials.iter().enumerate() {
                    if !(1..=5).contains(&t.rating) {
                        return Err(SectionError::field(
                            format!("testimonials[{i}].rating"),
                            "must be between 1 and 5",
                        ));
                    }
                    if t.name.trim().is_empty() {
                        return Err(SectionError::field(
                            format!("testimonials[{i}].name"),
                            "must not be empty",
                        ));
                    }
                }
            }
            SectionBody::StaticPage(page) => {
                for (i, item) in page.navigation_items.iter().enumerate() {
                    if item.label.trim().is_empty() {
                        return Err(SectionError::field(
                            format!("navigationItems[{i}].label"),
                            "must not be empty",
                        ));
                    }
                    if item.path.trim().is_empty() {
                        return Err(SectionError::field(
                            format!("navigationItems[{i}].path"),
                            "must not be empty",
                        ));
                    }
                }
                for (i, faq) in page.faqs.iter().enumerate() {
                    if faq.question.trim().is_empty() {
                        return Err(SectionError::field(
                            format!("faqs[{i}].question"),
                            "must not be empty",
                        ));
                    }
                }
            }
            // Remaining kinds carry only free-form copy and optional lists.
            SectionBody::Awards(_)
            | SectionBody::CustomJourney(_)
            | SectionBody::TravelThemes(_)
            | SectionBody::WhyChooseUs(_)
            | SectionBody::BookingProcess(_)
            | SectionBody::SmallGroupTours(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::section::{Testimonial, TestimonialsSection};

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial {
            name: "Karma Dorji".into(),
            location: Some("Thimphu".into()),
            content: "A journey we will never forget.".into(),
            rating,
            image: None,
            order: 1,
            is_active: true,
        }
    }

    #[test]
    fn rating_out_of_range_names_the_field() {
        let body = SectionBody::Testimonials(TestimonialsSection {
            title: None,
            subtitle: None,
            testimonials: vec![testimonial(5), testimonial(6)],
        });
        let err = body.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for `testimonials[1].rating`: must be between 1 and 5"
        );
    }

    #[test]
    fn rating_in_range_passes() {
        let body = SectionBody::Testimonials(TestimonialsSection {
            title: None,
            subtitle: None,
            testimonials: vec![testimonial(1), testimonial(5)],
        });
        assert!(body.validate().is_ok());
    }
}
