use thiserror::Error;

use super::document::is_static_page;
use super::section::Section;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("index {index} is out of range for {len} movable sections")]
    OutOfRange { index: usize, len: usize },
}

/// Move one section within its partition and renumber.
///
/// The input is split into a movable partition and a fixed one via `is_fixed`.
/// `from` and `to` index into the movable partition only. After the move the
/// movable sections are renumbered `1..=N` in their new sequence; fixed
/// sections are appended back with their own `order` values untouched (static
/// pages are ordered by a separate flow). The set of sections never changes.
pub fn move_section(
    sections: &[Section],
    from: usize,
    to: usize,
    is_fixed: impl Fn(&Section) -> bool,
) -> Result<Vec<Section>, ReorderError> {
    let (fixed, mut movable): (Vec<Section>, Vec<Section>) =
        sections.iter().cloned().partition(|s| is_fixed(s));

    let len = movable.len();
    if from >= len {
        return Err(ReorderError::OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::OutOfRange { index: to, len });
    }

    let moved = movable.remove(from);
    movable.insert(to, moved);
    for (i, section) in movable.iter_mut().enumerate() {
        section.order = i as i32 + 1;
    }

    movable.extend(fixed);
    Ok(movable)
}

/// Reorder within the home partition; the three static pages stay fixed.
pub fn move_home_section(
    sections: &[Section],
    from: usize,
    to: usize,
) -> Result<Vec<Section>, ReorderError> {
    move_section(sections, from, to, |s| is_static_page(&s.section_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::section::{SectionBody, StaticPageSection};
    use serde_json::json;

    fn home_section(id: &str, order: i32) -> Section {
        serde_json::from_value(json!({"sectionId": id, "order": order})).unwrap()
    }

    fn static_section(id: &str, order: i32) -> Section {
        Section {
            section_id: id.to_string(),
            order,
            is_active: true,
            body: SectionBody::StaticPage(StaticPageSection::default()),
        }
    }

    fn fixture() -> Vec<Section> {
        vec![
            home_section("gallery", 1),
            static_section("about-us", 7),
            home_section("awards", 2),
            home_section("testimonials", 3),
            static_section("why-us", 9),
            static_section("travel-info", 4),
        ]
    }

    #[test]
    fn moves_and_renumbers_within_home_partition() {
        let result = move_home_section(&fixture(), 0, 2).unwrap();

        let home: Vec<(&str, i32)> = result
            .iter()
            .filter(|s| !crate::content::document::is_static_page(&s.section_id))
            .map(|s| (s.section_id.as_str(), s.order))
            .collect();
        assert_eq!(
            home,
            vec![("awards", 1), ("testimonials", 2), ("gallery", 3)]
        );
    }

    #[test]
    fn fixed_partition_keeps_its_own_orders() {
        let result = move_home_section(&fixture(), 0, 2).unwrap();

        let fixed: Vec<(&str, i32)> = result
            .iter()
            .filter(|s| crate::content::document::is_static_page(&s.section_id))
            .map(|s| (s.section_id.as_str(), s.order))
            .collect();
        assert_eq!(
            fixed,
            vec![("about-us", 7), ("why-us", 9), ("travel-info", 4)]
        );
    }

    #[test]
    fn section_set_is_preserved() {
        let before = fixture();
        let result = move_home_section(&before, 2, 0).unwrap();
        assert_eq!(result.len(), before.len());
        for section in &before {
            assert!(result.iter().any(|s| s.section_id == section.section_id));
        }
    }

    #[test]
    fn same_index_move_renumbers_but_keeps_sequence() {
        let result = move_home_section(&fixture(), 1, 1).unwrap();
        let home: Vec<(&str, i32)> = result
            .iter()
            .filter(|s| !crate::content::document::is_static_page(&s.section_id))
            .map(|s| (s.section_id.as_str(), s.order))
            .collect();
        assert_eq!(
            home,
            vec![("gallery", 1), ("awards", 2), ("testimonials", 3)]
        );
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let err = move_home_section(&fixture(), 3, 0).unwrap_err();
        assert!(matches!(err, ReorderError::OutOfRange { index: 3, len: 3 }));

        let err = move_home_section(&fixture(), 0, 5).unwrap_err();
        assert!(matches!(err, ReorderError::OutOfRange { index: 5, len: 3 }));
    }
}
