use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::Section;

/// Section ids of the static informational pages. These form the fixed
/// partition for drag-reorder: home sections are renumbered around them,
/// never through them.
pub const STATIC_PAGE_IDS: [&str; 3] = ["about-us", "why-us", "travel-info"];

pub fn is_static_page(section_id: &str) -> bool {
    STATIC_PAGE_IDS.contains(&section_id)
}

/// The singleton site content document: every editable section of the home
/// page and the static pages, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentDocument {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    /// Number of sections in the same partition as `section_id`.
    pub fn partition_len(&self, section_id: &str) -> usize {
        let fixed = is_static_page(section_id);
        self.sections
            .iter()
            .filter(|s| is_static_page(&s.section_id) == fixed)
            .count()
    }
}
