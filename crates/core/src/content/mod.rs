pub mod document;
pub mod merge;
pub mod reorder;
pub mod section;
pub mod seed;
pub mod validate;

pub use document::{is_static_page, ContentDocument, STATIC_PAGE_IDS};
pub use merge::apply_section_update;
pub use reorder::{move_home_section, move_section, ReorderError};
pub use section::{Section, SectionBody, SectionKind};
pub use seed::default_document;
pub use validate::SectionError;
