//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        crate::view::post::DEFAULT_SITE_TITLE.into()
    }
}

// ============================================================================
// [data] Section Defaults
// ============================================================================

pub mod data {
    pub fn source() -> String {
        "posts.json".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    use crate::utils::{date, url};

    pub fn date_format() -> String {
        date::DEFAULT_DATE_FORMAT.into()
    }

    pub fn post_page() -> String {
        url::DEFAULT_POST_PAGE.into()
    }
}
