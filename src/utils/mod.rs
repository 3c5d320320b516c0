//! Formatting helpers shared by both page views.

pub mod date;
pub mod minify;
pub mod url;
