//! university-report — Presentation layer for university records.
//!
//! Renders the structured results of `university-core` as the classic text
//! reports or as a JSON snapshot. Nothing here touches aggregation logic.

pub mod json;
pub mod text;

pub use json::UniversityReport;
