//! university-core — Record store, aggregation engine, and facade.
//!
//! This crate owns the academic record model (students, courses, exam
//! results), the registries that assign their ids, and the statistics built
//! on top of them. Presentation lives in `university-report`.

pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod registry;
pub mod scenario;
pub mod statistics;
pub mod university;

pub use config::{load_config, load_config_from, UniversityConfig};
pub use error::{Result, UniversityError};
pub use model::{Course, CourseId, ExamResult, Person, Student, StudentId};
pub use statistics::RankedStudent;
pub use university::University;
