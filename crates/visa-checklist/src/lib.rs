pub mod checklist;
pub mod config;
pub mod error;
pub mod telemetry;

pub use checklist::{
    checklist_router, ApplicantProfile, ChecklistEngine, ChecklistService, DocumentList,
    RequirementTable, SectionKind,
};
pub use config::AppConfig;
pub use error::AppError;
