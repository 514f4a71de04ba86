pub mod config;
pub mod de;
pub mod error;
pub mod models;
pub mod submission;
pub mod view;

pub use config::{ApiConfig, Endpoint};
pub use error::ApiError;
pub use models::{DiyProject, DiyResult, Ingredients, ProductScanResult, ProsAndCons, ReportResult, Tier};
pub use submission::{Outcome, Ticket, TierSelection, UploadState};
