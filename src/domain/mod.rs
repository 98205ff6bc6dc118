pub mod config;
pub mod document;
pub mod error;
pub mod message;
pub mod report;

pub use config::DeliveryConfig;
pub use document::{CandidateDocument, SelectionOrigin};
pub use error::AppError;
pub use message::{OutboundEmail, subject_line};
pub use report::{BatchReport, CleanupOutcome, DeliveryOutcome, DocumentReport};
