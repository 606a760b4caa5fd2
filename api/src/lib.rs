//! HTTP client and wire types for the MatchMind analysis service.
//!
//! The service itself is an external collaborator: this crate only knows how
//! to package an upload into the multipart request it expects and how to read
//! the compatibility report it returns.

pub mod client;
pub mod error;
pub mod report;

pub use client::{AnalysisReceipt, ApiClient, FilePart, SubmissionParts};
pub use error::ApiError;
pub use report::AnalysisReport;
