pub mod api;
pub mod config;
pub mod form;
pub mod navigation;
pub mod submission;

pub use config::SubmissionConfig;
pub use submission::{SubmissionHandler, SubmitError};
