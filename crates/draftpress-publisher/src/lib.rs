//! One-shot publish pipeline: parse a draft file, create the Notion page,
//! archive the file on success.

pub mod error;
pub mod publisher;

pub use error::PublishError;
pub use publisher::{PublishOutcome, Publisher};
