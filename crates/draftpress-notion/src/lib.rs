//! Notion API client for page creation.

pub mod api;
pub mod client;
pub mod error;

pub use api::CreatePageRequest;
pub use client::NotionClient;
pub use error::NotionError;
