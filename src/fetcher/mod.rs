pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{browser_client, fetch_page, service_client};
pub use errors::FetchError;
pub use types::PageResponse;
