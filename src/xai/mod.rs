mod client;
mod response;
mod search_config;

pub use client::{SearchBackend, XaiClient};
pub use search_config::{build_search_config, SearchToolConfig};
