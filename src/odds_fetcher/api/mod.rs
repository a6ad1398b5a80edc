pub mod urls;
pub mod http_client;
mod odds;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export core API functions
pub use odds::*;
pub use fetch_utils::parse_json_body;
