//! Remote Store Bindings
//!
//! Where the board's cards live. The API root is baked in at build time
//! through `CORKBOARD_API`.

use corkboard_core::HttpCardStore;

const DEFAULT_API: &str = "http://localhost:4100";

pub fn api_base() -> &'static str {
    option_env!("CORKBOARD_API").unwrap_or(DEFAULT_API)
}

/// Client for the `/cards` resource
pub fn remote_store() -> HttpCardStore {
    HttpCardStore::new(api_base())
}
