//! Commands Layer
//!
//! HTTP handlers that bridge the `/cards` resource to the repository, plus
//! the middleware wrapped around them.

mod card_cmd;
mod error;
mod middleware;

pub use card_cmd::*;
pub use error::ApiError;
pub use middleware::{cors, trace_requests};
