pub mod auth;
pub mod carts;
pub mod menu;
pub mod serve;
pub mod testimonials;
pub mod users;

use crate::response::{ServerError, ServerResult};

/// Presence check for required string fields. Nothing beyond that is validated.
pub fn require_present(field: &str, value: &str) -> ServerResult<()> {
    if value.trim().is_empty() {
        return Err(ServerError::bad_request(&format!("{field} is required")));
    }
    Ok(())
}
