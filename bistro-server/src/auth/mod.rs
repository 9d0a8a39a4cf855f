pub mod claims;
pub mod token;
