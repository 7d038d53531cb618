pub mod activities;
pub mod responses;

/// Header carrying the admin token on every request
pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";
