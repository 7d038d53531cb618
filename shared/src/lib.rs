pub mod endpoints;
pub mod messages;
