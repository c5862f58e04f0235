pub mod auth;
pub mod sector;
