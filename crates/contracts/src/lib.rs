//! Shared DTOs between the dashboard frontend and the service-desk API.

pub mod domain;
pub mod enums;
pub mod system;
