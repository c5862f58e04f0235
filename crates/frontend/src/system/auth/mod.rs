//! Client side of the external authentication provider: token storage,
//! current-user lookup and sign-out.

pub mod api;
pub mod context;
pub mod storage;
