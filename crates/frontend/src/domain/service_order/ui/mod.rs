pub mod list;

pub use list::{ServiceOrderListPage, ServiceOrderTable};
