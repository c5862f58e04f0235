pub mod service_order;
