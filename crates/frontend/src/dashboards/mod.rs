pub mod service_desk;

pub use service_desk::ui::ServiceDeskDashboard;
