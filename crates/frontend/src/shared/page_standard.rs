//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"service_orders--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records
pub const PAGE_CAT_LIST: &str = "list";

/// Dashboard with tabs
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Page announced in navigation but not built yet
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

/// Settings / system administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";
