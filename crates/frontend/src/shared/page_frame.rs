//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"service_orders--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`        → `page`
/// - `dashboard`   → `page page--dashboard`
/// - `placeholder` → `page page--placeholder`
/// - `system`      → `page`
#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    /// Title rendered in `page__header`
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}

/// Static page for navigation targets whose module is announced but not built.
#[component]
pub fn PlaceholderPage(page_id: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_PLACEHOLDER title=title>
            <p class="placeholder-text">{text}</p>
        </PageFrame>
    }
}

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_PLACEHOLDER => "page page--placeholder",
        PAGE_CAT_LIST | PAGE_CAT_SYSTEM => "page",
        _ => "page",
    }
}
