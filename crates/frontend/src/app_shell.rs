//! Application Shell - the layout around routed pages: TopHeader, Sidebar
//! and the content zone.

use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <AppRoutes /> }.into_any()
        />
    }
}
