//! Sidebar: side menu whose entries follow the selected sector.

use super::menu::{is_route_active, visible_nav_items, NavItem};
use crate::shared::icons::icon;
use crate::system::sector::use_sector;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let sector = use_sector();
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || visible_nav_items(sector.get_sector())
                key=|item| item.id
                children=move |item: NavItem| {
                    view! { <SidebarLink item=item pathname=pathname /> }
                }
            />
        </nav>
    }
}

#[component]
fn SidebarLink(item: NavItem, #[prop(into)] pathname: Signal<String>) -> impl IntoView {
    let is_active = move || pathname.with(|p| is_route_active(p, item.path));

    view! {
        <a
            href=item.path
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            aria-current=move || is_active().then_some("page")
            title=item.label
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span class="app-sidebar__label">{item.label}</span>
            </div>
        </a>
    }
}
