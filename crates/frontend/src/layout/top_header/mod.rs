//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, application title, sector switch, current
//! user and the sign-out action.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::sector::SectorSelect;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Recolher menu" } else { "Expandir menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Assistência Técnica"</span>
            </div>

            <div class="top-header__actions">
                <SectorSelect />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| sign_out(set_auth_state) title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
