use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use crate::system::sector::SectorProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (sidebar collapse) for the whole app
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <SectorProvider>
                <Router>
                    <AppShell />
                </Router>
            </SectorProvider>
        </AuthProvider>
    }
}
