use contracts::enums::Sector;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::dashboards::ServiceDeskDashboard;
use crate::domain::service_order::ui::ServiceOrderListPage;
use crate::shared::page_frame::{PageFrame, PlaceholderPage};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::sector::use_sector;

/// Content routes. Must be rendered inside `<Router>`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=ServiceDeskDashboard />
            <Route path=path!("/ordens") view=ServiceOrderListPage />
            <Route path=path!("/funcionarios") view=EmployeesPage />
            <Route path=path!("/situacoes") view=SituationsPage />
            <Route path=path!("/local-equipamento") view=EquipmentLocationPage />
            <Route path=path!("/configuracoes") view=SettingsPage />
        </Routes>
    }
}

#[component]
fn EmployeesPage() -> impl IntoView {
    view! {
        <PlaceholderPage
            page_id="employees--placeholder"
            title="Funcionários"
            text="Cadastro de funcionários em breve."
        />
    }
}

#[component]
fn SituationsPage() -> impl IntoView {
    view! {
        <PlaceholderPage
            page_id="situations--placeholder"
            title="Situações"
            text="Configuração de situações em breve."
        />
    }
}

/// Reachable by URL in any sector, but only meaningful for informatica.
#[component]
fn EquipmentLocationPage() -> impl IntoView {
    let sector = use_sector();

    view! {
        <Show
            when=move || sector.get_sector() == Sector::Informatica
            fallback=|| view! {
                <PlaceholderPage
                    page_id="equipment_location--placeholder"
                    title="Local Equipamento"
                    text="Disponível apenas no setor Informática."
                />
            }
        >
            <PlaceholderPage
                page_id="equipment_location--placeholder"
                title="Local Equipamento"
                text="Localização de equipamentos em breve."
            />
        </Show>
    }
}

#[component]
fn SettingsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM title="Configurações">
            <p class="placeholder-text">"Configurações do sistema em breve."</p>
        </PageFrame>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PlaceholderPage page_id="not_found--placeholder" title="Página não encontrada" text="O endereço acessado não existe." />
    }
}
