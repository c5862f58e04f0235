use leptos::prelude::*;
use thaw::{Tab, TabList};

use crate::dashboards::service_desk::tabs::{DashboardTab, TabPanel};
use crate::domain::service_order::ui::ServiceOrderTable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Home page: tab list over service orders and the modules still to come.
/// The selected tab is local state only.
#[component]
pub fn ServiceDeskDashboard() -> impl IntoView {
    let selected_value = RwSignal::new(DashboardTab::default().code().to_string());
    let active_tab = Memo::new(move |_| {
        selected_value.with(|code| DashboardTab::from_code(code).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="service_desk--dashboard" category=PAGE_CAT_DASHBOARD title="Painel">
            <TabList selected_value=selected_value>
                {DashboardTab::all().into_iter().map(|tab| {
                    view! {
                        <Tab value=tab.code()>{tab.label()}</Tab>
                    }
                }).collect_view()}
            </TabList>

            <div class="tab-content">
                {move || match active_tab.get().panel() {
                    TabPanel::ServiceOrderTable => view! { <ServiceOrderTable /> }.into_any(),
                    TabPanel::Placeholder(text) => view! {
                        <p class="placeholder-text">{text}</p>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
