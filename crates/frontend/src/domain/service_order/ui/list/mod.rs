use contracts::domain::service_order::aggregate::ServiceOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::domain::service_order::api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::enums::Sector;

use crate::system::sector::use_sector;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOrderRow {
    pub id: Uuid,
    pub number: String,
    pub customer_name: String,
    pub equipment: String,
    pub situation: String,
    pub technician: String,
    pub opened_at: String,
}

impl From<ServiceOrder> for ServiceOrderRow {
    fn from(o: ServiceOrder) -> Self {
        Self {
            id: o.id,
            number: format!("#{}", o.number),
            customer_name: o.customer_name,
            equipment: o.equipment,
            situation: o.situation,
            technician: o.technician.unwrap_or_else(|| "—".to_string()),
            opened_at: format_timestamp(o.opened_at),
        }
    }
}

/// A response is applied only if no newer request was started since and the
/// sector it was fetched for is still the active one.
fn is_current_response(request_id: u64, latest_request: u64, requested: Sector, active: Sector) -> bool {
    request_id == latest_request && requested == active
}

/// Service orders of the current sector. Loads on mount and again whenever
/// the sector changes.
#[component]
pub fn ServiceOrderTable() -> impl IntoView {
    let sector = use_sector();
    let (items, set_items) = signal::<Vec<ServiceOrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let latest_request = StoredValue::new(0u64);

    let load = move || {
        let current = sector.get_sector_untracked();
        let request_id = latest_request.get_value() + 1;
        latest_request.set_value(request_id);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_service_orders(current).await;
            if !is_current_response(
                request_id,
                latest_request.get_value(),
                current,
                sector.get_sector_untracked(),
            ) {
                log::debug!("dropping stale service orders response for {}", current);
                return;
            }
            match result {
                Ok(orders) => {
                    log::debug!("loaded {} service orders for {}", orders.len(), current);
                    set_items.set(orders.into_iter().map(Into::into).collect());
                }
                Err(e) => {
                    set_items.set(Vec::new());
                    set_error.set(Some(format!("Não foi possível carregar as ordens: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        // subscribe to sector changes
        let _ = sector.get_sector();
        load();
    });

    view! {
        <div class="service-order-table">
            <div class="service-order-table__toolbar">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| load() disabled=Signal::derive(move || loading.get())>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <Show when=move || loading.get()>
                <div class="table-loading">
                    <Spinner />
                    <span>"Carregando..."</span>
                </div>
            </Show>

            <Show
                when=move || !items.with(|rows| rows.is_empty())
                fallback=move || view! {
                    <Show when=move || !loading.get() && error.with(|e| e.is_none())>
                        <div class="table-empty">"Nenhuma ordem de serviço encontrada."</div>
                    </Show>
                }
            >
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=80.0>"Nº"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Cliente"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Equipamento"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Situação"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Técnico"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Abertura"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|row| row.id
                                children=move |row: ServiceOrderRow| {
                                    view! {
                                        <TableRow>
                                            <TableCell>{row.number}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.customer_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.equipment}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{row.situation}</TableCell>
                                            <TableCell>{row.technician}</TableCell>
                                            <TableCell>{row.opened_at}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ServiceOrderListPage() -> impl IntoView {
    view! {
        <PageFrame page_id="service_orders--list" category=PAGE_CAT_LIST title="Ordens de Serviço">
            <ServiceOrderTable />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_order() {
        let order = ServiceOrder {
            id: Uuid::new_v4(),
            number: 1042,
            customer_name: "Maria Souza".into(),
            equipment: "Moto G8".into(),
            situation: "Pronto".into(),
            technician: None,
            opened_at: "2024-03-15T14:02:26Z".parse().unwrap(),
            sector: Sector::Celulares,
        };
        let row = ServiceOrderRow::from(order.clone());
        assert_eq!(row.id, order.id);
        assert_eq!(row.number, "#1042");
        assert_eq!(row.technician, "—");
        // local time, the day may shift with the host timezone
        assert!(row.opened_at.contains(".03.2024 "));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        // celulares request (1) still in flight when informatica request (2) starts
        assert!(!is_current_response(1, 2, Sector::Celulares, Sector::Informatica));
        assert!(is_current_response(2, 2, Sector::Informatica, Sector::Informatica));
    }

    #[test]
    fn test_superseded_request_same_sector_is_dropped() {
        // manual refresh twice in a row: only the last one lands
        assert!(!is_current_response(3, 4, Sector::Celulares, Sector::Celulares));
    }

    #[test]
    fn test_sector_switched_back_before_response() {
        assert!(!is_current_response(5, 5, Sector::Informatica, Sector::Celulares));
    }
}
