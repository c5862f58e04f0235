use contracts::enums::Sector;
use leptos::prelude::*;

use super::context::use_sector;

/// Segmented switch between the sectors, placed in the top header.
#[component]
pub fn SectorSelect() -> impl IntoView {
    let ctx = use_sector();

    view! {
        <div class="sector-select" role="radiogroup" aria-label="Setor">
            {Sector::all().into_iter().map(|sector| {
                let is_active = move || ctx.get_sector() == sector;
                view! {
                    <button
                        class="sector-select__item"
                        class:sector-select__item--active=is_active
                        role="radio"
                        aria-checked=move || is_active().to_string()
                        on:click=move |_| {
                            if ctx.get_sector_untracked() != sector {
                                ctx.set_sector(sector);
                            }
                        }
                    >
                        {sector.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
