use crate::domain::a004_design::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::{DESIGN_DETAIL_PREFIX, DESIGN_NEW_KEY};
use crate::shared::icons::icon;
use contracts::domain::a004_design::aggregate::{Design, DesignId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct DesignRow {
    pub id: DesignId,
    pub code: String,
    pub name: String,
    pub labor_cost: String,
    pub complexity: String,
    pub requirement_count: usize,
}

impl From<Design> for DesignRow {
    fn from(d: Design) -> Self {
        Self {
            id: d.id,
            labor_cost: format_money(d.labor_cost),
            complexity: d
                .complexity
                .map(|c| c.display_name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            requirement_count: d.requirements.len(),
            code: d.code,
            name: d.name,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DesignList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (items, set_items) = signal::<Vec<DesignRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_new = move || tabs_store.open_tab(DESIGN_NEW_KEY, "Nuevo diseño");

    let open_detail = move |row: &DesignRow| {
        let key = format!("{}{}", DESIGN_DETAIL_PREFIX, row.id);
        tabs_store.open_tab(&key, &detail_tab_label(Design::element_name(), &row.code));
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Design::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_new()>
                        {icon("plus")}
                        {"Nuevo diseño"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Código"}</th>
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Mano de obra"}</th>
                            <th class="table__header-cell">{"Complejidad"}</th>
                            <th class="table__header-cell">{"Insumos"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let for_click = row.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_detail(&for_click)>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.labor_cost}</td>
                                    <td class="table__cell">{row.complexity}</td>
                                    <td class="table__cell">{row.requirement_count}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
