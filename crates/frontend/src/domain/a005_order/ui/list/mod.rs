use crate::domain::a004_design::api as design_api;
use crate::domain::a005_order::api;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::shared::date_utils::{date_input_value, format_datetime, parse_date_input};
use crate::shared::icons::icon;
use contracts::domain::a004_design::aggregate::{Design, DesignId};
use contracts::domain::a005_order::aggregate::{Order, OrderFilter, OrderId};
use contracts::enums::order_state::OrderState;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

fn design_name(designs: &HashMap<DesignId, String>, id: DesignId) -> String {
    designs
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Diseño #{}", id))
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Order>>(Vec::new());
    let (designs, set_designs) = signal::<HashMap<DesignId, String>>(HashMap::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(OrderFilter::default());
    let updating = RwSignal::new(HashSet::<OrderId>::new());
    let selected = RwSignal::new(None::<Order>);

    let fetch = move || {
        let current = filter.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_filtered(&current).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Error al cargar órdenes: {}", e))),
            }
        });
    };

    let clear_filters = move || {
        filter.set(OrderFilter::default());
        fetch();
    };

    let change_state = move |order: Order, next: OrderState| {
        if order.state == next {
            return;
        }
        updating.update(|u| {
            u.insert(order.id);
        });
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::update_state(&order, next).await;
            updating.update(|u| {
                u.remove(&order.id);
            });
            match result {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(format!("Error al actualizar estado: {}", e))),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match design_api::fetch_all().await {
            Ok(list) => set_designs.set(
                list.into_iter()
                    .map(|d: Design| (d.id, d.name))
                    .collect(),
            ),
            Err(e) => log::warn!("design names unavailable: {}", e),
        }
    });
    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Órdenes"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filters">
                <div class="form-group">
                    <label for="order_state">{"Estado"}</label>
                    <select
                        id="order_state"
                        prop:value=move || filter.get().state.map(|s| s.code()).unwrap_or_default()
                        on:change=move |ev| {
                            let state = OrderState::from_code(&event_target_value(&ev));
                            filter.update(|f| f.state = state);
                        }
                    >
                        <option value="">{"Todos"}</option>
                        {OrderState::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="order_from">{"Desde"}</label>
                    <input
                        type="date"
                        id="order_from"
                        prop:value=move || date_input_value(filter.get().date_start)
                        on:change=move |ev| {
                            let date = parse_date_input(&event_target_value(&ev));
                            filter.update(|f| f.date_start = date);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="order_to">{"Hasta"}</label>
                    <input
                        type="date"
                        id="order_to"
                        prop:value=move || date_input_value(filter.get().date_end)
                        on:change=move |ev| {
                            let date = parse_date_input(&event_target_value(&ev));
                            filter.update(|f| f.date_end = date);
                        }
                    />
                </div>
                <button class="button button--primary" on:click=move |_| fetch()>{"Filtrar"}</button>
                <button
                    class="button button--secondary"
                    on:click=move |_| clear_filters()
                    disabled=move || filter.get().is_empty()
                >
                    {"Limpiar"}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"#"}</th>
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Diseño"}</th>
                            <th class="table__header-cell">{"Dimensiones"}</th>
                            <th class="table__header-cell">{"Costo total"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Creada"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let names = designs.get();
                            items.get().into_iter().map(|order| {
                                let id = order.id;
                                let for_state = order.clone();
                                let for_details = order.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{order.id.to_string()}</td>
                                        <td class="table__cell">{order.client_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{design_name(&names, order.design_id)}</td>
                                        <td class="table__cell">{format!("{} × {} cm", order.width, order.height)}</td>
                                        <td class="table__cell">{format_money(order.total_cost)}</td>
                                        <td class="table__cell">
                                            <select
                                                class=order.state.badge_class()
                                                prop:value=order.state.code()
                                                disabled=move || updating.get().contains(&id)
                                                on:change=move |ev| {
                                                    if let Some(next) = OrderState::from_code(&event_target_value(&ev)) {
                                                        change_state(for_state.clone(), next);
                                                    }
                                                }
                                            >
                                                {OrderState::all().into_iter().map(|s| view! {
                                                    <option value=s.code()>{s.display_name()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td class="table__cell">{format_datetime(&order.created_at)}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| selected.set(Some(for_details.clone()))
                                            >
                                                {"Detalles"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || selected.get().map(|order| {
                let name = design_name(&designs.get_untracked(), order.design_id);
                view! {
                    <OrderDetails
                        order=order
                        design_name=name
                        on_close=Callback::new(move |_| selected.set(None))
                    />
                }
            })}
        </div>
    }
}
