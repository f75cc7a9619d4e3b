//! Order details panel with its suggested pricing.

use crate::dashboards::d400_profitability::api as profitability_api;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime;
use contracts::dashboards::d400_profitability::ProfitabilityResult;
use contracts::domain::a005_order::aggregate::Order;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

#[component]
pub fn OrderDetails(order: Order, design_name: String, on_close: Callback<()>) -> impl IntoView {
    let (profitability, set_profitability) = signal(None::<ProfitabilityResult>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    let margin_percent = config().profitability.default_margin_percent;
    let order_id = order.id;
    wasm_bindgen_futures::spawn_local(async move {
        match profitability_api::calculate(order_id, margin_percent).await {
            Ok(result) => set_profitability.set(Some(result)),
            Err(e) => set_error.set(Some(format!("Error al calcular rentabilidad: {}", e))),
        }
        set_loading.set(false);
    });

    let dash = |v: Option<String>| v.filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_string());

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>{format!("Orden #{}", order.id)}</h3>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>{"Cerrar"}</button>
            </div>

            <div class="details-grid">
                <div><strong>{"Cliente: "}</strong>{dash(order.client_name.clone())}</div>
                <div><strong>{"Teléfono: "}</strong>{dash(order.client_phone.clone())}</div>
                <div><strong>{"Email: "}</strong>{dash(order.client_email.clone())}</div>
                <div><strong>{"Diseño: "}</strong>{design_name}</div>
                <div><strong>{"Dimensiones: "}</strong>{format!("{} × {} cm", order.width, order.height)}</div>
                <div><strong>{"Multiplicador: "}</strong>{order.multiplier}</div>
                <div><strong>{"Partida: "}</strong>{if order.split { "Sí" } else { "No" }}</div>
                <div><strong>{"Estado: "}</strong>{order.state.display_name()}</div>
                <div><strong>{"Costo total: "}</strong>{format_money(order.total_cost)}</div>
                <div><strong>{"Creada: "}</strong>{format_datetime(&order.created_at)}</div>
                <div><strong>{"Notas: "}</strong>{dash(order.notes.clone())}</div>
            </div>

            <h4>{format!("Rentabilidad ({}%)", margin_percent)}</h4>
            <Show when=move || loading.get()>
                <div class="placeholder">{"Calculando..."}</div>
            </Show>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || profitability.get().map(|p| view! {
                <div class="details-grid">
                    <div><strong>{"Costo de producción: "}</strong>{format_money(p.production_cost)}</div>
                    <div><strong>{"Rentabilidad solicitada: "}</strong>{p.requested_margin.clone()}</div>
                    <div><strong>{"Precio sugerido: "}</strong>{format_money(p.suggested_price)}</div>
                    <div><strong>{"Margen de ganancia: "}</strong>{format_money(p.profit_margin)}</div>
                </div>
                <ul class="recommendations">
                    {p.recommendations.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
