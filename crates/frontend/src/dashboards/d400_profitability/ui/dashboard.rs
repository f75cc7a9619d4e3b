use crate::dashboards::d400_profitability::api;
use crate::domain::a005_order::api as order_api;
use crate::shared::config::config;
use crate::shared::form_utils::parse_select_id;
use crate::shared::icons::icon;
use contracts::dashboards::d400_profitability::statistics::profit_percent;
use contracts::dashboards::d400_profitability::{
    aggregate_statistics, suggest_price, MarginRatio, ProfitabilityResult, ProfitabilityStatistics,
};
use contracts::domain::a005_order::aggregate::{Order, OrderFilter, OrderId};
use contracts::shared::number_format::{format_money, format_percent};
use leptos::prelude::*;

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True when `margin_percent` is a valid margin under `minimum_percent`
fn below_minimum(margin_percent: f64, minimum_percent: f64) -> bool {
    match (
        MarginRatio::from_percent(margin_percent),
        MarginRatio::from_percent(minimum_percent),
    ) {
        (Ok(margin), Ok(minimum)) => margin.is_below(minimum),
        _ => false,
    }
}

fn order_line(order: &Order) -> String {
    let percent = profit_percent(order)
        .map(format_percent)
        .unwrap_or_else(|| "-".to_string());
    format!("Orden #{} ({})", order.id, percent)
}

fn result_view(result: ProfitabilityResult, flagged: bool) -> impl IntoView {
    view! {
        <div class="profitability-result">
            {flagged.then(|| view! {
                <div class="alert alert--warning">
                    {"La rentabilidad solicitada está por debajo del mínimo aceptable"}
                </div>
            })}
            <div class="details-grid">
                <div><strong>{"Costo de producción: "}</strong>{format_money(result.production_cost)}</div>
                <div><strong>{"Rentabilidad solicitada: "}</strong>{result.requested_margin.clone()}</div>
                <div><strong>{"Precio sugerido: "}</strong>{format_money(result.suggested_price)}</div>
                <div><strong>{"Margen de ganancia: "}</strong>{format_money(result.profit_margin)}</div>
            </div>
            {(!result.cost_breakdown.is_empty()).then(|| view! {
                <table class="table cost-breakdown">
                    <tbody>
                        {result.cost_breakdown.iter().map(|(concept, amount)| view! {
                            <tr><td>{concept.clone()}</td><td>{amount.clone()}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>
            })}
            <ul class="recommendations">
                {result.recommendations.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
            </ul>
        </div>
    }
}

fn statistics_view(stats: ProfitabilityStatistics) -> impl IntoView {
    view! {
        <div class="stat-cards">
            <div class="stat-card">
                <span class="stat-card__label">{"Rentabilidad promedio"}</span>
                <span class="stat-card__value">{format_percent(stats.mean_percent)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">{"Más rentable"}</span>
                <span class="stat-card__value">{order_line(&stats.most_profitable)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">{"Menos rentable"}</span>
                <span class="stat-card__value">{order_line(&stats.least_profitable)}</span>
            </div>
        </div>
        <div class="form-hint">
            {format!(
                "{} órdenes consideradas, {} sin precio de venta",
                stats.counted, stats.skipped
            )}
        </div>
    }
}

/// Margin statistics over all orders, per-order suggested price and a
/// local preview for a typed base cost.
#[component]
#[allow(non_snake_case)]
pub fn ProfitabilityDashboard() -> impl IntoView {
    let settings = config().profitability;
    let basis = settings.margin_basis;

    let orders = RwSignal::new(Vec::<Order>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let margin_input = RwSignal::new(settings.default_margin_percent.to_string());
    let minimum_input = RwSignal::new(settings.minimum_margin_percent.to_string());

    let selected_order = RwSignal::new(None::<OrderId>);
    let order_result = RwSignal::new(None::<ProfitabilityResult>);
    let (calculating, set_calculating) = signal(false);

    let base_cost_input = RwSignal::new(String::new());

    let load_orders = move || {
        set_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match order_api::fetch_filtered(&OrderFilter::default()).await {
                Ok(items) => {
                    log::debug!("profitability over {} orders", items.len());
                    orders.set(items);
                }
                Err(e) => set_error.set(Some(format!("Error al cargar órdenes: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_orders();

    let statistics = Memo::new(move |_| orders.with(|items| aggregate_statistics(items)));

    let margin_percent = move || parse_number(&margin_input.get());
    let flagged = move || match (margin_percent(), parse_number(&minimum_input.get())) {
        (Some(margin), Some(minimum)) => below_minimum(margin, minimum),
        _ => false,
    };

    let calculate_order = move |_| {
        let Some(order_id) = selected_order.get_untracked() else {
            set_error.set(Some("Seleccione una orden".to_string()));
            return;
        };
        let Some(percent) = margin_percent() else {
            set_error.set(Some("La rentabilidad debe ser numérica".to_string()));
            return;
        };
        set_error.set(None);
        set_calculating.set(true);
        order_result.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::calculate(order_id, percent).await {
                Ok(result) => order_result.set(Some(result)),
                Err(e) => {
                    log::warn!("pricing of order {} failed: {}", order_id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_calculating.set(false);
        });
    };

    let preview = move || {
        let raw = base_cost_input.get();
        if raw.trim().is_empty() {
            return None;
        }
        let outcome = parse_number(&raw)
            .zip(margin_percent())
            .ok_or_else(|| "Ingrese valores numéricos".to_string())
            .and_then(|(cost, percent)| {
                MarginRatio::from_percent(percent)
                    .and_then(|ratio| suggest_price(cost, ratio, basis))
                    .map_err(|e| e.user_message())
            });
        Some(outcome)
    };

    view! {
        <div class="content dashboard profitability-dashboard">
            <div class="header">
                <h2>{icon("percent")} {"Rentabilidad"}</h2>
                <button class="button button--secondary" on:click=move |_| load_orders()>
                    {icon("refresh")}
                    {"Actualizar"}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <section class="dashboard-section">
                <h3>{"Estadísticas"}</h3>
                <Show when=move || loading.get()>
                    <div class="placeholder">{"Cargando..."}</div>
                </Show>
                {move || match statistics.get() {
                    Some(stats) => statistics_view(stats).into_any(),
                    None => view! {
                        <p class="empty-hint">{"No hay órdenes con precio de venta"}</p>
                    }
                    .into_any(),
                }}
            </section>

            <section class="dashboard-section">
                <h3>{"Parámetros"}</h3>
                <div class="form-row">
                    <div class="form-group">
                        <label for="margin_percent">{"Rentabilidad deseada (%)"}</label>
                        <input
                            type="number"
                            id="margin_percent"
                            min="1"
                            max="100"
                            step="1"
                            prop:value=move || margin_input.get()
                            on:input=move |ev| margin_input.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="minimum_percent">{"Rentabilidad mínima (%)"}</label>
                        <input
                            type="number"
                            id="minimum_percent"
                            min="1"
                            max="100"
                            step="1"
                            prop:value=move || minimum_input.get()
                            on:input=move |ev| minimum_input.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </section>

            <section class="dashboard-section">
                <h3>{"Precio sugerido por orden"}</h3>
                <div class="form-row">
                    <select
                        on:change=move |ev| {
                            selected_order.set(parse_select_id(&event_target_value(&ev)).map(OrderId));
                            order_result.set(None);
                        }
                    >
                        <option value="">{"Seleccione una orden"}</option>
                        {move || orders.get().into_iter().map(|o| view! {
                            <option value=o.id.to_string()>
                                {format!("#{} - {}", o.id, format_money(o.total_cost))}
                            </option>
                        }).collect_view()}
                    </select>
                    <button
                        class="button button--primary"
                        disabled=move || calculating.get()
                        on:click=calculate_order
                    >
                        {icon("calculator")}
                        {move || if calculating.get() { "Calculando..." } else { "Calcular" }}
                    </button>
                </div>
                {move || order_result.get().map(|r| result_view(r, flagged()))}
            </section>

            <section class="dashboard-section">
                <h3>{"Simulación por costo base"}</h3>
                <div class="form-group">
                    <label for="base_cost">{"Costo base"}</label>
                    <input
                        type="text"
                        id="base_cost"
                        placeholder="1000"
                        prop:value=move || base_cost_input.get()
                        on:input=move |ev| base_cost_input.set(event_target_value(&ev))
                    />
                </div>
                {move || preview().map(|outcome| match outcome {
                    Ok(result) => result_view(result, flagged()).into_any(),
                    Err(message) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
                })}
            </section>
        </div>
    }
}
