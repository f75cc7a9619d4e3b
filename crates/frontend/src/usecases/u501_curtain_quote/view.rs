use super::view_model::CurtainQuoteViewModel;
use crate::shared::form_utils::{parse_select_id, select_value};
use crate::shared::icons::icon;
use contracts::domain::a002_material_reference::aggregate::MaterialReferenceId;
use contracts::domain::a003_color::aggregate::ColorId;
use contracts::shared::number_format::{format_money, format_number_with_decimals};
use contracts::usecases::u501_curtain_quote::request::{
    MAX_DIMENSION_CM, MAX_MULTIPLIER, MIN_DIMENSION_CM, MIN_MULTIPLIER,
};
use contracts::usecases::u501_curtain_quote::{QuoteForm, QuoteSummary};
use leptos::prelude::*;

fn text_input(
    vm: &CurtainQuoteViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    read: fn(&QuoteForm) -> String,
    write: fn(&mut QuoteForm, String),
) -> impl IntoView {
    let form = vm.form;
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
        </div>
    }
}

fn summary_card(summary: QuoteSummary) -> impl IntoView {
    let dimensions = format!(
        "{} x {} cm",
        format_number_with_decimals(summary.width, 1),
        format_number_with_decimals(summary.height, 1)
    );
    view! {
        <div class="quote-summary">
            <h4>{format!("Cotización - Orden #{}", summary.order_id)}</h4>
            <dl>
                <dt>{"Diseño"}</dt><dd>{summary.design_name}</dd>
                <dt>{"Medidas"}</dt><dd>{dimensions}</dd>
                <dt>{"Multiplicador"}</dt><dd>{summary.multiplier}</dd>
                <dt>{"Partida"}</dt><dd>{if summary.split { "Sí" } else { "No" }}</dd>
                <dt>{"Cliente"}</dt><dd>{summary.client_name}</dd>
                <dt>{"Teléfono"}</dt><dd>{summary.client_phone}</dd>
                <dt>{"Email"}</dt><dd>{summary.client_email}</dd>
            </dl>
            <div class="quote-summary__total">
                {"Precio final: "}
                <strong>{format_money(summary.total_cost)}</strong>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CurtainQuoteView() -> impl IntoView {
    let vm = CurtainQuoteViewModel::new();
    vm.load_catalog();

    let vm_clone = vm.clone();

    view! {
        <div class="details-container curtain-quote">
            <div class="details-header">
                <h3>{icon("calculator")} {"Cotizar cortina"}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.status.get().error.map(|e| view! { <div class="alert alert--error">{e}</div> })
            }
            {
                let vm = vm_clone.clone();
                move || vm.status.get().success.map(|m| view! { <div class="alert alert--success">{m}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="quote_design">{"Diseño"}</label>
                    <select
                        id="quote_design"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().design_id
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.select_design(event_target_value(&ev))
                        }
                    >
                        <option value="">{"Seleccione un diseño"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.designs.get().into_iter().map(|d| view! {
                                <option value=d.id.to_string()>{format!("{} - {}", d.code, d.name)}</option>
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-row">
                    {text_input(&vm, "quote_width", "Ancho (cm)", "number", |f| f.width.clone(), |f, v| f.width = v)}
                    {text_input(&vm, "quote_height", "Alto (cm)", "number", |f| f.height.clone(), |f, v| f.height = v)}
                </div>
                <div class="form-hint">
                    {format!("Medidas entre {} y {} cm", MIN_DIMENSION_CM, MAX_DIMENSION_CM)}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="quote_multiplier">{"Multiplicador"}</label>
                        <input
                            type="number"
                            id="quote_multiplier"
                            min=MIN_MULTIPLIER.to_string()
                            max=MAX_MULTIPLIER.to_string()
                            step="1"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().multiplier
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| vm.form.update(|f| f.multiplier = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="quote_split"
                            prop:checked={
                                let vm = vm_clone.clone();
                                move || vm.form.get().split
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| vm.form.update(|f| f.split = event_target_checked(&ev))
                            }
                        />
                        <label for="quote_split">{"Cortina partida"}</label>
                    </div>
                </div>

                <h4>{"Materiales"}</h4>
                {
                    let vm = vm_clone.clone();
                    move || vm.selection.get().error.map(|e| view! { <div class="alert alert--warning">{e}</div> })
                }
                {
                    let vm = vm_clone.clone();
                    move || {
                        let state = vm.selection.get();
                        if state.design().is_none() {
                            return view! {
                                <p class="empty-hint">{"Seleccione un diseño para ver sus materiales"}</p>
                            }
                            .into_any();
                        }
                        state.slots().iter().enumerate().map(|(index, slot)| {
                            let vm_ref = vm.clone();
                            let vm_color = vm.clone();
                            let header = format!(
                                "#{} {} ({} por metro)",
                                index + 1,
                                vm.material_type_name(slot.material_type_id),
                                format_number_with_decimals(slot.quantity_per_meter, 2)
                            );
                            let references = state
                                .references_for(slot.material_type_id)
                                .map(|r| r.to_vec())
                                .unwrap_or_default();
                            let colors = slot
                                .reference_id
                                .and_then(|r| state.colors_for(r))
                                .map(|c| c.to_vec())
                                .unwrap_or_default();
                            let color_disabled = slot.reference_id.is_none();
                            view! {
                                <div class="material-slot">
                                    <span class="material-slot__header">{header}</span>
                                    <select
                                        prop:value=select_value(slot.reference_id)
                                        on:change=move |ev| {
                                            let id = parse_select_id(&event_target_value(&ev)).map(MaterialReferenceId);
                                            vm_ref.set_slot_reference(index, id);
                                        }
                                    >
                                        <option value="">{"Referencia"}</option>
                                        {references.into_iter().map(|r| view! {
                                            <option value=r.id.to_string()>{r.label()}</option>
                                        }).collect_view()}
                                    </select>
                                    <select
                                        prop:value=select_value(slot.color_id)
                                        disabled=color_disabled
                                        on:change=move |ev| {
                                            let id = parse_select_id(&event_target_value(&ev)).map(ColorId);
                                            vm_color.set_slot_color(index, id);
                                        }
                                    >
                                        <option value="">{"Color"}</option>
                                        {colors.into_iter().map(|c| view! {
                                            <option value=c.id.to_string()>{c.label()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }

                <h4>{"Cliente"}</h4>
                {text_input(&vm, "quote_client", "Nombre", "text", |f| f.client_name.clone(), |f, v| f.client_name = v)}
                {text_input(&vm, "quote_phone", "Teléfono", "tel", |f| f.client_phone.clone(), |f, v| f.client_phone = v)}
                {text_input(&vm, "quote_email", "Email", "email", |f| f.client_email.clone(), |f, v| f.client_email = v)}
                <div class="form-group">
                    <label for="quote_notes">{"Notas"}</label>
                    <textarea
                        id="quote_notes"
                        rows="3"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().notes
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.notes = event_target_value(&ev))
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.is_busy()
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.submit()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_busy() { "Enviando..." } else { "Cotizar" }
                    }
                </button>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.summary.get().map(summary_card)
            }
        </div>
    }
}
