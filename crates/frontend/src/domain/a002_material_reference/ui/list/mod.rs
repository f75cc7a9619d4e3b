use crate::domain::a001_material_type::api as material_type_api;
use crate::domain::a002_material_reference::api;
use crate::shared::form_utils::{parse_select_id, select_value};
use crate::shared::icons::icon;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeId};
use contracts::domain::a002_material_reference::aggregate::{
    MaterialReference, MaterialReferenceDto, MaterialReferenceId,
};
use contracts::shared::action_status::ActionStatus;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn type_name(types: &[MaterialType], id: MaterialTypeId) -> String {
    types
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialReferenceList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<MaterialReference>>(Vec::new());
    let (types, set_types) = signal::<Vec<MaterialType>>(Vec::new());
    let type_filter = RwSignal::new(None::<MaterialTypeId>);
    let form = RwSignal::new(MaterialReferenceDto::default());
    let price_text = RwSignal::new(String::new());
    let status = RwSignal::new(ActionStatus::default());

    let fetch = move || {
        let filter = type_filter.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match filter {
                Some(type_id) => api::fetch_by_type(type_id).await,
                None => api::fetch_all().await,
            };
            match result {
                Ok(v) => set_items.set(v),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar referencias: {}", e))),
            }
        });
    };

    let fetch_types = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match material_type_api::fetch_all().await {
                Ok(v) => set_types.set(v),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar tipos de insumo: {}", e))),
            }
        });
    };

    let reset_form = move || {
        form.set(MaterialReferenceDto::default());
        price_text.set(String::new());
    };

    let edit = move |reference: MaterialReference| {
        price_text.set(reference.unit_price.to_string());
        form.set(MaterialReferenceDto::from(&reference));
    };

    let save = move || {
        let mut dto = form.get_untracked();
        match MaterialReferenceDto::PRICE_RULES.parse_number(&price_text.get_untracked(), "Precio unitario") {
            Ok(price) => dto.unit_price = price,
            Err(msg) => {
                status.update(|s| s.fail(msg));
                return;
            }
        }
        dto.code = dto.code.trim().to_string();
        dto.name = dto.name.trim().to_string();
        if let Err(msg) = dto.validate() {
            status.update(|s| s.fail(msg));
            return;
        }
        let editing = dto.is_edit_mode();
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    status.update(|s| {
                        s.succeed(if editing {
                            "Referencia actualizada correctamente"
                        } else {
                            "Referencia creada correctamente"
                        })
                    });
                    reset_form();
                    fetch();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    let remove = move |id: MaterialReferenceId| {
        if !confirm("¿Está seguro de eliminar esta referencia?") {
            return;
        }
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    status.update(|s| s.succeed("Referencia eliminada"));
                    fetch();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    fetch_types();
    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Referencias"}</h1>
                </div>
                <div class="header__actions">
                    <select
                        prop:value=move || select_value(type_filter.get())
                        on:change=move |ev| {
                            type_filter.set(parse_select_id(&event_target_value(&ev)).map(MaterialTypeId));
                            fetch();
                        }
                    >
                        <option value="">{"Todos los tipos"}</option>
                        {move || types.get().into_iter().map(|t| view! {
                            <option value=t.id.to_string()>{t.name}</option>
                        }).collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || status.get().error.map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || status.get().success.map(|m| view! { <div class="alert alert--success">{m}</div> })}

            <div class="details-form">
                <h3>{move || if form.get().is_edit_mode() { "Editar referencia" } else { "Nueva referencia" }}</h3>
                <div class="form-group">
                    <label for="ref_type">{"Tipo de insumo"}</label>
                    <select
                        id="ref_type"
                        prop:value=move || select_value(form.get().material_type_id)
                        on:change=move |ev| {
                            let id = parse_select_id(&event_target_value(&ev)).map(MaterialTypeId);
                            form.update(|f| f.material_type_id = id);
                        }
                    >
                        <option value="">{"Seleccione un tipo"}</option>
                        {move || types.get().into_iter().map(|t| view! {
                            <option value=t.id.to_string()>{t.name}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="ref_code">{"Código"}</label>
                    <input
                        type="text"
                        id="ref_code"
                        prop:value=move || form.get().code
                        on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="ref_name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="ref_name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="ref_price">{"Precio unitario"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="ref_price"
                        prop:value=move || price_text.get()
                        on:input=move |ev| price_text.set(event_target_value(&ev))
                    />
                </div>
                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| save()
                        disabled=move || status.get().busy
                    >
                        {icon("save")}
                        {move || if form.get().is_edit_mode() { "Guardar" } else { "Crear" }}
                    </button>
                    <Show when=move || form.get().is_edit_mode()>
                        <button class="button button--secondary" on:click=move |_| reset_form()>
                            {icon("cancel")}
                            {"Cancelar"}
                        </button>
                    </Show>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Código"}</th>
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Tipo"}</th>
                            <th class="table__header-cell">{"Precio unitario"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let all_types = types.get();
                            items.get().into_iter().map(|r| {
                                let id = r.id;
                                let type_label = type_name(&all_types, r.material_type_id);
                                let for_edit = r.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| edit(for_edit.clone())>
                                        <td class="table__cell">{r.code}</td>
                                        <td class="table__cell">{r.name}</td>
                                        <td class="table__cell">{type_label}</td>
                                        <td class="table__cell">{format_money(r.unit_price)}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--danger"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    remove(id);
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
