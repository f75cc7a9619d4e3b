use crate::domain::a001_material_type::api as material_type_api;
use crate::domain::a002_material_reference::api as reference_api;
use crate::domain::a003_color::api;
use crate::shared::form_utils::{parse_select_id, select_value};
use crate::shared::icons::icon;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeId};
use contracts::domain::a002_material_reference::aggregate::{MaterialReference, MaterialReferenceId};
use contracts::domain::a003_color::aggregate::{Color, ColorDto, ColorId};
use contracts::shared::action_status::ActionStatus;
use leptos::prelude::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Colors are managed per reference: pick a type, then a reference.
#[component]
#[allow(non_snake_case)]
pub fn ColorList() -> impl IntoView {
    let (types, set_types) = signal::<Vec<MaterialType>>(Vec::new());
    let (references, set_references) = signal::<Vec<MaterialReference>>(Vec::new());
    let (colors, set_colors) = signal::<Vec<Color>>(Vec::new());
    let selected_type = RwSignal::new(None::<MaterialTypeId>);
    let selected_reference = RwSignal::new(None::<MaterialReferenceId>);
    let form = RwSignal::new(ColorDto::default());
    let status = RwSignal::new(ActionStatus::default());

    let fetch_colors = move || {
        let Some(reference_id) = selected_reference.get_untracked() else {
            set_colors.set(Vec::new());
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_reference(reference_id).await {
                Ok(v) => set_colors.set(v),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar colores: {}", e))),
            }
        });
    };

    let on_type_change = move |type_id: Option<MaterialTypeId>| {
        selected_type.set(type_id);
        selected_reference.set(None);
        set_references.set(Vec::new());
        set_colors.set(Vec::new());
        let Some(type_id) = type_id else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match reference_api::fetch_by_type(type_id).await {
                Ok(v) => set_references.set(v),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar referencias: {}", e))),
            }
        });
    };

    let on_reference_change = move |reference_id: Option<MaterialReferenceId>| {
        selected_reference.set(reference_id);
        form.update(|f| f.reference_id = reference_id);
        fetch_colors();
    };

    let create = move || {
        let mut dto = form.get_untracked();
        dto.reference_id = selected_reference.get_untracked();
        dto.code = dto.code.trim().to_string();
        dto.name = dto.name.trim().to_string();
        if let Err(msg) = dto.validate() {
            status.update(|s| s.fail(msg));
            return;
        }
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::create(&dto).await {
                Ok(_) => {
                    form.set(ColorDto {
                        reference_id: dto.reference_id,
                        ..Default::default()
                    });
                    status.update(|s| s.succeed("Color creado correctamente"));
                    fetch_colors();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    let remove = move |id: ColorId| {
        if !confirm("¿Está seguro de eliminar este color?") {
            return;
        }
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    status.update(|s| s.succeed("Color eliminado"));
                    fetch_colors();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        match material_type_api::fetch_all().await {
            Ok(v) => set_types.set(v),
            Err(e) => status.update(|s| s.fail(format!("Error al cargar tipos de insumo: {}", e))),
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Colores"}</h1>
                </div>
            </div>

            {move || status.get().error.map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || status.get().success.map(|m| view! { <div class="alert alert--success">{m}</div> })}

            <div class="filters">
                <div class="form-group">
                    <label for="color_type">{"Tipo de insumo"}</label>
                    <select
                        id="color_type"
                        prop:value=move || select_value(selected_type.get())
                        on:change=move |ev| on_type_change(parse_select_id(&event_target_value(&ev)).map(MaterialTypeId))
                    >
                        <option value="">{"Seleccione un tipo"}</option>
                        {move || types.get().into_iter().map(|t| view! {
                            <option value=t.id.to_string()>{t.name}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="color_reference">{"Referencia"}</label>
                    <select
                        id="color_reference"
                        prop:value=move || select_value(selected_reference.get())
                        disabled=move || selected_type.get().is_none()
                        on:change=move |ev| on_reference_change(parse_select_id(&event_target_value(&ev)).map(MaterialReferenceId))
                    >
                        <option value="">{"Seleccione una referencia"}</option>
                        {move || references.get().into_iter().map(|r| view! {
                            <option value=r.id.to_string()>{r.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <Show when=move || selected_reference.get().is_some()>
                <div class="details-form">
                    <h3>{"Nuevo color"}</h3>
                    <div class="form-group">
                        <label for="color_code">{"Código"}</label>
                        <input
                            type="text"
                            id="color_code"
                            prop:value=move || form.get().code
                            on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="color_name">{"Nombre"}</label>
                        <input
                            type="text"
                            id="color_name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="button button--primary"
                        on:click=move |_| create()
                        disabled=move || status.get().busy
                    >
                        {icon("plus")}
                        {"Crear color"}
                    </button>
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Código"}</th>
                                <th class="table__header-cell">{"Nombre"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || colors.get().into_iter().map(|c| {
                                let id = c.id;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{c.code}</td>
                                        <td class="table__cell">{c.name}</td>
                                        <td class="table__cell">
                                            <button class="button button--danger" on:click=move |_| remove(id)>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
