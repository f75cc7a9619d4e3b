use crate::domain::a001_material_type::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeDto, MaterialTypeId};
use contracts::shared::action_status::ActionStatus;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MaterialTypeRow {
    pub id: MaterialTypeId,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<MaterialType> for MaterialTypeRow {
    fn from(t: MaterialType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description.unwrap_or_else(|| "-".to_string()),
            created_at: t.created_at.as_ref().map(format_datetime).unwrap_or_default(),
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialTypeList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<MaterialTypeRow>>(Vec::new());
    let form = RwSignal::new(MaterialTypeDto::default());
    let status = RwSignal::new(ActionStatus::default());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => set_items.set(v.into_iter().map(Into::into).collect()),
                Err(e) => status.update(|s| s.fail(format!("Error al cargar tipos de insumo: {}", e))),
            }
        });
    };

    let create = move || {
        let dto = form.get_untracked().normalized();
        if let Err(msg) = dto.validate() {
            status.update(|s| s.fail(msg));
            return;
        }
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::create(&dto).await {
                Ok(created) => {
                    log::info!("material type {} created", created.id);
                    form.set(MaterialTypeDto::default());
                    status.update(|s| s.succeed("Tipo de insumo creado correctamente"));
                    fetch();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    let remove = move |id: MaterialTypeId| {
        if !confirm("¿Está seguro de eliminar este tipo de insumo?") {
            return;
        }
        status.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    status.update(|s| s.succeed("Tipo de insumo eliminado"));
                    fetch();
                }
                Err(e) => status.update(|s| s.fail(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Tipos de insumo"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || status.get().error.map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || status.get().success.map(|m| view! { <div class="alert alert--success">{m}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="mt_name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="mt_name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Ej: Tela"
                    />
                </div>
                <div class="form-group">
                    <label for="mt_description">{"Descripción"}</label>
                    <textarea
                        id="mt_description"
                        prop:value=move || form.get().description.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = if value.is_empty() { None } else { Some(value) });
                        }
                        rows="2"
                    />
                </div>
                <button
                    class="button button--primary"
                    on:click=move |_| create()
                    disabled=move || status.get().busy
                >
                    {icon("plus")}
                    {"Crear tipo de insumo"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Descripción"}</th>
                            <th class="table__header-cell">{"Creado"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id.to_string()}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.created_at}</td>
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
        </div>
    }
}
