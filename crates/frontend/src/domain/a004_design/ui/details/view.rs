use super::view_model::DesignDetailsViewModel;
use crate::shared::form_utils::{parse_select_id, select_value};
use crate::shared::icons::icon;
use contracts::domain::a001_material_type::aggregate::MaterialTypeId;
use contracts::domain::a004_design::aggregate::{Complexity, DesignId};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn DesignDetails(
    id: Option<DesignId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DesignDetailsViewModel::new();
    vm.load_material_types();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container design-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar diseño" } else { "Nuevo diseño" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="design_code">{"Código"}</label>
                    <input
                        type="text"
                        id="design_code"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().code
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        }
                        placeholder="CORTINA-001"
                    />
                </div>

                <div class="form-group">
                    <label for="design_name">{"Nombre"}</label>
                    <input
                        type="text"
                        id="design_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="design_description">{"Descripción"}</label>
                    <textarea
                        id="design_description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description.unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label for="design_labor">{"Costo de mano de obra"}</label>
                    <input
                        type="number"
                        id="design_labor"
                        min="0"
                        step="100"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().labor_cost.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let cost = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                                vm.form.update(|f| f.labor_cost = cost);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="design_complexity">{"Complejidad"}</label>
                    <select
                        id="design_complexity"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().complexity.code()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_complexity(&event_target_value(&ev))
                        }
                    >
                        {Complexity::all().into_iter().map(|c| view! {
                            <option value=c.code()>{c.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <h4>{"Insumos requeridos"}</h4>
                {
                    let vm = vm_clone.clone();
                    move || {
                        let types = vm.material_types.get();
                        vm.form.get().requirements.into_iter().enumerate().map(|(index, row)| {
                            let vm_type = vm.clone();
                            let vm_qty = vm.clone();
                            let vm_desc = vm.clone();
                            let vm_remove = vm.clone();
                            let selected = select_value(row.material_type_id);
                            view! {
                                <div class="requirement-row">
                                    <span class="requirement-row__index">{format!("#{}", index + 1)}</span>
                                    <select
                                        prop:value=selected
                                        on:change=move |ev| {
                                            let id = parse_select_id(&event_target_value(&ev)).map(MaterialTypeId);
                                            vm_type.set_requirement_type(index, id);
                                        }
                                    >
                                        <option value="">{"Tipo de insumo"}</option>
                                        {types.iter().map(|t| view! {
                                            <option value=t.id.to_string()>{t.name.clone()}</option>
                                        }).collect_view()}
                                    </select>
                                    <input
                                        type="number"
                                        min="0"
                                        step="0.1"
                                        title="Cantidad por metro"
                                        prop:value=row.quantity_per_meter.to_string()
                                        on:change=move |ev| vm_qty.set_requirement_quantity(index, &event_target_value(&ev))
                                    />
                                    <input
                                        type="text"
                                        placeholder="Descripción (opcional)"
                                        prop:value=row.description.clone().unwrap_or_default()
                                        on:change=move |ev| vm_desc.set_requirement_description(index, event_target_value(&ev))
                                    />
                                    <button
                                        class="button button--danger"
                                        title="Quitar insumo"
                                        on:click=move |_| vm_remove.remove_requirement(index)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    }
                }
                <button
                    class="button button--secondary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.add_requirement()
                    }
                >
                    {icon("plus")}
                    {"Agregar insumo"}
                </button>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Guardar" } else { "Crear" }
                    }
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
