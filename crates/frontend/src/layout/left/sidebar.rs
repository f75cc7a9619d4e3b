//! Sidebar: pages grouped by area, each entry opens (or focuses) its tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuEntry {
    key: &'static str,
    icon: &'static str,
}

impl MenuEntry {
    fn label(&self) -> &'static str {
        tab_label_for_key(self.key)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    entries: &'static [MenuEntry],
}

const SALES: &[MenuEntry] = &[
    MenuEntry { key: "u501_curtain_quote", icon: "calculator" },
    MenuEntry { key: "a005_order", icon: "orders" },
    MenuEntry { key: "d400_profitability", icon: "percent" },
];

const CATALOG: &[MenuEntry] = &[
    MenuEntry { key: "a004_design", icon: "ruler" },
    MenuEntry { key: "a001_material_type", icon: "layers" },
    MenuEntry { key: "a002_material_reference", icon: "tag" },
    MenuEntry { key: "a003_color", icon: "palette" },
];

fn menu_groups() -> [MenuGroup; 2] {
    [
        MenuGroup { id: "sales", label: "Ventas", icon: "orders", entries: SALES },
        MenuGroup { id: "catalog", label: "Catálogo", icon: "layers", entries: CATALOG },
    ]
}

/// Expand a collapsed group or collapse an expanded one
fn toggle_group(expanded: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = expanded.iter().position(|g| *g == id) {
        expanded.remove(pos);
    } else {
        expanded.push(id);
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded = RwSignal::new(menu_groups().iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let id = group.id;
                let is_expanded = move || expanded.with(|e| e.contains(&id));
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| expanded.update(|e| toggle_group(e, id))
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.entries.iter().map(|entry| {
                                    let key = entry.key;
                                    let label = entry.label();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(entry.icon)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
