//! Tab content registry: maps `tab.key` to its view.

use super::tab_labels::{DESIGN_DETAIL_PREFIX, DESIGN_NEW_KEY};
use crate::dashboards::d400_profitability::ui::ProfitabilityDashboard;
use crate::domain::a001_material_type::ui::list::MaterialTypeList;
use crate::domain::a002_material_reference::ui::list::MaterialReferenceList;
use crate::domain::a003_color::ui::list::ColorList;
use crate::domain::a004_design::ui::details::DesignDetails;
use crate::domain::a004_design::ui::list::DesignList;
use crate::domain::a005_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_curtain_quote::CurtainQuoteView;
use contracts::domain::a004_design::aggregate::DesignId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// Render the content of the tab named `key`.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_material_type" => view! { <MaterialTypeList /> }.into_any(),
        "a002_material_reference" => view! { <MaterialReferenceList /> }.into_any(),
        "a003_color" => view! { <ColorList /> }.into_any(),
        "a004_design" => view! { <DesignList /> }.into_any(),
        k if k == DESIGN_NEW_KEY || k.starts_with(DESIGN_DETAIL_PREFIX) => {
            let id = match k.strip_prefix(DESIGN_DETAIL_PREFIX) {
                Some(raw) => match i64::from_string(raw) {
                    Ok(id) => Some(DesignId(id)),
                    Err(e) => {
                        log::warn!("bad design tab key '{}': {}", k, e);
                        return view! { <div class="placeholder">{format!("Diseño inválido: {}", raw)}</div> }
                            .into_any();
                    }
                },
                None => None,
            };
            let close: Rc<dyn Fn(())> = Rc::new(move |_| tabs_store.close_tab(&key_for_close));
            view! {
                <DesignDetails id=id on_saved=close.clone() on_cancel=close />
            }
            .into_any()
        }
        "a005_order" => view! { <OrderList /> }.into_any(),

        "u501_curtain_quote" => view! { <CurtainQuoteView /> }.into_any(),
        "d400_profitability" => view! { <ProfitabilityDashboard /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Página no disponible"}</div> }.into_any()
        }
    }
}
