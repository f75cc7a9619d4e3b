//! Tab labels: the one place page titles come from.
//!
//! Aggregate pages take `list_name` / `element_name` from contracts.

use contracts::domain::a001_material_type::aggregate::MaterialType;
use contracts::domain::a002_material_reference::aggregate::MaterialReference;
use contracts::domain::a003_color::aggregate::Color;
use contracts::domain::a004_design::aggregate::Design;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;

pub const DESIGN_DETAIL_PREFIX: &str = "a004_design_detail_";
pub const DESIGN_NEW_KEY: &str = "a004_design_new";

/// Readable title for a fixed page key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_material_type" => MaterialType::list_name(),
        "a002_material_reference" => MaterialReference::list_name(),
        "a003_color" => Color::list_name(),
        "a004_design" => Design::list_name(),
        DESIGN_NEW_KEY => "Nuevo diseño",
        "a005_order" => Order::list_name(),

        "u501_curtain_quote" => "Cotizador",
        "d400_profitability" => "Rentabilidad",

        _ => "",
    }
}

/// Title for any page key, detail pages included
pub fn tab_title_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(DESIGN_DETAIL_PREFIX) {
        return detail_tab_label(Design::element_name(), id);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

/// Detail tab title: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(tab_title_for_key("u501_curtain_quote"), "Cotizador");
        assert_eq!(tab_title_for_key("a004_design_detail_7"), "Diseño · 7");
        assert_eq!(tab_title_for_key("zzz"), "zzz");
    }
}
