use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open pages and shell visibility, shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page named by `?active=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_search(&search) {
            let title = crate::layout::tabs::tab_title_for_key(&active_key);
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            insert_tab(tabs, key, title);
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let active = self.active.get_untracked();
        let mut next_active = None;
        self.opened
            .update(|tabs| next_active = remove_tab(tabs, active.as_deref(), key));
        if let Some(next) = next_active {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Append the tab unless its key is already open; true when added
fn insert_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Drop the tab `key`.
///
/// When it was the active one, returns the tab to activate next: the last
/// one still open, or `None` when nothing is left.
fn remove_tab(tabs: &mut Vec<Tab>, active: Option<&str>, key: &str) -> Option<Option<String>> {
    tabs.retain(|tab| tab.key != key);
    (active == Some(key)).then(|| tabs.last().map(|t| t.key.clone()))
}

/// Page key carried by a `?active=...` query string
fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_key_round_trip() {
        let query = active_query("a005_order");
        assert_eq!(query, "?active=a005_order");
        assert_eq!(active_from_search(&query).as_deref(), Some("a005_order"));
    }

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.to_string(),
            title: key.to_uppercase(),
        }
    }

    #[test]
    fn test_insert_tab_keeps_keys_unique() {
        let mut tabs = vec![tab("a005_order")];
        assert!(!insert_tab(&mut tabs, "a005_order", "otra"));
        assert!(insert_tab(&mut tabs, "a003_color", "Colores"));
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "A005_ORDER");
    }

    #[test]
    fn test_closing_active_tab_falls_back_to_last_open() {
        let mut tabs = vec![tab("a001_material_type"), tab("a003_color"), tab("a005_order")];
        assert_eq!(
            remove_tab(&mut tabs, Some("a003_color"), "a003_color"),
            Some(Some("a005_order".to_string()))
        );
        assert_eq!(remove_tab(&mut tabs, Some("a005_order"), "a001_material_type"), None);
        assert_eq!(remove_tab(&mut tabs, Some("a005_order"), "a005_order"), Some(None));
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_missing_active_key() {
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?other=1"), None);
        assert_eq!(active_from_search("?active="), None);
    }
}
