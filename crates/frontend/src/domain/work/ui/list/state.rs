use crate::shared::query::{selection_from_search, to_query_string};
use contracts::domain::project::{CategoryFilter, Selection};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Состояние списка работ: двухфасетный выбор + зеркало в строке запроса.
///
/// Сами переходы (сброс тега при смене категории) живут в
/// `contracts::domain::project::Selection`; здесь только реактивная
/// обёртка и синхронизация URL.
#[derive(Clone, Copy)]
pub struct WorkListState {
    pub selection: RwSignal<Selection>,
}

/// Начальное состояние восстанавливается из строки запроса (диплинки)
pub fn create_state() -> WorkListState {
    let initial = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| selection_from_search(&search))
        .unwrap_or_default();

    WorkListState {
        selection: RwSignal::new(initial),
    }
}

impl WorkListState {
    pub fn select_category(&self, code: &str) {
        leptos::logging::log!("🔶 work filter: category='{}'", code);
        self.selection
            .update(|s| s.select_category(CategoryFilter::from_code(code)));
        self.sync_query();
    }

    pub fn select_tag(&self, tag: Option<String>) {
        leptos::logging::log!("🔷 work filter: tag={:?}", tag);
        self.selection.update(|s| s.select_tag(tag));
        self.sync_query();
    }

    /// Переписать строку запроса без новой записи в истории
    fn sync_query(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let query = self.selection.with_untracked(to_query_string);
        let path = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/work".to_string());
        let url = format!("{path}{query}");
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
}
