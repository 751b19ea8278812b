pub mod components;
pub mod data;
pub mod date_utils;
pub mod gradient;
pub mod icons;
pub mod query;
pub mod scroll_reveal;

use leptos::prelude::*;

/// Выставить заголовок вкладки для текущей страницы
pub fn use_document_title(title: impl Into<String>) {
    let title = title.into();
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });
}
