//! Scroll reveal: класс `is-visible` навешивается, когда элемент впервые
//! попадает во вьюпорт. Сам эффект появления описан в CSS — здесь только
//! наблюдение за видимостью через `IntersectionObserver`.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Наблюдать за элементом и один раз открыть его при появлении на экране
pub fn use_reveal(node: NodeRef<html::Div>) {
    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("is-visible");
                        // элемент открывается один раз, дальше не следим
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.15));

        if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            observer.observe(&el);
        }

        // замыкание живёт, пока жив наблюдатель
        callback.forget();
    });
}
