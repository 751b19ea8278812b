use crate::layout::global_context::AppGlobalContext;
use leptos::html;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Коэффициент догоняющего движения кольца за точкой
const EASE: f64 = 0.15;

/// Кастомный курсор: точка следует за мышью точно, кольцо — с лагом.
/// Масштаб и подпись "VIEW" задаются CSS-модификатором из `CursorState`.
#[component]
pub fn Cursor() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let ring_ref = NodeRef::<html::Div>::new();
    let dot_ref = NodeRef::<html::Div>::new();
    let started = Rc::new(Cell::new(false));

    Effect::new(move |_| {
        let (Some(ring), Some(dot)) = (ring_ref.get(), dot_ref.get()) else {
            return;
        };
        if started.get() {
            return;
        }
        started.set(true);

        // позиция мыши и сглаженная позиция кольца, общие для
        // обработчика mousemove и кадрового цикла
        let target = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
        let eased = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

        let move_target = Rc::clone(&target);
        let on_move = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            move_target.set((event.client_x() as f64, event.client_y() as f64));
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        }
        // курсор живёт столько же, сколько приложение
        on_move.forget();

        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let schedule = Rc::clone(&frame);

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let (tx, ty) = target.get();
            let (ex, ey) = eased.get();
            let nx = ex + (tx - ex) * EASE;
            let ny = ey + (ty - ey) * EASE;
            eased.set((nx, ny));

            let _ = web_sys::HtmlElement::style(&ring)
                .set_property("transform", &format!("translate3d({nx}px, {ny}px, 0)"));
            let _ = web_sys::HtmlElement::style(&dot)
                .set_property("transform", &format!("translate3d({tx}px, {ty}px, 0)"));

            if let (Some(window), Some(callback)) = (web_sys::window(), schedule.borrow().as_ref())
            {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));

        if let (Some(window), Some(callback)) = (web_sys::window(), frame.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        };
    });

    view! {
        <div
            node_ref=ring_ref
            class=move || format!("cursor-ring cursor-ring--{}", ctx.cursor.get().code())
        >
            <span class="cursor-ring__text">"VIEW"</span>
        </div>
        <div node_ref=dot_ref class="cursor-dot"></div>
    }
}
