use crate::shared::scroll_reveal::use_reveal;
use leptos::html;
use leptos::prelude::*;

/// Обёртка с классом `reveal`: содержимое всплывает, когда блок впервые
/// попадает во вьюпорт.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    use_reveal(node);

    view! {
        <div node_ref=node class=format!("reveal {class}")>
            {children()}
        </div>
    }
}
