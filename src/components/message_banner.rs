//! Message Banner Component

use leptos::prelude::*;

use fileblock_core::Message;

/// Success/error notice; renders nothing for `Message::None`
#[component]
pub fn MessageBanner(#[prop(into)] message: Signal<Message>) -> impl IntoView {
    move || {
        let message = message.get();
        let class = if message.is_error() { "message error" } else { "message success" };
        message
            .text()
            .map(|text| view! { <p class=class>{text.to_string()}</p> })
    }
}
