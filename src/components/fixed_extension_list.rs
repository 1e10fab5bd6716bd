//! Fixed Extension List Component
//!
//! One checkbox per fixed extension. Toggles apply immediately and roll
//! back if the server rejects them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileblock_core::Extension;

use super::MessageBanner;
use crate::context::use_app_context;

#[component]
pub fn FixedExtensionList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="fixed-extensions">
            <h2>"Fixed extensions"</h2>
            <div class="fixed-list">
                <For
                    each=move || ctx.snapshot.with(|s| s.fixed_extensions.clone())
                    key=|ext| ext.id
                    children=move |ext| view! { <FixedExtensionItem ext=ext /> }
                />
            </div>
            <MessageBanner message=ctx.fixed_message />
        </section>
    }
}

#[component]
fn FixedExtensionItem(ext: Extension) -> impl IntoView {
    let ctx = use_app_context();
    let name = ext.name.clone();
    let checked_name = name.clone();

    view! {
        <label class="fixed-item" title=ext.last_change().unwrap_or_default()>
            <input
                type="checkbox"
                prop:checked=move || ctx.snapshot.with(|s| s.fixed_checked(&checked_name).unwrap_or(false))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let name = name.clone();
                    let fixed = ctx.fixed();
                    spawn_local(async move {
                        fixed.set_checked(&name, checked).await;
                    });
                }
            />
            <span>{ext.name.clone()}</span>
        </label>
    }
}
