//! Custom Extension Manager Component
//!
//! Add form, `count / max` label and the custom list with inline delete
//! confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileblock_core::{Extension, MAX_CUSTOM_EXTENSIONS, MAX_EXTENSION_NAME_LEN};

use super::{DeleteConfirmButton, MessageBanner};
use crate::context::use_app_context;

#[component]
pub fn CustomExtensionManager() -> impl IntoView {
    let ctx = use_app_context();
    let submitting = move || ctx.custom_state.with(|st| st.submitting());

    let add_extension = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let custom = ctx.custom();
        spawn_local(async move {
            custom.submit().await;
        });
    };

    view! {
        <section class="custom-extensions">
            <h2>"Custom extensions"</h2>
            <form class="custom-add-form" on:submit=add_extension>
                <input
                    type="text"
                    placeholder="e.g. zip"
                    maxlength=MAX_EXTENSION_NAME_LEN.to_string()
                    prop:value=move || ctx.custom_state.with(|st| st.draft.clone())
                    prop:disabled=submitting
                    on:input=move |ev| ctx.custom().set_draft(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=submitting>
                    {move || if submitting() { "Saving..." } else { "Save" }}
                </button>
            </form>

            <p class="custom-count">
                {move || format!("{} / {}", ctx.snapshot.with(|s| s.custom_count), MAX_CUSTOM_EXTENSIONS)}
            </p>

            <Show
                when=move || ctx.snapshot.with(|s| !s.custom_extensions.is_empty())
                fallback=|| view! { <p class="custom-empty">"No custom extensions yet."</p> }
            >
                <ul class="custom-list">
                    <For
                        each=move || ctx.snapshot.with(|s| s.custom_extensions.clone())
                        key=|ext| ext.id
                        children=move |ext| view! { <CustomExtensionItem ext=ext /> }
                    />
                </ul>
            </Show>

            <MessageBanner message=Signal::derive(move || ctx.custom_state.with(|st| st.message.clone())) />
        </section>
    }
}

#[component]
fn CustomExtensionItem(ext: Extension) -> impl IntoView {
    let ctx = use_app_context();
    let id = ext.id;

    let on_confirm = Callback::new(move |_| {
        let custom = ctx.custom();
        spawn_local(async move {
            custom.remove(id).await;
        });
    });
    let on_cancel = Callback::new(move |_| ctx.custom().cancel_remove(id));

    view! {
        <li class="custom-item" title=ext.last_change().unwrap_or_default()>
            <span class="custom-name">{ext.dotted()}</span>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm on_cancel=on_cancel />
        </li>
    }
}
