//! File Upload Component
//!
//! Picks one file, previews whether its extension is currently blocked and
//! posts it to the upload test endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use fileblock_core::{extension_of, UploadPhase};

use super::MessageBanner;
use crate::api::PickedFile;
use crate::context::use_app_context;

#[component]
pub fn FileUpload() -> impl IntoView {
    let ctx = use_app_context();

    // Rebuild the file input only when an upload completes
    let picker_generation = Memo::new(move |_| ctx.upload_state.with(|st| st.picker_generation));
    let submitting = move || ctx.upload_state.with(|st| st.phase == UploadPhase::Submitting);
    let selected_name = move || ctx.upload_state.with(|st| st.selected_name());

    let on_pick = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0)).map(PickedFile);
        ctx.upload().select(file);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let upload = ctx.upload();
        spawn_local(async move {
            upload.submit().await;
        });
    };

    view! {
        <section class="upload-test">
            <h2>"Upload test"</h2>
            <form class="upload-form" on:submit=on_submit>
                {move || {
                    let _ = picker_generation.get();
                    view! { <input type="file" prop:disabled=submitting on:change=on_pick /> }
                }}
                <button type="submit" prop:disabled=submitting>
                    {move || if submitting() { "Uploading..." } else { "Upload test" }}
                </button>
            </form>

            {move || selected_name().map(|name| view! { <UploadPreview name=name /> })}

            <MessageBanner message=Signal::derive(move || ctx.upload_state.with(|st| st.message.clone())) />
        </section>
    }
}

/// Client-side guess at the server's verdict
#[component]
fn UploadPreview(name: String) -> impl IntoView {
    let ctx = use_app_context();

    let verdict = match extension_of(&name) {
        None => view! { <span class="preview-none">"no extension"</span> }.into_any(),
        Some(ext) => {
            let label = format!(".{}", ext);
            let blocked = Memo::new(move |_| ctx.snapshot.with(|s| s.is_blocked(&ext)));
            view! {
                <span class="preview-ext">{label}</span>
                <span class=move || if blocked.get() { "preview-blocked" } else { "preview-allowed" }>
                    {move || if blocked.get() { "blocked" } else { "allowed" }}
                </span>
            }
            .into_any()
        }
    };

    view! {
        <p class="upload-preview">
            <span class="preview-name">{name}</span>
            {verdict}
        </p>
    }
}
