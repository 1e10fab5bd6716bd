//! File Extension Block App
//!
//! Loads the block list once, then shows the fixed list, the custom list
//! manager and the upload test.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use fileblock_core::{resolve_visitor_id, Coordinator, CustomListState, LoadState, Message, Snapshot, UploadState};

use crate::api::HttpApi;
use crate::components::{CustomExtensionManager, FileUpload, FixedExtensionList};
use crate::config::ApiConfig;
use crate::context::{use_app_context, AppContext, Controllers};
use crate::identity::LocalVisitorStore;

#[component]
pub fn App() -> impl IntoView {
    // State
    let snapshot = RwSignal::new(Snapshot::default());
    let load_state = RwSignal::new(LoadState::Loading);
    let fixed_message = RwSignal::new(Message::None);
    let custom_state = RwSignal::new(CustomListState::default());
    let upload_state = RwSignal::new_local(UploadState::default());

    let config = ApiConfig::resolve();
    let visitor_id = resolve_visitor_id(&LocalVisitorStore);
    info!("[load] api {} as visitor {}", config.base_url(), visitor_id);

    let coordinator = Coordinator::new(Rc::new(HttpApi::new(config, visitor_id)), snapshot, load_state);
    let controllers = Controllers {
        fixed: coordinator.fixed(fixed_message),
        custom: coordinator.custom(custom_state),
        upload: coordinator.upload(upload_state),
        coordinator,
    };

    let ctx = AppContext::new(snapshot, load_state, fixed_message, custom_state, upload_state, controllers);
    provide_context(ctx);

    // Load the snapshot on mount
    Effect::new(move |_| {
        let coordinator = ctx.coordinator();
        spawn_local(async move {
            // Failure is reflected in load_state
            let _ = coordinator.load().await;
        });
    });

    view! {
        <main class="app-layout">
            <h1>"File Extension Block"</h1>
            <AppBody />
        </main>
    }
}

/// Whole-page loading / error / ready switch
#[component]
fn AppBody() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.load_state.get() {
        LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadState::Failed(text) => view! { <p class="message error">{text}</p> }.into_any(),
        LoadState::Ready => view! {
            <FixedExtensionList />
            <CustomExtensionManager />
            <hr />
            <FileUpload />
        }
        .into_any(),
    }
}
