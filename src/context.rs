//! Application Context
//!
//! Signals and controllers provided via Leptos Context API.

use leptos::prelude::*;

use fileblock_core::{
    Coordinator, CustomList, CustomListState, FixedToggle, LoadState, Message, Snapshot,
    UploadState, UploadTest,
};

use crate::api::{HttpApi, PickedFile};

pub type UploadSignal = RwSignal<UploadState<PickedFile>, LocalStorage>;

pub type AppCoordinator = Coordinator<HttpApi, RwSignal<Snapshot>, RwSignal<LoadState>>;
pub type AppFixedToggle = FixedToggle<HttpApi, RwSignal<Snapshot>, RwSignal<Message>>;
pub type AppCustomList = CustomList<HttpApi, RwSignal<Snapshot>, RwSignal<CustomListState>>;
pub type AppUploadTest = UploadTest<HttpApi, UploadSignal>;

/// Controllers share one `Rc<HttpApi>`, so they live in local storage
#[derive(Clone)]
pub struct Controllers {
    pub coordinator: AppCoordinator,
    pub fixed: AppFixedToggle,
    pub custom: AppCustomList,
    pub upload: AppUploadTest,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub snapshot: RwSignal<Snapshot>,
    pub load_state: RwSignal<LoadState>,
    /// Notice under the fixed list
    pub fixed_message: RwSignal<Message>,
    pub custom_state: RwSignal<CustomListState>,
    /// Holds a `web_sys::File`, hence local storage
    pub upload_state: UploadSignal,
    controllers: StoredValue<Controllers, LocalStorage>,
}

impl AppContext {
    pub fn new(
        snapshot: RwSignal<Snapshot>,
        load_state: RwSignal<LoadState>,
        fixed_message: RwSignal<Message>,
        custom_state: RwSignal<CustomListState>,
        upload_state: UploadSignal,
        controllers: Controllers,
    ) -> Self {
        Self {
            snapshot,
            load_state,
            fixed_message,
            custom_state,
            upload_state,
            controllers: StoredValue::new_local(controllers),
        }
    }

    pub fn coordinator(&self) -> AppCoordinator {
        self.controllers.with_value(|c| c.coordinator.clone())
    }

    pub fn fixed(&self) -> AppFixedToggle {
        self.controllers.with_value(|c| c.fixed.clone())
    }

    pub fn custom(&self) -> AppCustomList {
        self.controllers.with_value(|c| c.custom.clone())
    }

    pub fn upload(&self) -> AppUploadTest {
        self.controllers.with_value(|c| c.upload.clone())
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
