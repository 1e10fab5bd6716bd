//! Root Coordinator
//!
//! Performs the one-time snapshot load and hands out the section
//! controllers wired to the same snapshot.

use std::rc::Rc;

use log::{info, warn};

use super::{CustomList, CustomListState, FixedToggle, UploadState, UploadTest};
use crate::api::ExtensionApi;
use crate::cell::StateCell;
use crate::domain::{Message, Snapshot};
use crate::error::ApiResult;

/// Whole-page load status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Request in flight; nothing else is interactive
    #[default]
    Loading,
    /// Snapshot is live
    Ready,
    /// Load failed; the page shows only this text
    Failed(String),
}

pub struct Coordinator<A, S, L> {
    api: Rc<A>,
    snapshot: S,
    load_state: L,
}

impl<A, S: Clone, L: Clone> Clone for Coordinator<A, S, L> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            snapshot: self.snapshot.clone(),
            load_state: self.load_state.clone(),
        }
    }
}

impl<A, S, L> Coordinator<A, S, L>
where
    A: ExtensionApi,
    S: StateCell<Snapshot>,
    L: StateCell<LoadState>,
{
    pub fn new(api: Rc<A>, snapshot: S, load_state: L) -> Self {
        Self { api, snapshot, load_state }
    }

    /// Fetch the snapshot and make it live
    ///
    /// On failure the previous snapshot is left untouched and the load state
    /// carries the error text; no partial data is ever applied.
    pub async fn load(&self) -> ApiResult<Snapshot> {
        self.load_state.replace(LoadState::Loading);

        match self.api.load_snapshot().await {
            Ok(snapshot) => {
                info!(
                    "[load] {} fixed, {} custom (count {})",
                    snapshot.fixed_extensions.len(),
                    snapshot.custom_extensions.len(),
                    snapshot.custom_count
                );
                self.snapshot.replace(snapshot.clone());
                self.load_state.replace(LoadState::Ready);
                Ok(snapshot)
            }
            Err(e) => {
                warn!("[load] failed: {}", e);
                self.load_state.replace(LoadState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn load_state(&self) -> &L {
        &self.load_state
    }

    /// Controller for the fixed list, reporting into `message`
    pub fn fixed<M: StateCell<Message>>(&self, message: M) -> FixedToggle<A, S, M> {
        FixedToggle::new(Rc::clone(&self.api), self.snapshot.clone(), message)
    }

    /// Controller for the custom list
    pub fn custom<C: StateCell<CustomListState>>(&self, state: C) -> CustomList<A, S, C> {
        CustomList::new(Rc::clone(&self.api), self.snapshot.clone(), state)
    }

    /// Controller for the upload test; independent of the snapshot
    pub fn upload<U: StateCell<UploadState<A::File>>>(&self, state: U) -> UploadTest<A, U> {
        UploadTest::new(Rc::clone(&self.api), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::shared;
    use crate::controller::test_support::{sample_snapshot, Call, FakeApi};
    use crate::domain::text;
    use crate::error::ApiError;

    #[tokio::test]
    async fn test_load_success_goes_live() {
        let api = Rc::new(FakeApi::with_snapshot(sample_snapshot()));
        let coordinator = Coordinator::new(api.clone(), shared(Snapshot::default()), shared(LoadState::Loading));

        let loaded = coordinator.load().await.unwrap();

        assert_eq!(loaded, sample_snapshot());
        assert_eq!(coordinator.snapshot().snapshot(), sample_snapshot());
        assert_eq!(coordinator.load_state().snapshot(), LoadState::Ready);
        assert_eq!(api.calls(), vec![Call::LoadSnapshot]);
    }

    #[tokio::test]
    async fn test_load_failure_shows_no_partial_state() {
        let api = Rc::new(FakeApi::default());
        api.fail_load(ApiError::Status { status: 500, message: text::LOAD_FAILED.into() });
        let coordinator = Coordinator::new(api, shared(Snapshot::default()), shared(LoadState::Loading));

        assert!(coordinator.load().await.is_err());

        assert_eq!(coordinator.snapshot().snapshot(), Snapshot::default());
        assert_eq!(
            coordinator.load_state().snapshot(),
            LoadState::Failed(text::LOAD_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn test_load_twice_is_idempotent() {
        let api = Rc::new(FakeApi::with_snapshot(sample_snapshot()));
        let coordinator = Coordinator::new(api, shared(Snapshot::default()), shared(LoadState::Loading));

        let first = coordinator.load().await.unwrap();
        let second = coordinator.load().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(coordinator.snapshot().snapshot(), first);
    }

    #[tokio::test]
    async fn test_controllers_share_snapshot() {
        let api = Rc::new(FakeApi::with_snapshot(sample_snapshot()));
        let coordinator = Coordinator::new(api, shared(Snapshot::default()), shared(LoadState::Loading));
        coordinator.load().await.unwrap();

        let custom = coordinator.custom(shared(CustomListState::default()));
        custom.remove(7).await;

        let snapshot = coordinator.snapshot().snapshot();
        assert!(snapshot.custom_extensions.iter().all(|ext| ext.id != 7));
        assert_eq!(snapshot.custom_count, 2);
    }
}
