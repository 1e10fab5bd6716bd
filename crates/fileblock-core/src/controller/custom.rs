//! Custom Extension List Controller
//!
//! Adds are pessimistic: the entry only appears once the server returns it
//! with its id. Deletes remove by id after confirmation. The count moves by
//! exactly one together with the list.

use std::rc::Rc;

use log::{debug, warn};

use crate::api::ExtensionApi;
use crate::cell::StateCell;
use crate::domain::{text, validate_custom_name, Message, Snapshot};
use crate::error::{ApiError, ApiResult, DELETE_CANCELLED};

/// Form state of the custom section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomListState {
    /// Text in the name input
    pub draft: String,
    /// Adds sent and not yet answered
    pub adds_in_flight: u32,
    pub message: Message,
}

impl CustomListState {
    /// At least one add is waiting on the server
    pub fn submitting(&self) -> bool {
        self.adds_in_flight > 0
    }
}

pub struct CustomList<A, S, C> {
    api: Rc<A>,
    snapshot: S,
    state: C,
}

impl<A, S: Clone, C: Clone> Clone for CustomList<A, S, C> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            snapshot: self.snapshot.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A, S, C> CustomList<A, S, C>
where
    A: ExtensionApi,
    S: StateCell<Snapshot>,
    C: StateCell<CustomListState>,
{
    pub fn new(api: Rc<A>, snapshot: S, state: C) -> Self {
        Self { api, snapshot, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn set_draft(&self, draft: String) {
        self.state.mutate(|st| st.draft = draft);
    }

    /// Add whatever is in the input
    pub async fn submit(&self) {
        let draft = self.state.read_with(|st| st.draft.clone());
        self.add(&draft).await;
    }

    /// Validate `name` locally, then create it on the server
    pub async fn add(&self, name: &str) {
        self.set_message(Message::None);

        if let Err(e) = validate_custom_name(name) {
            debug!("[custom] rejected {:?}: {}", name, e);
            self.set_message(Message::error(e.to_string()));
            return;
        }

        self.state.mutate(|st| st.adds_in_flight += 1);
        let result = self.api.add_custom(name).await;

        match result {
            Ok(extension) => {
                debug!("[custom] added {} as #{}", extension.name, extension.id);
                self.snapshot.mutate(|s| s.push_custom(extension));
                self.state.mutate(|st| {
                    st.draft.clear();
                    st.message = Message::success(text::added(name));
                });
            }
            Err(e) => {
                warn!("[custom] add of {} failed (status {:?}): {}", name, e.status(), e);
                self.set_message(Message::error(e.to_string()));
            }
        }
        self.state.mutate(|st| st.adds_in_flight = st.adds_in_flight.saturating_sub(1));
    }

    /// Delete the custom entry `id` on the server, then locally
    pub async fn remove(&self, id: i64) {
        self.set_message(Message::None);
        let result = self.api.delete_custom(id).await;
        self.settle_remove(id, result);
    }

    /// The user backed out of deleting `id`
    pub fn cancel_remove(&self, id: i64) {
        self.set_message(Message::None);
        self.settle_remove(id, Err(ApiError::Cancelled));
    }

    fn settle_remove(&self, id: i64, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                let removed = self.snapshot.mutate(|s| s.remove_custom(id));
                if removed.is_none() {
                    debug!("[custom] #{} confirmed deleted but was not listed", id);
                }
                self.set_message(Message::success(text::DELETED));
            }
            Err(e) if e.to_string() == DELETE_CANCELLED => {
                debug!("[custom] delete of #{} cancelled", id);
            }
            Err(e) => {
                warn!("[custom] delete of #{} failed: {}", id, e);
                self.set_message(Message::error(e.to_string()));
            }
        }
    }

    fn set_message(&self, message: Message) {
        self.state.mutate(|st| st.message = message);
    }
}
