//! Fixed Extension Toggle Controller
//!
//! Optimistic update with rollback. The flag flips before the request is
//! sent; a failed request restores the value it had just before this toggle,
//! looked up by name so interleaved toggles of other entries are untouched.

use std::rc::Rc;

use log::{debug, warn};

use crate::api::ExtensionApi;
use crate::cell::StateCell;
use crate::domain::{text, Message, Snapshot};

pub struct FixedToggle<A, S, M> {
    api: Rc<A>,
    snapshot: S,
    message: M,
}

impl<A, S: Clone, M: Clone> Clone for FixedToggle<A, S, M> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            snapshot: self.snapshot.clone(),
            message: self.message.clone(),
        }
    }
}

impl<A, S, M> FixedToggle<A, S, M>
where
    A: ExtensionApi,
    S: StateCell<Snapshot>,
    M: StateCell<Message>,
{
    pub fn new(api: Rc<A>, snapshot: S, message: M) -> Self {
        Self { api, snapshot, message }
    }

    pub fn message(&self) -> &M {
        &self.message
    }

    /// Set the `checked` flag of fixed entry `name`
    pub async fn set_checked(&self, name: &str, checked: bool) {
        self.message.replace(Message::None);

        let prior = self.snapshot.mutate(|s| s.set_fixed_checked(name, checked));
        if prior.is_none() {
            debug!("[fixed] {} is not in the loaded list, sending anyway", name);
        }
        debug!("[fixed] {} -> {}", name, checked);

        if let Err(e) = self.api.update_fixed(name, checked).await {
            warn!("[fixed] update of {} failed ({}), rolling back", name, e);
            if let Some(prior) = prior {
                self.snapshot.mutate(|s| s.set_fixed_checked(name, prior));
            }
            self.message.replace(Message::error(text::FIXED_UPDATE_FAILED));
        }
    }
}
