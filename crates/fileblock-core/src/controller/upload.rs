//! Upload Test Controller
//!
//! idle -> selecting -> submitting -> (message set) -> idle.
//! Whatever the outcome, a finished upload clears the selection and bumps
//! the picker generation so the view rebuilds an empty file input.

use std::rc::Rc;

use log::{debug, warn};

use crate::api::{ExtensionApi, UploadFile};
use crate::cell::StateCell;
use crate::domain::{text, Message};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    /// A file is picked but not sent
    Selecting,
    Submitting,
}

/// State of the upload section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState<F> {
    pub selected: Option<F>,
    pub phase: UploadPhase,
    /// Incremented on every completed upload; the file input is keyed on it
    pub picker_generation: u64,
    pub message: Message,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            phase: UploadPhase::Idle,
            picker_generation: 0,
            message: Message::None,
        }
    }
}

impl<F: UploadFile> UploadState<F> {
    pub fn selected_name(&self) -> Option<String> {
        self.selected.as_ref().map(UploadFile::file_name)
    }
}

pub struct UploadTest<A, U> {
    api: Rc<A>,
    state: U,
}

impl<A, U: Clone> Clone for UploadTest<A, U> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A, U> UploadTest<A, U>
where
    A: ExtensionApi,
    U: StateCell<UploadState<A::File>>,
{
    pub fn new(api: Rc<A>, state: U) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &U {
        &self.state
    }

    /// The file input changed; ignored while an upload is in flight
    pub fn select(&self, file: Option<A::File>) {
        self.state.mutate(|st| {
            if st.phase == UploadPhase::Submitting {
                debug!("[upload] selection ignored while submitting");
                return;
            }
            st.phase = if file.is_some() { UploadPhase::Selecting } else { UploadPhase::Idle };
            st.selected = file;
            st.message = Message::None;
        });
    }

    /// Send the selected file and return the resulting message
    pub async fn submit(&self) -> Message {
        let selected = self.state.mutate(|st| {
            st.message = Message::None;
            let selected = st.selected.clone();
            if selected.is_some() {
                st.phase = UploadPhase::Submitting;
            }
            selected
        });

        let Some(file) = selected else {
            let message = Message::error(text::SELECT_FILE);
            self.state.mutate(|st| {
                st.phase = UploadPhase::Idle;
                st.message = message.clone();
            });
            return message;
        };

        debug!("[upload] sending {}", file.file_name());
        let message = match self.api.upload(&file).await {
            Ok(body) => Message::success(body),
            Err(e) => {
                warn!("[upload] {} rejected (status {:?}): {}", file.file_name(), e.status(), e);
                Message::error(e.to_string())
            }
        };

        self.state.mutate(|st| {
            st.selected = None;
            st.picker_generation += 1;
            st.phase = UploadPhase::Idle;
            st.message = message.clone();
        });
        message
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::cell::shared;
    use crate::controller::test_support::{until, Call, FakeApi, FakeFile};
    use crate::error::ApiError;

    type Upload = UploadTest<FakeApi, Rc<RefCell<UploadState<FakeFile>>>>;

    fn make_upload(api: FakeApi) -> (Rc<FakeApi>, Upload) {
        let api = Rc::new(api);
        let upload = UploadTest::new(api.clone(), shared(UploadState::default()));
        (api, upload)
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let (api, upload) = make_upload(FakeApi::default());

        let message = upload.submit().await;

        assert_eq!(message, Message::error("please select a file"));
        let state = upload.state().snapshot();
        assert_eq!(state.phase, UploadPhase::Idle);
        assert_eq!(state.picker_generation, 0);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_select_moves_to_selecting_and_clears_message() {
        let (_api, upload) = make_upload(FakeApi::default());
        upload.submit().await;

        upload.select(Some(FakeFile("photo.png".into())));

        let state = upload.state().snapshot();
        assert_eq!(state.phase, UploadPhase::Selecting);
        assert_eq!(state.message, Message::None);
        assert_eq!(state.selected_name().as_deref(), Some("photo.png"));

        upload.select(None);
        assert_eq!(upload.state().snapshot().phase, UploadPhase::Idle);
    }

    #[tokio::test]
    async fn test_success_shows_body_and_resets_picker() {
        let (api, upload) = make_upload(FakeApi::default());
        upload.select(Some(FakeFile("photo.png".into())));

        let message = upload.submit().await;

        assert_eq!(message, Message::success("upload succeeded (simulated): photo.png"));
        let state = upload.state().snapshot();
        assert_eq!(state.selected, None);
        assert_eq!(state.phase, UploadPhase::Idle);
        assert_eq!(state.picker_generation, 1);
        assert_eq!(state.message, message);
        assert_eq!(api.calls(), vec![Call::Upload("photo.png".into())]);
    }

    #[tokio::test]
    async fn test_failure_shows_body_and_still_resets_picker() {
        let api = FakeApi::default();
        api.fail_upload(ApiError::Status { status: 400, message: "blocked file extension: .exe".into() });
        let (_api, upload) = make_upload(api);
        upload.select(Some(FakeFile("setup.exe".into())));

        let message = upload.submit().await;

        assert_eq!(message, Message::error("blocked file extension: .exe"));
        let state = upload.state().snapshot();
        assert_eq!(state.selected, None);
        assert_eq!(state.picker_generation, 1);
    }

    #[tokio::test]
    async fn test_select_while_submitting_is_ignored() {
        let api = FakeApi::default();
        let gate = api.gate_upload();
        let (api, upload) = make_upload(api);
        upload.select(Some(FakeFile("first.png".into())));

        let driver = async {
            until(|| upload.state().read_with(|st| st.phase == UploadPhase::Submitting)).await;
            upload.select(Some(FakeFile("second.png".into())));

            let state = upload.state().snapshot();
            assert_eq!(state.phase, UploadPhase::Submitting);
            assert_eq!(state.selected_name().as_deref(), Some("first.png"));
            gate.open();
        };
        let (message, ()) = tokio::join!(upload.submit(), driver);

        assert_eq!(message, Message::success("upload succeeded (simulated): first.png"));
        let state = upload.state().snapshot();
        assert_eq!(state.selected, None);
        assert_eq!(state.phase, UploadPhase::Idle);
        assert_eq!(api.calls(), vec![Call::Upload("first.png".into())]);
    }
}
