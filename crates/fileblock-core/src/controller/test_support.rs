//! Scripted `ExtensionApi` for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ExtensionApi, UploadFile};
use crate::domain::{Extension, Snapshot};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFile(pub String);

impl UploadFile for FakeFile {
    fn file_name(&self) -> String {
        self.0.clone()
    }
}

/// Holds a fake request open until the test calls `open`
#[derive(Debug, Clone, Default)]
pub struct Gate(Rc<Cell<bool>>);

impl Gate {
    pub fn open(&self) {
        self.0.set(true);
    }

    async fn wait(&self) {
        while !self.0.get() {
            tokio::task::yield_now().await;
        }
    }
}

/// Yield until `done` holds
pub async fn until(done: impl Fn() -> bool) {
    while !done() {
        tokio::task::yield_now().await;
    }
}

/// Recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LoadSnapshot,
    UpdateFixed(String, bool),
    AddCustom(String),
    DeleteCustom(i64),
    Upload(String),
}

#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<Call>>,
    snapshot: RefCell<Snapshot>,
    load_error: RefCell<Option<ApiError>>,
    failing_fixed: RefCell<HashSet<String>>,
    add_results: RefCell<VecDeque<ApiResult<Extension>>>,
    delete_error: RefCell<Option<ApiError>>,
    upload_error: RefCell<Option<ApiError>>,
    add_gates: RefCell<VecDeque<Gate>>,
    upload_gate: RefCell<Option<Gate>>,
    next_id: Cell<i64>,
}

impl FakeApi {
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let api = Self::default();
        *api.snapshot.borrow_mut() = snapshot;
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fail_load(&self, err: ApiError) {
        *self.load_error.borrow_mut() = Some(err);
    }

    pub fn fail_fixed(&self, name: &str) {
        self.failing_fixed.borrow_mut().insert(name.to_string());
    }

    pub fn queue_add(&self, result: ApiResult<Extension>) {
        self.add_results.borrow_mut().push_back(result);
    }

    pub fn fail_delete(&self, err: ApiError) {
        *self.delete_error.borrow_mut() = Some(err);
    }

    pub fn fail_upload(&self, err: ApiError) {
        *self.upload_error.borrow_mut() = Some(err);
    }

    /// Next add waits on the returned gate
    pub fn gate_add(&self) -> Gate {
        let gate = Gate::default();
        self.add_gates.borrow_mut().push_back(gate.clone());
        gate
    }

    /// Uploads wait on the returned gate
    pub fn gate_upload(&self) -> Gate {
        let gate = Gate::default();
        *self.upload_gate.borrow_mut() = Some(gate.clone());
        gate
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ExtensionApi for FakeApi {
    type File = FakeFile;

    async fn load_snapshot(&self) -> ApiResult<Snapshot> {
        self.record(Call::LoadSnapshot);
        match self.load_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(self.snapshot.borrow().clone()),
        }
    }

    async fn update_fixed(&self, name: &str, checked: bool) -> ApiResult<()> {
        self.record(Call::UpdateFixed(name.to_string(), checked));
        // Let overlapping toggles apply their optimistic state first
        tokio::task::yield_now().await;
        if self.failing_fixed.borrow().contains(name) {
            return Err(ApiError::Status { status: 500, message: "status update failed".into() });
        }
        Ok(())
    }

    async fn add_custom(&self, name: &str) -> ApiResult<Extension> {
        self.record(Call::AddCustom(name.to_string()));
        let gate = self.add_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            gate.wait().await;
        }
        if let Some(result) = self.add_results.borrow_mut().pop_front() {
            return result;
        }
        let id = self.next_id.get() + 100;
        self.next_id.set(self.next_id.get() + 1);
        Ok(Extension::custom(id, name))
    }

    async fn delete_custom(&self, id: i64) -> ApiResult<()> {
        self.record(Call::DeleteCustom(id));
        match self.delete_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn upload(&self, file: &FakeFile) -> ApiResult<String> {
        self.record(Call::Upload(file.0.clone()));
        let gate = self.upload_gate.borrow().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
        match self.upload_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(format!("upload succeeded (simulated): {}", file.0)),
        }
    }
}

/// Two fixed entries, three custom entries (ids 5, 6, 7)
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        fixed_extensions: vec![
            Extension::fixed(1, "bat", false),
            Extension::fixed(2, "exe", true),
        ],
        custom_extensions: vec![
            Extension::custom(5, "sh"),
            Extension::custom(6, "7z"),
            Extension::custom(7, "iso"),
        ],
        custom_count: 3,
    }
}
