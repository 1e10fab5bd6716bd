//! Upload Endpoint

use fileblock_core::api::UPLOAD_FIELD;
use fileblock_core::{ApiResult, Endpoint, UploadFile};

use super::form;
use super::HttpApi;

/// File chosen in the upload section's file input
#[derive(Debug, Clone)]
pub struct PickedFile(pub web_sys::File);

impl UploadFile for PickedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// Returns the server's text on success; the error carries it otherwise
pub async fn upload(api: &HttpApi, file: &PickedFile) -> ApiResult<String> {
    let endpoint = Endpoint::Upload;
    let body = form::multipart_file(UPLOAD_FIELD, &file.0)
        .map_err(|e| endpoint.network_error(format!("{:?}", e)))?;
    api.send(endpoint, api.request(endpoint).body(body)).await
}
