//! Block-List API Client
//!
//! gloo-net bindings to the block-list server, organized by endpoint group.
//! Every request carries the visitor id header.

mod extensions;
mod form;
mod upload;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use log::debug;

use fileblock_core::api::Method;
use fileblock_core::{ApiResult, Endpoint, Extension, ExtensionApi, Snapshot, VISITOR_ID_HEADER};

use crate::config::ApiConfig;

pub use upload::PickedFile;

/// HTTP implementation of `ExtensionApi`
pub struct HttpApi {
    config: ApiConfig,
    visitor_id: String,
}

impl HttpApi {
    pub fn new(config: ApiConfig, visitor_id: String) -> Self {
        Self { config, visitor_id }
    }

    /// Builder for `endpoint` with the identity header set
    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = self.config.url(endpoint);
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        builder.header(VISITOR_ID_HEADER, &self.visitor_id)
    }

    /// Send `request` and return the body of a 2xx response
    async fn send(
        &self,
        endpoint: Endpoint,
        request: Result<Request, gloo_net::Error>,
    ) -> ApiResult<String> {
        let request = request.map_err(|e| endpoint.network_error(e))?;
        debug!("[api] -> {}", endpoint.path());

        let response = request.send().await.map_err(|e| endpoint.network_error(e))?;
        let status = response.status();
        let body = response.text().await;
        debug!("[api] <- {} {}", endpoint.path(), status);

        if !response.ok() {
            return Err(endpoint.status_error(status, body.unwrap_or_default()));
        }
        body.map_err(|e| endpoint.decode_error(e))
    }
}

#[async_trait(?Send)]
impl ExtensionApi for HttpApi {
    type File = PickedFile;

    async fn load_snapshot(&self) -> ApiResult<Snapshot> {
        extensions::load_snapshot(self).await
    }

    async fn update_fixed(&self, name: &str, checked: bool) -> ApiResult<()> {
        extensions::update_fixed(self, name, checked).await
    }

    async fn add_custom(&self, name: &str) -> ApiResult<Extension> {
        extensions::add_custom(self, name).await
    }

    async fn delete_custom(&self, id: i64) -> ApiResult<()> {
        extensions::delete_custom(self, id).await
    }

    async fn upload(&self, file: &PickedFile) -> ApiResult<String> {
        upload::upload(self, file).await
    }
}
