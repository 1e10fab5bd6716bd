//! Extension Endpoints
//!
//! Snapshot load, fixed toggle, custom add/delete.

use fileblock_core::{ApiResult, Endpoint, Extension, Snapshot};

use super::form::{self, FORM_URLENCODED};
use super::HttpApi;

pub async fn load_snapshot(api: &HttpApi) -> ApiResult<Snapshot> {
    let endpoint = Endpoint::LoadSnapshot;
    let body = api.send(endpoint, api.request(endpoint).build()).await?;
    serde_json::from_str(&body).map_err(|e| endpoint.decode_error(e))
}

pub async fn update_fixed(api: &HttpApi, name: &str, checked: bool) -> ApiResult<()> {
    let endpoint = Endpoint::UpdateFixed;
    let checked = if checked { "true" } else { "false" };
    let params = form::url_encoded(&[("name", name), ("checked", checked)])
        .map_err(|e| endpoint.network_error(format!("{:?}", e)))?;
    let request = api
        .request(endpoint)
        .header("Content-Type", FORM_URLENCODED)
        .body(params);
    api.send(endpoint, request).await?;
    Ok(())
}

pub async fn add_custom(api: &HttpApi, name: &str) -> ApiResult<Extension> {
    let endpoint = Endpoint::AddCustom;
    let body = form::multipart_text("name", name)
        .map_err(|e| endpoint.network_error(format!("{:?}", e)))?;
    let body = api.send(endpoint, api.request(endpoint).body(body)).await?;
    serde_json::from_str(&body).map_err(|e| endpoint.decode_error(e))
}

pub async fn delete_custom(api: &HttpApi, id: i64) -> ApiResult<()> {
    let endpoint = Endpoint::DeleteCustom;
    let id = id.to_string();
    let params = form::url_encoded(&[("id", &id)])
        .map_err(|e| endpoint.network_error(format!("{:?}", e)))?;
    let request = api
        .request(endpoint)
        .header("Content-Type", FORM_URLENCODED)
        .body(params);
    api.send(endpoint, request).await?;
    Ok(())
}
