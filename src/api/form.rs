//! Request Bodies
//!
//! `URLSearchParams` for form-urlencoded posts, `FormData` for multipart.

use wasm_bindgen::JsValue;
use web_sys::{File, FormData, UrlSearchParams};

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

pub fn url_encoded(pairs: &[(&str, &str)]) -> Result<UrlSearchParams, JsValue> {
    let params = UrlSearchParams::new()?;
    for (name, value) in pairs {
        params.append(name, value);
    }
    Ok(params)
}

pub fn multipart_text(name: &str, value: &str) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str(name, value)?;
    Ok(form)
}

pub fn multipart_file(field: &str, file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(field, file, &file.name())?;
    Ok(form)
}
