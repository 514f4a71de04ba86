use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::de::decode_body;
use shared::{ApiConfig, ApiError, DiyResult, Endpoint, ProductScanResult, ReportResult};
use web_sys::FormData;

pub const DEFAULT_MEDICAL_CONTEXT: &str = "None";
pub const DEMO_USER_ID: &str = "demo";

/// Form fields besides the file, in append order.
type TextFields<'a> = &'a [(&'a str, &'a str)];

pub async fn submit_product_scan(
    file: GlooFile,
    medical_context: &str,
) -> Result<ProductScanResult, ApiError> {
    let ailments = medical_context_or_default(medical_context);
    post_multipart(
        Endpoint::ProductDetails,
        "file",
        &file,
        &[("userMedicalAilments", ailments)],
    )
    .await
}

pub async fn submit_diy_request(file: GlooFile) -> Result<DiyResult, ApiError> {
    post_multipart(Endpoint::DiyGenerate, "file", &file, &[]).await
}

pub async fn submit_report_analysis(file: GlooFile, user_id: &str) -> Result<ReportResult, ApiError> {
    post_multipart(Endpoint::ReportAnalysis, "fileInput", &file, &[("userId", user_id)]).await
}

pub fn medical_context_or_default(value: &str) -> &str {
    if value.trim().is_empty() {
        DEFAULT_MEDICAL_CONTEXT
    } else {
        value
    }
}

pub fn build_form(file_field: &str, file: &GlooFile, fields: TextFields<'_>) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{:?}", e));

    let form_data = FormData::new().map_err(js_err)?;
    form_data
        .append_with_blob_and_filename(file_field, file.as_ref(), &file.name())
        .map_err(js_err)?;
    for (name, value) in fields {
        form_data.append_with_str(name, value).map_err(js_err)?;
    }
    Ok(form_data)
}

async fn post_multipart<T: DeserializeOwned + Default>(
    endpoint: Endpoint,
    file_field: &str,
    file: &GlooFile,
    fields: TextFields<'_>,
) -> Result<T, ApiError> {
    let url = ApiConfig::global().url(endpoint);
    let form_data = build_form(file_field, file, fields)?;

    log::info!("POST {} ({}, {} bytes)", url, file.name(), file.size());

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        log::error!("Network error for {}: {}", url, e);
        ApiError::Unreachable { reason: e.to_string() }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        log::error!("Failed to read body from {}: {}", url, e);
        ApiError::Unreadable {
            status,
            reason: e.to_string(),
        }
    })?;

    if !response.ok() {
        log::error!("{} failed with status {}: {}", url, status, body);
        return Err(ApiError::Rejected { status, body });
    }

    decode_body::<T>(&body).inspect_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file() -> GlooFile {
        GlooFile::new("item.png", "not really a png")
    }

    #[wasm_bindgen_test]
    fn test_product_scan_form_fields() {
        let file = sample_file();
        let form = build_form("file", &file, &[("userMedicalAilments", "None")]).unwrap();

        assert!(form.has("file"));
        assert_eq!(form.get("userMedicalAilments").as_string().as_deref(), Some("None"));
    }

    #[wasm_bindgen_test]
    fn test_report_form_fields() {
        let file = sample_file();
        let form = build_form("fileInput", &file, &[("userId", DEMO_USER_ID)]).unwrap();

        assert!(form.has("fileInput"));
        assert!(!form.has("file"));
        assert_eq!(form.get("userId").as_string().as_deref(), Some("demo"));
    }

    #[wasm_bindgen_test]
    fn test_blank_medical_context_defaults() {
        assert_eq!(medical_context_or_default("   "), "None");
        assert_eq!(medical_context_or_default(""), "None");
        assert_eq!(medical_context_or_default("diabetes"), "diabetes");
    }
}
