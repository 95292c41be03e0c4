//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`] 特性。

use async_trait::async_trait;
use js_sys::{Array, Uint8Array};
use planificador::error::{ApiError, ApiResult};
use planificador::request::{Body, FormPart, HttpClient, HttpRequest, HttpResponse, Upload};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

/// 基于浏览器 fetch 的客户端
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchClient;

fn build_error(e: JsValue) -> ApiError {
    ApiError::RequestBuild(format!("{:?}", e))
}

fn blob_from_upload(upload: &Upload) -> Result<Blob, JsValue> {
    let bytes = Uint8Array::from(upload.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// 构建 FormData；Content-Type 与边界由浏览器生成
fn form_data(parts: &[FormPart]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value)?,
            FormPart::File { name, upload } => {
                let blob = blob_from_upload(upload)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)?
            }
        }
    }
    Ok(form)
}

fn request_init(req: &HttpRequest) -> Result<RequestInit, JsValue> {
    let headers = Headers::new()?;
    for (key, value) in &req.headers {
        headers.set(key, value)?;
    }

    let opts = RequestInit::new();
    opts.set_method(req.method.as_str());
    opts.set_headers(&headers.into());

    match &req.body {
        Some(Body::Json(text)) => opts.set_body(&JsValue::from_str(text)),
        Some(Body::Multipart(parts)) => opts.set_body(&form_data(parts)?.into()),
        None => {}
    }
    Ok(opts)
}

async fn response_text(response: &Response) -> ApiResult<String> {
    let promise = response
        .text()
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    Ok(text.as_string().unwrap_or_default())
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let opts = request_init(&req).map_err(build_error)?;
        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(build_error)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Parse(format!("Response 类型转换失败: {:?}", e)))?;

        Ok(HttpResponse {
            status: response.status(),
            body: response_text(&response).await?,
        })
    }
}
