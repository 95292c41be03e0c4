//! 读取 `<input type="file">` 选中的文件

use js_sys::Uint8Array;
use planificador::Upload;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// 读取第一个选中的文件；未选择时返回 None
pub async fn read_upload(input: &HtmlInputElement) -> Result<Option<Upload>, JsValue> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    read_file(&file).await.map(Some)
}

async fn read_file(file: &File) -> Result<Upload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let content_type = match file.type_() {
        t if t.is_empty() => FALLBACK_CONTENT_TYPE.to_string(),
        t => t,
    };
    Ok(Upload {
        file_name: file.name(),
        content_type,
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}
