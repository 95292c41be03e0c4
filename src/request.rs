use crate::error::{ApiError, ApiResult};
use planificador_shared::protocol::HttpMethod;
use serde::{Serialize, de::DeserializeOwned};

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 待上传的文件内容
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// multipart 表单中的一个字段
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn file(name: &str, upload: Upload) -> Self {
        FormPart::File {
            name: name.to_string(),
            upload,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// 请求体
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(String),
    /// 由传输层编码，边界与 Content-Type 交给浏览器生成
    Multipart(Vec<FormPart>),
}

impl Body {
    /// JSON 请求体解析后的值，便于比较而不依赖字段顺序
    pub fn json_value(&self) -> Option<serde_json::Value> {
        match self {
            Body::Json(text) => serde_json::from_str(text).ok(),
            Body::Multipart(_) => None,
        }
    }
}

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_json<T: Serialize + ?Sized>(self, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::RequestBuild(e.to_string()))?;
        let mut req = self.with_header("Content-Type", "application/json");
        req.body = Some(Body::Json(body));
        Ok(req)
    }

    pub fn with_multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Some(Body::Multipart(parts));
        self
    }

    /// 按名称查找请求头（不区分大小写）
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(ApiError::from)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 浏览器中的 fetch 不是 Send 的，因此使用 `?Send`。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================
