use thiserror::Error;

/// 客户端请求错误
///
/// 只区分"请求没发出去"与"服务端返回了非 2xx"，不做更细的分类。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求构建失败
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    /// 服务端返回非 2xx 状态
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// 响应解析失败
    #[error("response parse failed: {0}")]
    Parse(String),
    /// 令牌无法写入存储
    #[error("session could not be started: {0}")]
    Session(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 服务端返回的原始错误体，序列化为紧凑 JSON（无法解析时原样返回）
    pub fn server_body(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => Some(value.to_string()),
            Err(_) => Some(body.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_body_is_compacted() {
        let err = ApiError::Status {
            status: 400,
            body: "{\n  \"periodo\": [\"Este campo es requerido.\"]\n}".into(),
        };
        assert_eq!(
            err.server_body().as_deref(),
            Some(r#"{"periodo":["Este campo es requerido."]}"#)
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_server_body_absent_for_transport_errors() {
        assert!(ApiError::Network("offline".into()).server_body().is_none());
        let empty = ApiError::Status {
            status: 500,
            body: "  ".into(),
        };
        assert!(empty.server_body().is_none());
    }

    #[test]
    fn test_html_error_pages_are_kept_verbatim() {
        let err = ApiError::Status {
            status: 502,
            body: "<h1>Bad Gateway</h1>".into(),
        };
        assert_eq!(err.server_body().as_deref(), Some("<h1>Bad Gateway</h1>"));
    }
}
