// =========================================================
// 客户端配置 (Client Configuration)
// =========================================================

/// 默认后端地址，未配置时使用
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
/// 登录页可覆盖的后端地址存储键
pub const STORAGE_BASE_URL_KEY: &str = "planificador_api_url";
/// 构建时可通过此环境变量指定后端地址
pub const BASE_URL_ENV: &str = "PLANIFICADOR_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// 按优先级解析：用户保存的地址 > 构建时地址 > 默认值
    pub fn resolve(stored: Option<&str>, build_time: Option<&str>) -> Self {
        let chosen = [stored, build_time]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(chosen)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接相对路径
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// 统一为恰好一个结尾斜杠
fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(
            ClientConfig::resolve(Some("https://stored.example"), Some("https://build.example"))
                .base_url(),
            "https://stored.example/"
        );
        assert_eq!(
            ClientConfig::resolve(Some("  "), Some("https://build.example")).base_url(),
            "https://build.example/"
        );
        assert_eq!(ClientConfig::resolve(None, None).base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("https://api.example//");
        assert_eq!(config.url("api/detalles/"), "https://api.example/api/detalles/");
        assert_eq!(config.url("/api-token-auth/"), "https://api.example/api-token-auth/");
    }
}
