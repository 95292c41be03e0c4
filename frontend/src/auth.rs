//! 认证模块
//!
//! 会话本身保存在 LocalStorage（令牌），这里不缓存登录状态：
//! 路由服务每次解析导航时都通过注入的信号重新读取存储。

use crate::web::{FetchClient, LocalStorage};
use leptos::prelude::*;
use planificador::account;
use planificador::config::{BASE_URL_ENV, STORAGE_BASE_URL_KEY};
use planificador::{ClientConfig, PlanificadorApi, Session};

/// 浏览器中使用的 API 客户端
pub type ApiClient = PlanificadorApi<FetchClient, LocalStorage>;

fn build_api(config: ClientConfig) -> ApiClient {
    PlanificadorApi::new(config, FetchClient, Session::new(LocalStorage))
}

/// 读取后端地址：登录页保存的地址 > 构建时地址 > 默认值
fn resolve_config() -> ClientConfig {
    let stored = LocalStorage::get(STORAGE_BASE_URL_KEY);
    let config = ClientConfig::resolve(stored.as_deref(), option_env!("PLANIFICADOR_API_URL"));
    log::debug!(
        "backend {} (override via localStorage or {})",
        config.base_url(),
        BASE_URL_ENV
    );
    config
}

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    pub api: ApiClient,
    /// 后端 URL（用于 UI 显示和自动填充）
    pub backend_url: String,
}

impl Default for AuthState {
    fn default() -> Self {
        let api = build_api(resolve_config());
        Self {
            backend_url: api.config().base_url().to_string(),
            api,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    ///
    /// 派生信号不做缓存，每次读取都检查存储中的令牌；
    /// 订阅 `state` 使本标签页的登录、注销能触发重定向。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.api.session().is_active()))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 当前的 API 客户端；每次请求时从存储读取令牌
pub fn use_api() -> ApiClient {
    use_auth().state.with_untracked(|s| s.api.clone())
}

/// 登录
///
/// `url` 非空且与当前地址不同时，保存为新的后端地址。
pub async fn login(ctx: &AuthContext, url: String, email: String, password: String) -> Result<(), String> {
    let mut api = ctx.state.with_untracked(|s| s.api.clone());

    let url = url.trim();
    if !url.is_empty() {
        let config = ClientConfig::new(url);
        if config != *api.config() {
            LocalStorage::set(STORAGE_BASE_URL_KEY, config.base_url());
            api = build_api(config);
        }
    }

    account::sign_in(&api, &email, &password).await?;

    ctx.set_state.update(|state| {
        state.backend_url = api.config().base_url().to_string();
        state.api = api;
    });
    Ok(())
}

/// 注销并清除令牌
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    // update 会通知订阅者，路由服务据此重新评估当前页面
    ctx.set_state.update(|state| {
        state.api.logout();
    });
}
