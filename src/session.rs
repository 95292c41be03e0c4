//! 会话模块
//!
//! 会话只有一个状态：存储中是否有令牌。登录时写入，注销时清除，
//! 每次构建请求时读取一次，不在内存中缓存。

use planificador_shared::{STORAGE_TOKEN_KEY, TOKEN_SCHEME};

/// 令牌持久化存储
pub trait TokenStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// 注入式会话对象
#[derive(Debug, Clone, PartialEq)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 登录成功后开始会话
    pub fn begin(&self, token: &str) -> bool {
        log::info!("session started");
        self.store.save(STORAGE_TOKEN_KEY, token.trim())
    }

    /// 注销
    pub fn end(&self) -> bool {
        log::info!("session ended");
        self.store.remove(STORAGE_TOKEN_KEY)
    }

    /// 当前令牌，空白字符串视为不存在
    pub fn token(&self) -> Option<String> {
        self.store
            .load(STORAGE_TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` 头的值
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| authorization_value(&t))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub fn authorization_value(token: &str) -> String {
    format!("{} {}", TOKEN_SCHEME, token)
}
