//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则以及导航解析。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 控制面板
    Dashboard,
    Planificaciones,
    Actividades,
    DetalleActividades,
    Evidencias,
    Perfil,
    /// 可打印的汇总报告
    Informe,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 导航栏中出现的受保护页面，按显示顺序
    pub const NAVIGATION: [AppRoute; 7] = [
        Self::Dashboard,
        Self::Planificaciones,
        Self::Actividades,
        Self::DetalleActividades,
        Self::Evidencias,
        Self::Informe,
        Self::Perfil,
    ];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/planificaciones" => Self::Planificaciones,
            "/actividades" => Self::Actividades,
            "/detalle-actividades" => Self::DetalleActividades,
            "/evidencias" => Self::Evidencias,
            "/perfil" => Self::Perfil,
            "/informe" => Self::Informe,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Planificaciones => "/planificaciones",
            Self::Actividades => "/actividades",
            Self::DetalleActividades => "/detalle-actividades",
            Self::Evidencias => "/evidencias",
            Self::Perfil => "/perfil",
            Self::Informe => "/informe",
            Self::NotFound => "/404",
        }
    }

    /// 导航栏文字
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Iniciar sesión",
            Self::Dashboard => "Inicio",
            Self::Planificaciones => "Planificaciones",
            Self::Actividades => "Actividades",
            Self::DetalleActividades => "Detalle de actividades",
            Self::Evidencias => "Evidencias",
            Self::Perfil => "Perfil",
            Self::Informe => "Informe",
            Self::NotFound => "Página no encontrada",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫对一次导航的裁决
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// 允许进入目标页面
    Allow(AppRoute),
    /// 改为进入另一个页面，替换历史记录
    Redirect(AppRoute),
}

impl Navigation {
    /// 最终展示的路由
    pub fn route(&self) -> AppRoute {
        match self {
            Self::Allow(route) | Self::Redirect(route) => *route,
        }
    }
}

/// 导航守卫：请求 -> 验证 -> 处理
///
/// 未认证访问受保护页面时转向登录页；已认证访问登录页时转向面板。
pub fn resolve_navigation(target: AppRoute, is_authenticated: bool) -> Navigation {
    if target.requires_auth() && !is_authenticated {
        log::info!("[Router] Access to {} denied. Redirecting to login.", target);
        return Navigation::Redirect(AppRoute::auth_failure_redirect());
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        log::info!("[Router] Already authenticated. Redirecting to dashboard.");
        return Navigation::Redirect(AppRoute::auth_success_redirect());
    }
    Navigation::Allow(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MemoryTokenStore;
    use crate::session::{Session, TokenStore};

    const PROTECTED: [AppRoute; 7] = AppRoute::NAVIGATION;

    #[test]
    fn test_paths_round_trip_for_every_page() {
        for route in PROTECTED.iter().chain([AppRoute::Login].iter()) {
            assert_eq!(AppRoute::from_path(route.to_path()), *route);
        }
        assert_eq!(AppRoute::from_path("/planificaciones/"), AppRoute::Planificaciones);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_anonymous_user_never_sees_protected_pages() {
        for route in PROTECTED {
            assert_eq!(
                resolve_navigation(route, false),
                Navigation::Redirect(AppRoute::Login)
            );
        }
    }

    #[test]
    fn test_authenticated_user_reaches_protected_pages() {
        for route in PROTECTED {
            assert_eq!(resolve_navigation(route, true), Navigation::Allow(route));
        }
    }

    #[test]
    fn test_guard_follows_token_removed_from_store() {
        let store = MemoryTokenStore::with_token("abc");
        let session = Session::new(store.clone());
        assert_eq!(
            resolve_navigation(AppRoute::Planificaciones, session.is_active()),
            Navigation::Allow(AppRoute::Planificaciones)
        );

        // 另一个标签页注销或存储被清空
        store.remove(planificador_shared::STORAGE_TOKEN_KEY);
        assert_eq!(
            resolve_navigation(AppRoute::Planificaciones, session.is_active()),
            Navigation::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_login_page_is_public_but_skipped_when_authenticated() {
        assert_eq!(
            resolve_navigation(AppRoute::Login, false),
            Navigation::Allow(AppRoute::Login)
        );
        assert_eq!(
            resolve_navigation(AppRoute::Login, true).route(),
            AppRoute::Dashboard
        );
        assert_eq!(
            resolve_navigation(AppRoute::NotFound, false),
            Navigation::Allow(AppRoute::NotFound)
        );
    }
}
