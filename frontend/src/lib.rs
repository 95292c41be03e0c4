//! Planificador 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `planificador::route`: 路由定义与守卫（领域模型，位于核心库）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod activities;
    pub mod activity_details;
    pub mod common;
    pub mod dashboard;
    pub mod evidences;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod plans;
    pub mod profile;
    pub mod report;
}

use crate::auth::AuthContext;
use crate::components::activities::ActivitiesPage;
use crate::components::activity_details::ActivityDetailsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::evidences::EvidencesPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::plans::PlansPage;
use crate::components::profile::ProfilePage;
use crate::components::report::ReportPage;

use leptos::prelude::*;
use planificador::route::AppRoute;

// 原生 Web API 封装模块
// 提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod dialog;
    mod file;
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use dialog::{BrowserPrompt, print_section};
    pub use file::read_upload;
    pub use http::FetchClient;
    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 受保护页面统一包在 Layout（导航栏）中。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => {
            return view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">{AppRoute::NotFound.title()}</p>
                    </div>
                </div>
            }
            .into_any();
        }
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Planificaciones => view! { <PlansPage /> }.into_any(),
        AppRoute::Actividades => view! { <ActivitiesPage /> }.into_any(),
        AppRoute::DetalleActividades => view! { <ActivityDetailsPage /> }.into_any(),
        AppRoute::Evidencias => view! { <EvidencesPage /> }.into_any(),
        AppRoute::Perfil => view! { <ProfilePage /> }.into_any(),
        AppRoute::Informe => view! { <ReportPage /> }.into_any(),
    };
    view! { <Layout>{page}</Layout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（会话从 LocalStorage 恢复）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
