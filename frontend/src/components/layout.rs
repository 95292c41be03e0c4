use crate::auth::{logout, use_auth};
use crate::components::icons::{GraduationCap, LogOut};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use planificador::route::AppRoute;

/// 受保护页面的导航栏
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 注销后路由服务会监听认证状态并自动重定向
    let on_logout = move |_| logout(&auth);

    let links = AppRoute::NAVIGATION
        .into_iter()
        .map(|route| {
            let class = move || {
                if router.current_route().get() == route {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm btn-ghost"
                }
            };
            view! {
                <li>
                    <Link to=route class="p-0">
                        <span class=class>{route.title()}</span>
                    </Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl print:hidden">
            <div class="flex-1 gap-2">
                <GraduationCap attr:class="text-primary h-6 w-6" />
                <span class="text-xl font-bold">"Planificador"</span>
                <span class="badge badge-neutral hidden lg:inline-flex">
                    {move || auth.state.with(|s| s.backend_url.clone())}
                </span>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal gap-1 px-1">{links}</ul>
                <button on:click=on_logout class="btn btn-sm btn-outline btn-error gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Cerrar sesión"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />
                {children()}
            </div>
        </div>
    }
}
