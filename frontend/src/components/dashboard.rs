use crate::auth::use_api;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::account;
use planificador::route::AppRoute;

/// 各页面的简介
fn section_summary(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Planificaciones => "Versiones de tu planificación por periodo académico.",
        AppRoute::Actividades => "Catálogo de actividades por función sustantiva.",
        AppRoute::DetalleActividades => "Horas asignadas a cada actividad de una planificación.",
        AppRoute::Evidencias => "Archivos que respaldan las actividades realizadas.",
        AppRoute::Informe => "Resumen de horas listo para imprimir.",
        AppRoute::Perfil => "Tus datos y roles.",
        _ => "",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let (greeting, set_greeting) = signal(Option::<String>::None);

    spawn_local(async move {
        match account::load_profile(&api.get_value()).await {
            Ok(profile) => set_greeting.set(Some(account::greeting(&profile))),
            // 问候语不是必需的，失败时只记录
            Err(e) => log::warn!("{}", e),
        }
    });

    let cards = AppRoute::NAVIGATION
        .into_iter()
        .filter(|route| *route != AppRoute::Dashboard)
        .map(|route| {
            view! {
                <Link to=route class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
                    <div class="card-body">
                        <h2 class="card-title">{route.title()}</h2>
                        <p class="text-base-content/70 text-sm">{section_summary(route)}</p>
                    </div>
                </Link>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">
                {move || greeting.get().unwrap_or_else(|| AppRoute::Dashboard.title().to_string())}
            </h1>
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">{cards}</div>
        </div>
    }
}
