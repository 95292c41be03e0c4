use crate::auth::use_api;
use crate::components::common::ErrorAlert;
use crate::components::icons::Printer;
use crate::web::print_section;
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::display::{observations_or_default, text_or_dash};
use planificador::messages::EMPTY_CELL;
use planificador::report::{self, PRINT_ROOT_ID};
use planificador_shared::{ReportResponse, SummaryReport};

#[component]
pub fn ReportPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let response = RwSignal::new(Option::<ReportResponse>::None);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match report::load_report(&api.get_value()).await {
            Ok(loaded) => response.set(Some(loaded)),
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <ErrorAlert message=error />
                {move || match response.get() {
                    Some(ReportResponse::Report(report)) => view! { <ReportSheet report=report /> }.into_any(),
                    Some(ReportResponse::Empty { mensaje }) => view! {
                        <div role="alert" class="alert alert-info">
                            <span>{mensaje}</span>
                        </div>
                    }
                    .into_any(),
                    None if error.with(Option::is_none) => view! {
                        <span class="loading loading-spinner loading-md text-primary"></span>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ReportSheet(report: SummaryReport) -> impl IntoView {
    let rows = report::hours_rows(&report)
        .into_iter()
        .map(|row| {
            let class = if row.is_total { "font-bold" } else { "" };
            view! {
                <tr class=class>
                    <td>{row.label}</td>
                    <td class="text-right">{row.hours}</td>
                </tr>
            }
        })
        .collect_view();

    let semanas = report
        .numero_semanas
        .map(|n| n.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    view! {
        <div class="flex justify-end print:hidden">
            <button class="btn btn-primary gap-2" on:click=move |_| print_section(PRINT_ROOT_ID)>
                <Printer attr:class="h-4 w-4" /> "Imprimir / Exportar PDF"
            </button>
        </div>
        <div id=PRINT_ROOT_ID class="space-y-6">
            <h2 class="text-2xl font-bold text-center">"Informe de planificación académica"</h2>
            <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2">
                <dt class="font-semibold">"Docente"</dt>
                <dd>{report.docente.clone()}</dd>
                <dt class="font-semibold">"Cédula"</dt>
                <dd>{text_or_dash(report.cedula.as_deref()).to_string()}</dd>
                <dt class="font-semibold">"Escuela"</dt>
                <dd>{text_or_dash(report.escuela.as_deref()).to_string()}</dd>
                <dt class="font-semibold">"Periodo"</dt>
                <dd>{report.periodo.clone()}</dd>
                <dt class="font-semibold">"Número de semanas"</dt>
                <dd>{semanas}</dd>
            </dl>
            <table class="table w-full max-w-md">
                <thead>
                    <tr>
                        <th>"Función sustantiva"</th>
                        <th class="text-right">"Horas"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div>
                <h3 class="font-semibold">"Observaciones"</h3>
                <p>{observations_or_default(report.observaciones.as_deref()).to_string()}</p>
            </div>
        </div>
    }
}
