use crate::auth::use_api;
use crate::components::common::{
    CollectionState, EmptyRow, ErrorAlert, FormState, LoadingRow, Notice,
};
use crate::components::icons::{Plus, Trash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::display::text_or_dash;
use planificador::forms::{self, PlanForm};
use planificador::messages;
use planificador_shared::{AcademicPeriod, Plan, PlanStatus};

#[component]
pub fn PlansPage() -> impl IntoView {
    let plans = CollectionState::<Plan>::new();
    let on_created = Callback::new(move |_| plans.reload());

    view! {
        <div class="space-y-6">
            <CreatePlanForm on_created=on_created />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Mis planificaciones"</h3>
                    </div>
                    <div class="px-6">
                        <ErrorAlert message=plans.error />
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Periodo"</th>
                                    <th>"Versión"</th>
                                    <th>"Estado"</th>
                                    <th>"Comentarios del decano"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || plans.loading.get() && plans.is_empty()>
                                    <LoadingRow colspan=6 />
                                </Show>
                                <Show when=move || !plans.loading.get() && plans.is_empty()>
                                    <EmptyRow colspan=6 message=messages::PLANS.empty />
                                </Show>
                                {move || {
                                    plans
                                        .items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, plan)| {
                                            let id = plan.id;
                                            let badge = if plan.estado.is_approved() {
                                                "badge badge-success"
                                            } else {
                                                "badge badge-warning"
                                            };
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td>{plan.periodo.to_string()}</td>
                                                    <td>{plan.version}</td>
                                                    <td>
                                                        <span class=badge>{plan.estado.as_str().to_string()}</span>
                                                    </td>
                                                    <td>
                                                        {text_or_dash(plan.comentarios_decano.as_deref()).to_string()}
                                                    </td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-sm text-error"
                                                            on:click=move |_| plans.remove(id)
                                                        >
                                                            <Trash attr:class="h-4 w-4" />
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreatePlanForm(on_created: Callback<()>) -> impl IntoView {
    let form = FormState::<PlanForm>::new();
    let periods = RwSignal::new(Vec::<AcademicPeriod>::new());
    let api = StoredValue::new(use_api());

    spawn_local(async move {
        match forms::period_options(&api.get_value()).await {
            Ok(list) => periods.set(list),
            Err(message) => form.error.set(Some(message)),
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(on_created);
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-4" on:submit=on_submit>
                <h3 class="card-title">"Nueva planificación"</h3>
                <Notice notice=form.notice />
                <ErrorAlert message=form.error />

                <div class="grid gap-4 md:grid-cols-3">
                    <label class="form-control">
                        <span class="label-text">"Periodo académico"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.periodo.clone())
                            on:change=move |ev| form.set(|f| f.periodo = event_target_value(&ev))
                        >
                            <option value="">"Seleccione un periodo"</option>
                            {move || {
                                periods
                                    .get()
                                    .into_iter()
                                    .map(|p| view! { <option value=p.id.to_string()>{p.nombre_periodo}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Versión"</span>
                        <input
                            type="number"
                            min="1"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.version.clone())
                            on:input=move |ev| form.set(|f| f.version = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Estado"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.estado.as_str().to_string())
                            on:change=move |ev| {
                                form.set(|f| f.estado = PlanStatus::from_value(&event_target_value(&ev)))
                            }
                        >
                            <option value="pendiente">"Pendiente"</option>
                            <option value="aprobado">"Aprobado"</option>
                        </select>
                    </label>
                </div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary gap-2" disabled=move || form.busy.get()>
                        <Plus attr:class="h-4 w-4" /> "Crear planificación"
                    </button>
                </div>
            </form>
        </div>
    }
}
