use crate::auth::use_api;
use crate::components::common::{
    CollectionState, EmptyRow, ErrorAlert, FormState, LoadingRow,
};
use crate::components::icons::{Plus, Trash};
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::display::{format_hours, hours_or_dash, text_or_dash};
use planificador::forms::{self, DetailForm, DetailOptions};
use planificador::messages;
use planificador_shared::ActivityDetail;

#[component]
pub fn ActivityDetailsPage() -> impl IntoView {
    let details = CollectionState::<ActivityDetail>::new();
    let on_created = Callback::new(move |_| details.reload());

    view! {
        <div class="space-y-6">
            <CreateDetailForm on_created=on_created />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Detalle de actividades"</h3>
                    </div>
                    <div class="px-6">
                        <ErrorAlert message=details.error />
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Planificación"</th>
                                    <th>"Actividad"</th>
                                    <th>"Producto esperado"</th>
                                    <th>"Justificación"</th>
                                    <th>"Horas asignadas"</th>
                                    <th>"Horas del periodo"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || details.loading.get() && details.is_empty()>
                                    <LoadingRow colspan=8 />
                                </Show>
                                <Show when=move || !details.loading.get() && details.is_empty()>
                                    <EmptyRow colspan=8 message=messages::DETAILS.empty />
                                </Show>
                                {move || {
                                    details
                                        .items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, detail)| {
                                            let id = detail.id;
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td>{format!("#{}", detail.planificacion)}</td>
                                                    <td class="font-mono">
                                                        {detail.codigo_item.clone().unwrap_or_else(|| format!("#{}", detail.actividad))}
                                                    </td>
                                                    <td>{text_or_dash(detail.producto_esperado.as_deref()).to_string()}</td>
                                                    <td>{text_or_dash(detail.justificacion.as_deref()).to_string()}</td>
                                                    <td>{format_hours(detail.horas_asignadas)}</td>
                                                    <td>{hours_or_dash(detail.horas_periodo)}</td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-sm text-error"
                                                            on:click=move |_| details.remove(id)
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
fn CreateDetailForm(on_created: Callback<()>) -> impl IntoView {
    let form = FormState::<DetailForm>::new();
    let options = RwSignal::new(DetailOptions::default());
    let api = StoredValue::new(use_api());

    // 计划与活动并发加载
    spawn_local(async move {
        match forms::detail_options(&api.get_value()).await {
            Ok(loaded) => options.set(loaded),
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
                <h3 class="card-title">"Asignar actividad a una planificación"</h3>
                <ErrorAlert message=form.error />

                <div class="grid gap-4 md:grid-cols-2">
                    <label class="form-control">
                        <span class="label-text">"Planificación"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.planificacion.clone())
                            on:change=move |ev| form.set(|f| f.planificacion = event_target_value(&ev))
                        >
                            <option value="">"Seleccione una planificación"</option>
                            {move || {
                                options
                                    .with(|o| o.plans.clone())
                                    .into_iter()
                                    .map(|p| view! { <option value=p.id.to_string()>{p.option_label()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Actividad"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.actividad.clone())
                            on:change=move |ev| form.set(|f| f.actividad = event_target_value(&ev))
                        >
                            <option value="">"Seleccione una actividad"</option>
                            {move || {
                                options
                                    .with(|o| o.activities.clone())
                                    .into_iter()
                                    .map(|a| view! { <option value=a.id.to_string()>{a.option_label()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Producto esperado"</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.producto_esperado.clone())
                            on:input=move |ev| form.set(|f| f.producto_esperado = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Justificación"</span>
                        <textarea
                            class="textarea textarea-bordered"
                            prop:value=move || form.get(|f| f.justificacion.clone())
                            on:input=move |ev| form.set(|f| f.justificacion = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Horas asignadas"</span>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.horas_asignadas.clone())
                            on:input=move |ev| form.set(|f| f.horas_asignadas = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Horas del periodo"</span>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            placeholder="Igual a las horas asignadas"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.horas_periodo.clone())
                            on:input=move |ev| form.set(|f| f.horas_periodo = event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary gap-2" disabled=move || form.busy.get()>
                        <Plus attr:class="h-4 w-4" /> "Guardar detalle"
                    </button>
                </div>
            </form>
        </div>
    }
}
