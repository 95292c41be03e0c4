use crate::components::common::{
    CollectionState, EmptyRow, ErrorAlert, FormState, LoadingRow,
};
use crate::components::icons::{Plus, Trash};
use leptos::prelude::*;
use planificador::display::{hours_or_dash, text_or_dash, yes_no};
use planificador::forms::ActivityForm;
use planificador::messages;
use planificador_shared::{Activity, SubstantiveFunction};

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = CollectionState::<Activity>::new();
    let on_created = Callback::new(move |_| activities.reload());

    view! {
        <div class="space-y-6">
            <CreateActivityForm on_created=on_created />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Actividades"</h3>
                    </div>
                    <div class="px-6">
                        <ErrorAlert message=activities.error />
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Función sustantiva"</th>
                                    <th>"Código"</th>
                                    <th>"Descripción"</th>
                                    <th>"Horas máx. periodo"</th>
                                    <th>"Horas máx. semanal"</th>
                                    <th>"Evidencia requerida"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || activities.loading.get() && activities.is_empty()>
                                    <LoadingRow colspan=8 />
                                </Show>
                                <Show when=move || !activities.loading.get() && activities.is_empty()>
                                    <EmptyRow colspan=8 message=messages::ACTIVITIES.empty />
                                </Show>
                                {move || {
                                    activities
                                        .items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, activity)| {
                                            let id = activity.id;
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td>{activity.funcion_sustantiva.label()}</td>
                                                    <td class="font-mono">{activity.codigo_item.clone()}</td>
                                                    <td>{text_or_dash(activity.descripcion.as_deref()).to_string()}</td>
                                                    <td>{hours_or_dash(activity.horas_max_periodo)}</td>
                                                    <td>{hours_or_dash(activity.horas_max_semanal)}</td>
                                                    <td>{yes_no(activity.evidencia_requerida)}</td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-sm text-error"
                                                            on:click=move |_| activities.remove(id)
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
fn CreateActivityForm(on_created: Callback<()>) -> impl IntoView {
    let form = FormState::<ActivityForm>::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(on_created);
    };

    let functions = SubstantiveFunction::ALL
        .into_iter()
        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-4" on:submit=on_submit>
                <h3 class="card-title">"Nueva actividad"</h3>
                <ErrorAlert message=form.error />

                <div class="grid gap-4 md:grid-cols-3">
                    <label class="form-control">
                        <span class="label-text">"Función sustantiva"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.funcion_sustantiva.as_str())
                            on:change=move |ev| {
                                if let Some(function) = SubstantiveFunction::from_value(&event_target_value(&ev)) {
                                    form.set(|f| f.funcion_sustantiva = function);
                                }
                            }
                        >
                            {functions}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Código del ítem"</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.codigo_item.clone())
                            on:input=move |ev| form.set(|f| f.codigo_item = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Descripción"</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.descripcion.clone())
                            on:input=move |ev| form.set(|f| f.descripcion = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Horas máximas por periodo"</span>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.horas_max_periodo.clone())
                            on:input=move |ev| form.set(|f| f.horas_max_periodo = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Horas máximas semanales"</span>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="input input-bordered"
                            prop:value=move || form.get(|f| f.horas_max_semanal.clone())
                            on:input=move |ev| form.set(|f| f.horas_max_semanal = event_target_value(&ev))
                        />
                    </label>
                    <label class="label cursor-pointer justify-start gap-3 self-end">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            prop:checked=move || form.get(|f| f.evidencia_requerida)
                            on:change=move |ev| form.set(|f| f.evidencia_requerida = event_target_checked(&ev))
                        />
                        <span class="label-text">"Requiere evidencia"</span>
                    </label>
                </div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary gap-2" disabled=move || form.busy.get()>
                        <Plus attr:class="h-4 w-4" /> "Crear actividad"
                    </button>
                </div>
            </form>
        </div>
    }
}
