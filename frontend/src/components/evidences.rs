use crate::auth::use_api;
use crate::components::common::{
    CollectionState, EmptyRow, ErrorAlert, FormState, LoadingRow, Notice,
};
use crate::components::icons::{Trash, Upload};
use crate::web::read_upload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::forms::{self, EvidenceForm};
use planificador::messages;
use planificador_shared::date::display_date;
use planificador_shared::{ActivityDetail, Evidence};

#[component]
pub fn EvidencesPage() -> impl IntoView {
    let evidences = CollectionState::<Evidence>::new();
    let on_created = Callback::new(move |_| evidences.reload());

    view! {
        <div class="space-y-6">
            <UploadEvidenceForm on_created=on_created />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Evidencias"</h3>
                    </div>
                    <div class="px-6">
                        <ErrorAlert message=evidences.error />
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Detalle de actividad"</th>
                                    <th>"Archivo"</th>
                                    <th>"Fecha de subida"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || evidences.loading.get() && evidences.is_empty()>
                                    <LoadingRow colspan=5 />
                                </Show>
                                <Show when=move || !evidences.loading.get() && evidences.is_empty()>
                                    <EmptyRow colspan=5 message=messages::EVIDENCES.empty />
                                </Show>
                                {move || {
                                    evidences
                                        .items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, evidence)| {
                                            let id = evidence.id;
                                            let file = match evidence.link() {
                                                Some(href) => view! {
                                                    <a class="link link-primary" href=href.to_string() target="_blank" rel="noopener noreferrer">
                                                        {evidence.nombre_archivo.clone()}
                                                    </a>
                                                }
                                                .into_any(),
                                                None => view! { <span>{evidence.nombre_archivo.clone()}</span> }.into_any(),
                                            };
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td>{format!("#{}", evidence.detalle_actividad)}</td>
                                                    <td>{file}</td>
                                                    <td>{display_date(&evidence.fecha_subida)}</td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-sm text-error"
                                                            on:click=move |_| evidences.remove(id)
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
fn UploadEvidenceForm(on_created: Callback<()>) -> impl IntoView {
    let form = FormState::<EvidenceForm>::new();
    let details = RwSignal::new(Vec::<ActivityDetail>::new());
    let api = StoredValue::new(use_api());
    let file_input = NodeRef::<leptos::html::Input>::new();

    spawn_local(async move {
        match forms::evidence_options(&api.get_value()).await {
            Ok(list) => details.set(list),
            Err(message) => form.error.set(Some(message)),
        }
    });

    let on_file_change = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match read_upload(&input).await {
                Ok(upload) => form.set(|f| f.archivo = upload),
                Err(e) => {
                    log::error!("reading file failed: {:?}", e);
                    form.error.set(Some(messages::EVIDENCE_UPLOAD_FAILED.to_string()));
                }
            }
        });
    };

    // 重置后清空文件选择框
    Effect::new(move |_| {
        if form.get(|f| f.archivo.is_none()) {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.submit(on_created);
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-4" on:submit=on_submit>
                <h3 class="card-title">"Subir evidencia"</h3>
                <Notice notice=form.notice />
                <ErrorAlert message=form.error />

                <div class="grid gap-4 md:grid-cols-2">
                    <label class="form-control">
                        <span class="label-text">"Detalle de actividad"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || form.get(|f| f.detalle_actividad.clone())
                            on:change=move |ev| form.set(|f| f.detalle_actividad = event_target_value(&ev))
                        >
                            <option value="">"Seleccione una actividad"</option>
                            {move || {
                                details
                                    .get()
                                    .into_iter()
                                    .map(|d| view! { <option value=d.id.to_string()>{d.option_label()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Archivo"</span>
                        <input
                            type="file"
                            class="file-input file-input-bordered"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </label>
                </div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary gap-2" disabled=move || form.busy.get()>
                        <Upload attr:class="h-4 w-4" /> "Subir"
                    </button>
                </div>
            </form>
        </div>
    }
}
