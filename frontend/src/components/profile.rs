use crate::auth::use_api;
use crate::components::common::ErrorAlert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::account;
use planificador::display::text_or_dash;
use planificador_shared::UserProfile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let profile = RwSignal::new(Option::<UserProfile>::None);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match account::load_profile(&api.get_value()).await {
            Ok(loaded) => profile.set(Some(loaded)),
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl">
            <div class="card-body">
                <h3 class="card-title">"Mi perfil"</h3>
                <ErrorAlert message=error />
                {move || match profile.get() {
                    Some(p) => view! {
                        <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2">
                            <dt class="font-semibold">"Usuario"</dt>
                            <dd>{p.username.clone()}</dd>
                            <dt class="font-semibold">"Correo"</dt>
                            <dd>{p.email.clone()}</dd>
                            <dt class="font-semibold">"Cédula"</dt>
                            <dd>{text_or_dash(p.cedula.as_deref()).to_string()}</dd>
                            <dt class="font-semibold">"Escuela"</dt>
                            <dd>{text_or_dash(p.escuela.as_deref()).to_string()}</dd>
                            <dt class="font-semibold">"Roles"</dt>
                            <dd>{p.roles_label()}</dd>
                        </dl>
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
