use crate::auth::{login, use_auth};
use crate::components::common::ErrorAlert;
use crate::components::icons::GraduationCap;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let url = RwSignal::new(auth.state.with_untracked(|s| s.backend_url.clone()));
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let error_msg = RwSignal::new(Option::<String>::None);

    // 成功后路由服务监听到认证状态变化，自动进入面板
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        error_msg.set(None);

        spawn_local(async move {
            let result = login(
                &auth,
                url.get_untracked(),
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if let Err(message) = result {
                error_msg.set(Some(message));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <GraduationCap attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Planificador académico"</h1>
                        <p class="text-base-content/70">
                            "Ingresa con tu correo institucional"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo electrónico"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="usuario@yachaytech.edu.ec"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <details class="collapse collapse-arrow bg-base-200 mt-2">
                            <summary class="collapse-title text-sm">"Servidor"</summary>
                            <div class="collapse-content">
                                <input
                                    id="url"
                                    type="text"
                                    on:input=move |ev| url.set(event_target_value(&ev))
                                    prop:value=url
                                    class="input input-bordered input-sm w-full"
                                />
                            </div>
                        </details>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "Iniciar sesión".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
