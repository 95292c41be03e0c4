//! 页面共用的状态与小组件

use crate::auth::{ApiClient, use_api};
use crate::web::{BrowserPrompt, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use planificador::collection::{self, Listed, Removal};
use planificador::forms::{self, CreateForm};

/// 列表页面的状态：加载 -> 渲染；删除后完整重新加载
pub struct CollectionState<R: Send + Sync + 'static> {
    api: StoredValue<ApiClient>,
    pub items: RwSignal<Vec<R>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl<R: Send + Sync + 'static> Clone for CollectionState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for CollectionState<R> {}

impl<R> CollectionState<R>
where
    R: Listed + Clone + Send + Sync + 'static,
{
    /// 创建并立即加载一次
    pub fn new() -> Self {
        let state = Self {
            api: StoredValue::new(use_api()),
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(true),
        };
        state.reload();
        state
    }

    pub fn reload(&self) {
        let state = *self;
        state.loading.set(true);
        spawn_local(async move {
            let api = state.api.get_value();
            state.apply(collection::load::<R, _, _>(&api).await);
            state.loading.set(false);
        });
    }

    /// 确认 -> DELETE -> 重新加载
    pub fn remove(&self, id: u64) {
        let state = *self;
        spawn_local(async move {
            let api = state.api.get_value();
            if let Removal::Reloaded(result) =
                collection::remove::<R, _, _, _>(&api, &BrowserPrompt, id).await
            {
                state.apply(result);
            }
        });
    }

    fn apply(&self, result: Result<Vec<R>, String>) {
        match result {
            Ok(items) => {
                self.items.set(items);
                self.error.set(None);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }
}

/// 表单的状态：输入、提交中、错误与成功提示
pub struct FormState<F: Send + Sync + 'static> {
    api: StoredValue<ApiClient>,
    pub fields: RwSignal<F>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F> FormState<F>
where
    F: CreateForm + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            api: StoredValue::new(use_api()),
            fields: RwSignal::new(F::default()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    /// 读取某个字段
    pub fn get<T>(&self, read: impl Fn(&F) -> T) -> T {
        self.fields.with(read)
    }

    /// 修改某个字段
    pub fn set(&self, write: impl FnOnce(&mut F)) {
        self.fields.update(write);
    }

    /// 校验并提交；成功后重置并调用一次 `on_created`
    pub fn submit(&self, on_created: Callback<()>) {
        let state = *self;
        let mut draft = state.fields.get_untracked();
        state.busy.set(true);
        spawn_local(async move {
            let api = state.api.get_value();
            match forms::submit(&api, &mut draft, || on_created.run(())).await {
                Ok(()) => {
                    state.fields.set(draft);
                    state.error.set(None);
                    state.notice.set(F::SUCCESS.map(str::to_string));
                }
                Err(message) => state.error.set(Some(message)),
            }
            state.busy.set(false);
        });
    }
}

/// 错误提示框
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2 break-all">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 短暂显示的提示，数秒后自动隐藏
#[component]
pub fn Notice(notice: RwSignal<Option<String>>) -> impl IntoView {
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        if notice.with(Option::is_some) {
            // 替换旧定时器时旧的会被清除
            timer.set_value(Some(Timeout::new(3000, move || notice.set(None))));
        }
    });

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-info shadow-lg">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

/// 加载中的占位行
#[component]
pub fn LoadingRow(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="text-center py-8">
                <span class="loading loading-spinner loading-md text-primary"></span>
            </td>
        </tr>
    }
}

/// 空列表提示行
#[component]
pub fn EmptyRow(colspan: u32, message: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="text-center py-8 text-base-content/50">
                {message}
            </td>
        </tr>
    }
}
