//! 列表页面的加载与删除流程
//!
//! 流程：加载 -> 渲染；删除：确认 -> DELETE -> 完整重新加载。
//! 没有乐观更新，也没有分页。

use crate::api::PlanificadorApi;
use crate::messages::{self, ListMessages};
use crate::request::HttpClient;
use crate::session::TokenStore;
use planificador_shared::protocol::Resource;
use planificador_shared::{Activity, ActivityDetail, Evidence, Plan};

/// 有列表页面的集合
pub trait Listed: Resource {
    const MESSAGES: ListMessages;
}

impl Listed for Plan {
    const MESSAGES: ListMessages = messages::PLANS;
}

impl Listed for Activity {
    const MESSAGES: ListMessages = messages::ACTIVITIES;
}

impl Listed for ActivityDetail {
    const MESSAGES: ListMessages = messages::DETAILS;
}

impl Listed for Evidence {
    const MESSAGES: ListMessages = messages::EVIDENCES;
}

/// 浏览器的阻塞式对话框（confirm / alert）
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// 删除流程的结果
#[derive(Debug, PartialEq)]
pub enum Removal<R> {
    /// 用户取消，未发出请求
    Cancelled,
    /// 删除失败，已弹出提示
    Failed,
    /// 删除成功并重新加载了列表
    Reloaded(Result<Vec<R>, String>),
}

/// 读取任意集合，失败时返回给定的本地化文案
pub async fn fetch<R, C, S>(api: &PlanificadorApi<C, S>, failure: &str) -> Result<Vec<R>, String>
where
    R: Resource,
    C: HttpClient,
    S: TokenStore,
{
    api.list::<R>().await.map_err(|e| {
        log::error!("{}: {}", failure, e);
        failure.to_string()
    })
}

/// 加载列表页面的数据
pub async fn load<R, C, S>(api: &PlanificadorApi<C, S>) -> Result<Vec<R>, String>
where
    R: Listed,
    C: HttpClient,
    S: TokenStore,
{
    fetch(api, R::MESSAGES.load_failed).await
}

/// 确认后删除并重新加载
pub async fn remove<R, C, S, P>(api: &PlanificadorApi<C, S>, prompt: &P, id: u64) -> Removal<R>
where
    R: Listed,
    C: HttpClient,
    S: TokenStore,
    P: Prompt + ?Sized,
{
    let messages = R::MESSAGES;
    if !prompt.confirm(messages.confirm_delete) {
        return Removal::Cancelled;
    }

    if let Err(e) = api.delete::<R>(id).await {
        log::error!("{} ({}): {}", messages.delete_failed, id, e);
        prompt.alert(messages.delete_failed);
        return Removal::Failed;
    }

    if let Some(deleted) = messages.deleted {
        prompt.alert(deleted);
    }
    Removal::Reloaded(load::<R, C, S>(api).await)
}

// =========================================================
// 单元测试
// =========================================================
#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::api::tests::{api_with_token, url};
    use planificador_shared::protocol::HttpMethod;
    use serde_json::json;
    use std::cell::RefCell;

    /// 预设回答的对话框，记录所有弹出的文案
    pub struct ScriptedPrompt {
        answer: bool,
        pub shown: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                shown: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.shown.borrow_mut().push(format!("confirm:{}", message));
            self.answer
        }

        fn alert(&self, message: &str) {
            self.shown.borrow_mut().push(format!("alert:{}", message));
        }
    }

    fn plan(id: u64, version: u32) -> serde_json::Value {
        json!({"id": id, "periodo": "2025-I", "version": version, "estado": "pendiente"})
    }

    #[tokio::test]
    async fn test_load_keeps_exactly_the_server_items_in_order() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(
            HttpMethod::Get,
            &url("api/planificaciones/"),
            200,
            json!([plan(9, 1), plan(2, 3), plan(5, 2)]),
        );

        let plans = load::<Plan, _, _>(&api).await.unwrap();
        let ids: Vec<u64> = plans.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_yields_localized_error() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Get, &url("api/evidencias/"), 500, json!({}));

        let err = load::<Evidence, _, _>(&api).await.unwrap_err();
        assert_eq!(err, "Error al cargar evidencias");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_failure_too() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Get, &url("api/actividades/"), 200, json!({"oops": true}));

        let err = load::<Activity, _, _>(&api).await.unwrap_err();
        assert_eq!(err, "Error al cargar actividades");
    }

    #[tokio::test]
    async fn test_confirmed_delete_issues_one_delete_then_one_reload() {
        let (api, client, _) = api_with_token("abc");
        client.mock_raw(HttpMethod::Delete, &url("api/planificaciones/2/"), 204, "");
        client.mock_response(HttpMethod::Get, &url("api/planificaciones/"), 200, json!([plan(9, 1)]));
        let prompt = ScriptedPrompt::answering(true);

        let outcome = remove::<Plan, _, _, _>(&api, &prompt, 2).await;

        match outcome {
            Removal::Reloaded(Ok(plans)) => assert_eq!(plans.len(), 1),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            client.calls(),
            vec![
                (HttpMethod::Delete, url("api/planificaciones/2/")),
                (HttpMethod::Get, url("api/planificaciones/")),
            ]
        );
        assert_eq!(
            *prompt.shown.borrow(),
            vec![
                "confirm:¿Seguro que quieres eliminar esta planificación?".to_string(),
                "alert:Planificación eliminada".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let (api, client, _) = api_with_token("abc");
        let prompt = ScriptedPrompt::answering(false);

        let outcome = remove::<Evidence, _, _, _>(&api, &prompt, 7).await;
        assert_eq!(outcome, Removal::Cancelled);
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_alerts_and_skips_reload() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Delete, &url("api/actividades/3/"), 403, json!({}));
        let prompt = ScriptedPrompt::answering(true);

        let outcome = remove::<Activity, _, _, _>(&api, &prompt, 3).await;
        assert_eq!(outcome, Removal::Failed);
        assert_eq!(client.calls().len(), 1);
        assert_eq!(
            prompt.shown.borrow().last().map(String::as_str),
            Some("alert:Error eliminando actividad")
        );
    }

    #[tokio::test]
    async fn test_detail_delete_reloads_without_success_alert() {
        let (api, client, _) = api_with_token("abc");
        client.mock_raw(HttpMethod::Delete, &url("api/detalles/1/"), 204, "");
        client.mock_response(HttpMethod::Get, &url("api/detalles/"), 200, json!([]));
        let prompt = ScriptedPrompt::answering(true);

        let outcome = remove::<ActivityDetail, _, _, _>(&api, &prompt, 1).await;
        assert_eq!(outcome, Removal::Reloaded(Ok(Vec::new())));
        assert_eq!(prompt.shown.borrow().len(), 1);
    }
}
