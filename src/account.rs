//! 登录与个人资料

use crate::api::PlanificadorApi;
use crate::messages;
use crate::request::HttpClient;
use crate::session::TokenStore;
use planificador_shared::{Credentials, UserProfile};

/// 使用邮箱和密码登录，两者都必须填写
pub async fn sign_in<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(messages::LOGIN_FIELDS_REQUIRED.to_string());
    }

    let credentials = Credentials {
        username: email.to_string(),
        password: password.to_string(),
    };
    api.login(&credentials).await.map_err(|e| {
        log::warn!("login failed for {}: {}", email, e);
        messages::LOGIN_FAILED.to_string()
    })
}

pub async fn load_profile<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
) -> Result<UserProfile, String> {
    api.profile().await.map_err(|e| {
        log::error!("{}: {}", messages::PROFILE_LOAD_FAILED, e);
        messages::PROFILE_LOAD_FAILED.to_string()
    })
}

/// 面板上的问候语，服务端没有提供时使用用户名
pub fn greeting(profile: &UserProfile) -> String {
    match profile.mensaje.as_deref() {
        Some(m) if !m.trim().is_empty() => m.to_string(),
        _ => format!("Bienvenido, {}", profile.username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{anonymous_api, url};
    use planificador_shared::protocol::HttpMethod;
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_in_requires_both_fields() {
        let (api, client, _) = anonymous_api();

        let err = sign_in(&api, "  ", "secret").await.unwrap_err();
        assert_eq!(err, messages::LOGIN_FIELDS_REQUIRED);
        let err = sign_in(&api, "ana@yachaytech.edu.ec", "").await.unwrap_err();
        assert_eq!(err, messages::LOGIN_FIELDS_REQUIRED);
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_credentials_show_fixed_message() {
        let (api, client, store) = anonymous_api();
        client.mock_response(HttpMethod::Post, &url("api-token-auth/"), 400, json!({}));

        let err = sign_in(&api, "ana@yachaytech.edu.ec", "nope").await.unwrap_err();
        assert_eq!(err, "Credenciales incorrectas. Por favor, inténtalo de nuevo.");
        assert!(store.load("token").is_none());
    }

    #[tokio::test]
    async fn test_profile_and_greeting() {
        let (api, client, _) = anonymous_api();
        client.mock_response(HttpMethod::Post, &url("api-token-auth/"), 200, json!({"token": "k"}));
        client.mock_response(
            HttpMethod::Get,
            &url("api/protegida/"),
            200,
            json!({
                "mensaje": "Hola, ana",
                "username": "ana",
                "email": "ana@yachaytech.edu.ec",
                "roles": ["docente", "decano"]
            }),
        );

        sign_in(&api, " ana@yachaytech.edu.ec ", "pw").await.unwrap();
        let profile = load_profile(&api).await.unwrap();
        assert_eq!(greeting(&profile), "Hola, ana");
        assert_eq!(profile.roles_label(), "docente, decano");

        let fallback = UserProfile {
            mensaje: None,
            ..profile
        };
        assert_eq!(greeting(&fallback), "Bienvenido, ana");
    }

    #[tokio::test]
    async fn test_profile_failure_is_localized() {
        let (api, client, _) = anonymous_api();
        client.mock_response(HttpMethod::Get, &url("api/protegida/"), 401, json!({}));

        assert_eq!(
            load_profile(&api).await.unwrap_err(),
            messages::PROFILE_LOAD_FAILED
        );
    }
}
