use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::{FormPart, HttpClient, HttpRequest, HttpResponse, Upload};
use crate::session::{Session, TokenStore};
use planificador_shared::protocol::{
    ApiRequest, Draft, EVIDENCE_DETAIL_FIELD, EVIDENCE_FILE_FIELD, HttpMethod,
    ProfileRequest, Resource, SummaryReportRequest,
};
use planificador_shared::{
    Credentials, HEADER_AUTHORIZATION, ReportResponse, TokenResponse, UserProfile,
};

/// 证据上传（multipart）
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceUpload {
    pub detalle_actividad: u64,
    pub archivo: Upload,
}

impl EvidenceUpload {
    fn into_parts(self) -> Vec<FormPart> {
        vec![
            FormPart::text(EVIDENCE_DETAIL_FIELD, self.detalle_actividad.to_string()),
            FormPart::file(EVIDENCE_FILE_FIELD, self.archivo),
        ]
    }
}

/// 远程规划服务的客户端
///
/// 所有请求都经过 `prepare`：会话中有令牌时附加 `Authorization: Token <t>`。
#[derive(Debug, Clone, PartialEq)]
pub struct PlanificadorApi<C: HttpClient, S: TokenStore> {
    config: ClientConfig,
    client: C,
    session: Session<S>,
}

impl<C: HttpClient, S: TokenStore> PlanificadorApi<C, S> {
    pub fn new(config: ClientConfig, client: C, session: Session<S>) -> Self {
        Self {
            config,
            client,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// 请求拦截器
    fn prepare(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let req = HttpRequest::new(&self.config.url(path), method);
        match self.session.authorization() {
            Some(value) => req.with_header(HEADER_AUTHORIZATION, &value),
            None => req,
        }
    }

    /// 发送请求，非 2xx 视为错误
    async fn execute(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = req.method;
        let url = req.url.clone();
        let res = self.client.send(req).await.inspect_err(|e| {
            log::error!("{} {} failed: {}", method.as_str(), url, e);
        })?;

        if !res.ok() {
            log::warn!("{} {} -> {}", method.as_str(), url, res.status);
            return Err(ApiError::Status {
                status: res.status,
                body: res.body,
            });
        }
        Ok(res)
    }

    async fn call<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let req = self.prepare(R::METHOD, R::PATH);
        let req = match R::METHOD {
            HttpMethod::Post => req.with_json(request)?,
            HttpMethod::Get | HttpMethod::Delete => req,
        };
        self.execute(req).await?.json()
    }

    // ---------------------------------------------------------
    // 认证
    // ---------------------------------------------------------

    /// 用邮箱和密码换取令牌，成功后开始会话
    ///
    /// 只有令牌确实写入存储后才算登录成功。
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let TokenResponse { token } = self.call(credentials).await?;
        if token.trim().is_empty() {
            return Err(ApiError::Session("server returned a blank token".to_string()));
        }
        if !self.session.begin(&token) || !self.session.is_active() {
            self.session.end();
            return Err(ApiError::Session("token store rejected the token".to_string()));
        }
        Ok(())
    }

    pub fn logout(&self) {
        self.session.end();
    }

    // ---------------------------------------------------------
    // 集合操作
    // ---------------------------------------------------------

    /// 获取集合列表，保持服务端顺序
    pub async fn list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        let req = self.prepare(HttpMethod::Get, R::COLLECTION);
        self.execute(req).await?.json()
    }

    /// 创建资源；响应体不参与后续流程，因此不解析
    pub async fn create<D: Draft>(&self, draft: &D) -> ApiResult<()> {
        let req = self
            .prepare(HttpMethod::Post, D::Target::COLLECTION)
            .with_json(draft)?;
        self.execute(req).await.map(|_| ())
    }

    /// 以 multipart 上传证据文件
    pub async fn upload_evidence(&self, upload: EvidenceUpload) -> ApiResult<()> {
        let req = self
            .prepare(HttpMethod::Post, <planificador_shared::Evidence as Resource>::COLLECTION)
            .with_multipart(upload.into_parts());
        self.execute(req).await.map(|_| ())
    }

    pub async fn delete<R: Resource>(&self, id: u64) -> ApiResult<()> {
        let req = self.prepare(HttpMethod::Delete, &R::item_path(id));
        self.execute(req).await.map(|_| ())
    }

    // ---------------------------------------------------------
    // 单一资源
    // ---------------------------------------------------------

    pub async fn profile(&self) -> ApiResult<UserProfile> {
        self.call(&ProfileRequest).await
    }

    pub async fn summary_report(&self) -> ApiResult<ReportResponse> {
        self.call(&SummaryReportRequest).await
    }
}

// =========================================================
// 单元测试
// =========================================================
#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::request::Body;
    use crate::request::tests::MockHttpClient;
    use crate::session::tests::MemoryTokenStore;
    use planificador_shared::{NewPlan, Plan, PlanStatus};
    use serde_json::json;

    pub const BASE: &str = "http://localhost:8000/";

    pub type TestApi = PlanificadorApi<MockHttpClient, MemoryTokenStore>;

    /// 已登录的测试客户端
    pub fn api_with_token(token: &str) -> (TestApi, MockHttpClient, MemoryTokenStore) {
        let client = MockHttpClient::new();
        let store = MemoryTokenStore::with_token(token);
        let api = PlanificadorApi::new(
            ClientConfig::new(BASE),
            client.clone(),
            Session::new(store.clone()),
        );
        (api, client, store)
    }

    pub fn anonymous_api() -> (TestApi, MockHttpClient, MemoryTokenStore) {
        let client = MockHttpClient::new();
        let store = MemoryTokenStore::new();
        let api = PlanificadorApi::new(
            ClientConfig::new(BASE),
            client.clone(),
            Session::new(store.clone()),
        );
        (api, client, store)
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", BASE, path)
    }

    #[tokio::test]
    async fn test_interceptor_attaches_token_when_present() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Get, &url("api/planificaciones/"), 200, json!([]));

        api.list::<Plan>().await.unwrap();

        let reqs = client.requests();
        assert_eq!(reqs[0].header("Authorization"), Some("Token abc"));
    }

    #[tokio::test]
    async fn test_interceptor_sends_unauthenticated_without_token() {
        let (api, client, _) = anonymous_api();
        client.mock_response(HttpMethod::Get, &url("api/planificaciones/"), 401, json!({"detail": "x"}));

        let err = api.list::<Plan>().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(client.requests()[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_begins_session_and_later_requests_carry_token() {
        let (api, client, store) = anonymous_api();
        client.mock_response(HttpMethod::Post, &url("api-token-auth/"), 200, json!({"token": "t0k"}));
        client.mock_response(HttpMethod::Get, &url("api/protegida/"), 200, json!({
            "username": "ana@yachaytech.edu.ec",
            "email": "ana@yachaytech.edu.ec",
            "roles": ["docente"]
        }));

        api.login(&Credentials {
            username: "ana@yachaytech.edu.ec".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
        assert_eq!(store.load("token").as_deref(), Some("t0k"));

        let profile = api.profile().await.unwrap();
        assert_eq!(profile.roles, vec!["docente".to_string()]);

        let reqs = client.requests();
        assert!(reqs[0].header("Authorization").is_none());
        assert_eq!(
            reqs[0].body.as_ref().and_then(Body::json_value),
            Some(json!({"username": "ana@yachaytech.edu.ec", "password": "secret"}))
        );
        assert_eq!(reqs[1].header("Authorization"), Some("Token t0k"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_empty() {
        let (api, client, store) = anonymous_api();
        client.mock_response(
            HttpMethod::Post,
            &url("api-token-auth/"),
            400,
            json!({"non_field_errors": ["Credenciales incorrectas."]}),
        );

        let creds = Credentials {
            username: "x@yachaytech.edu.ec".into(),
            password: "bad".into(),
        };
        assert!(api.login(&creds).await.is_err());
        assert!(store.load("token").is_none());
    }

    /// 写入总是失败的存储（例如浏览器禁用了 localStorage）
    #[derive(Debug, Clone, Default, PartialEq)]
    struct RejectingStore;

    impl TokenStore for RejectingStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> bool {
            false
        }

        fn remove(&self, _key: &str) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_login_fails_when_token_cannot_be_stored() {
        let client = MockHttpClient::new();
        let api = PlanificadorApi::new(
            ClientConfig::new(BASE),
            client.clone(),
            Session::new(RejectingStore),
        );
        client.mock_response(HttpMethod::Post, &url("api-token-auth/"), 200, json!({"token": "t0k"}));

        let creds = Credentials {
            username: "ana@yachaytech.edu.ec".into(),
            password: "secret".into(),
        };
        let err = api.login(&creds).await.unwrap_err();
        assert!(matches!(err, ApiError::Session(_)));
        assert!(!api.session().is_active());
    }

    #[tokio::test]
    async fn test_login_rejects_blank_token() {
        let (api, client, store) = anonymous_api();
        client.mock_response(HttpMethod::Post, &url("api-token-auth/"), 200, json!({"token": "   "}));

        let creds = Credentials {
            username: "ana@yachaytech.edu.ec".into(),
            password: "secret".into(),
        };
        assert!(matches!(api.login(&creds).await, Err(ApiError::Session(_))));
        assert!(store.load("token").is_none());
        assert!(!api.session().is_active());
    }

    #[tokio::test]
    async fn test_logout_removes_token_from_following_requests() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Get, &url("api/planificaciones/"), 200, json!([]));

        api.logout();
        api.list::<Plan>().await.unwrap();
        assert!(client.requests()[0].header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_create_posts_json_to_collection() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Post, &url("api/planificaciones/"), 201, json!({"id": 1}));

        api.create(&NewPlan {
            periodo: 3,
            version: 2,
            estado: PlanStatus::Aprobado,
        })
        .await
        .unwrap();

        let req = &client.requests()[0];
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(
            req.body.as_ref().and_then(Body::json_value),
            Some(json!({"periodo": 3, "version": 2, "estado": "aprobado"}))
        );
    }

    #[tokio::test]
    async fn test_upload_evidence_is_multipart_with_both_fields() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Post, &url("api/evidencias/"), 201, json!({}));

        let archivo = Upload {
            file_name: "informe.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        };
        api.upload_evidence(EvidenceUpload {
            detalle_actividad: 8,
            archivo: archivo.clone(),
        })
        .await
        .unwrap();

        let req = &client.requests()[0];
        // 多部分表单的 Content-Type 由传输层生成
        assert!(req.header("Content-Type").is_none());
        assert_eq!(req.header("Authorization"), Some("Token abc"));
        assert_eq!(
            req.body,
            Some(Body::Multipart(vec![
                FormPart::text("detalle_actividad", "8"),
                FormPart::file("nombre_archivo", archivo),
            ]))
        );
    }

    #[tokio::test]
    async fn test_delete_targets_item_path() {
        let (api, client, _) = api_with_token("abc");
        client.mock_raw(HttpMethod::Delete, &url("api/actividades/4/"), 204, "");

        api.delete::<planificador_shared::Activity>(4).await.unwrap();
        assert_eq!(
            client.calls(),
            vec![(HttpMethod::Delete, url("api/actividades/4/"))]
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let (api, client, _) = api_with_token("abc");
        client.mock_offline(HttpMethod::Get, &url("api/informe_resumen/"));

        let err = api.summary_report().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
