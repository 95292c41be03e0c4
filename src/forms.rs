//! 创建表单模块
//!
//! 表单只持有用户输入的原始文本：
//! - `validate` 检查必填字段并构建请求载荷
//! - `submit` 负责发送、重置以及通知父组件刷新

use crate::api::{EvidenceUpload, PlanificadorApi};
use crate::collection;
use crate::error::ApiResult;
use crate::messages;
use crate::request::{HttpClient, Upload};
use crate::session::TokenStore;
use planificador_shared::{
    AcademicPeriod, Activity, ActivityDetail, NewActivity, NewActivityDetail, NewPlan, Plan,
    PlanStatus, SubstantiveFunction,
};

/// 经过校验、可以直接发送的载荷
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Plan(NewPlan),
    Activity(NewActivity),
    Detail(NewActivityDetail),
    Evidence(EvidenceUpload),
}

impl Submission {
    async fn send<C: HttpClient, S: TokenStore>(self, api: &PlanificadorApi<C, S>) -> ApiResult<()> {
        match self {
            Submission::Plan(plan) => api.create(&plan).await,
            Submission::Activity(activity) => api.create(&activity).await,
            Submission::Detail(detail) => api.create(&detail).await,
            Submission::Evidence(upload) => api.upload_evidence(upload).await,
        }
    }
}

/// 创建表单的共同行为
pub trait CreateForm: Default {
    /// 服务端没有返回内容时显示的通用错误
    const FAILURE: &'static str;
    /// 创建成功后的提示；为 None 时不提示
    const SUCCESS: Option<&'static str> = None;

    /// 只检查必填字段，返回载荷或校验提示
    fn validate(&self) -> Result<Submission, &'static str>;

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 校验 -> 发送 -> 成功后重置并回调一次
///
/// 校验失败时不发出任何请求。发送失败时优先返回服务端的原始错误内容。
pub async fn submit<F, C, S>(
    api: &PlanificadorApi<C, S>,
    form: &mut F,
    on_created: impl FnOnce(),
) -> Result<(), String>
where
    F: CreateForm,
    C: HttpClient,
    S: TokenStore,
{
    let submission = form.validate().map_err(str::to_string)?;

    match submission.send(api).await {
        Ok(()) => {
            form.reset();
            on_created();
            Ok(())
        }
        Err(e) => {
            log::error!("{}: {}", F::FAILURE, e);
            Err(e.server_body().unwrap_or_else(|| F::FAILURE.to_string()))
        }
    }
}

// ---------------------------------------------------------
// 输入解析
// ---------------------------------------------------------

/// 解析数字输入，接受逗号作为小数点；空白或非法输入视为未填写
pub fn parse_number(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.replace(',', ".").parse::<f64>().ok().filter(|n| n.is_finite())
}

/// 解析下拉框中选中的 id
pub fn parse_id(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

/// 空文本作为 null 发送
pub fn optional_text(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

// ---------------------------------------------------------
// 各个表单
// ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlanForm {
    pub periodo: String,
    pub version: String,
    pub estado: PlanStatus,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            periodo: String::new(),
            version: "1".to_string(),
            estado: PlanStatus::Pendiente,
        }
    }
}

impl CreateForm for PlanForm {
    const FAILURE: &'static str = messages::PLAN_CREATE_FAILED;
    const SUCCESS: Option<&'static str> = Some(messages::PLAN_CREATED);

    fn validate(&self) -> Result<Submission, &'static str> {
        let periodo = parse_id(&self.periodo).ok_or(messages::PERIOD_REQUIRED)?;
        let version = self
            .version
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or(messages::VERSION_INVALID)?;
        Ok(Submission::Plan(NewPlan {
            periodo,
            version,
            estado: self.estado.clone(),
        }))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityForm {
    pub funcion_sustantiva: SubstantiveFunction,
    pub codigo_item: String,
    pub descripcion: String,
    pub horas_max_periodo: String,
    pub horas_max_semanal: String,
    pub evidencia_requerida: bool,
}

impl CreateForm for ActivityForm {
    const FAILURE: &'static str = messages::ACTIVITY_CREATE_FAILED;

    fn validate(&self) -> Result<Submission, &'static str> {
        let codigo_item = self.codigo_item.trim();
        if codigo_item.is_empty() {
            return Err(messages::ITEM_CODE_REQUIRED);
        }
        Ok(Submission::Activity(NewActivity {
            funcion_sustantiva: self.funcion_sustantiva,
            codigo_item: codigo_item.to_string(),
            descripcion: self.descripcion.trim().to_string(),
            horas_max_periodo: parse_number(&self.horas_max_periodo),
            horas_max_semanal: parse_number(&self.horas_max_semanal),
            evidencia_requerida: self.evidencia_requerida,
        }))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailForm {
    pub planificacion: String,
    pub actividad: String,
    pub producto_esperado: String,
    pub justificacion: String,
    pub horas_asignadas: String,
    pub horas_periodo: String,
}

impl CreateForm for DetailForm {
    const FAILURE: &'static str = messages::DETAIL_CREATE_FAILED;

    fn validate(&self) -> Result<Submission, &'static str> {
        let required = messages::DETAIL_FIELDS_REQUIRED;
        let planificacion = parse_id(&self.planificacion).ok_or(required)?;
        let actividad = parse_id(&self.actividad).ok_or(required)?;
        let horas_asignadas = parse_number(&self.horas_asignadas).ok_or(required)?;
        Ok(Submission::Detail(NewActivityDetail {
            planificacion,
            actividad,
            producto_esperado: optional_text(&self.producto_esperado),
            justificacion: optional_text(&self.justificacion),
            horas_asignadas,
            horas_periodo: parse_number(&self.horas_periodo).unwrap_or(horas_asignadas),
        }))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceForm {
    pub detalle_actividad: String,
    pub archivo: Option<Upload>,
}

impl CreateForm for EvidenceForm {
    const FAILURE: &'static str = messages::EVIDENCE_UPLOAD_FAILED;
    const SUCCESS: Option<&'static str> = Some(messages::EVIDENCE_UPLOADED);

    fn validate(&self) -> Result<Submission, &'static str> {
        let required = messages::EVIDENCE_FIELDS_REQUIRED;
        let detalle_actividad = parse_id(&self.detalle_actividad).ok_or(required)?;
        let archivo = self.archivo.clone().ok_or(required)?;
        Ok(Submission::Evidence(EvidenceUpload {
            detalle_actividad,
            archivo,
        }))
    }
}

// ---------------------------------------------------------
// 下拉选项
// ---------------------------------------------------------

/// 明细表单需要的计划与活动
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailOptions {
    pub plans: Vec<Plan>,
    pub activities: Vec<Activity>,
}

pub async fn period_options<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
) -> Result<Vec<AcademicPeriod>, String> {
    collection::fetch(api, messages::PERIODS_LOAD_FAILED).await
}

/// 并发加载两组选项，任一失败即整体失败
pub async fn detail_options<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
) -> Result<DetailOptions, String> {
    let failure = messages::PLAN_ACTIVITY_OPTIONS_FAILED;
    let (plans, activities) = futures::join!(
        collection::fetch::<Plan, _, _>(api, failure),
        collection::fetch::<Activity, _, _>(api, failure),
    );
    Ok(DetailOptions {
        plans: plans?,
        activities: activities?,
    })
}

pub async fn evidence_options<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
) -> Result<Vec<ActivityDetail>, String> {
    collection::fetch(api, messages::DETAIL_OPTIONS_FAILED).await
}

// =========================================================
// 单元测试
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{api_with_token, url};
    use crate::request::Body;
    use planificador_shared::protocol::HttpMethod;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" 2,5 "), Some(2.5));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_plan_form_defaults_version_and_status() {
        let form = PlanForm {
            periodo: "3".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Ok(Submission::Plan(NewPlan {
                periodo: 3,
                version: 1,
                estado: PlanStatus::Pendiente,
            }))
        );
    }

    #[test]
    fn test_plan_form_rejects_invalid_version() {
        for version in ["0", "-2", "abc", "", "1.5"] {
            let form = PlanForm {
                periodo: "3".into(),
                version: version.into(),
                ..Default::default()
            };
            assert_eq!(form.validate(), Err(messages::VERSION_INVALID), "version {:?}", version);
        }
    }

    #[test]
    fn test_detail_period_hours_default_to_assigned_hours() {
        let form = DetailForm {
            planificacion: "1".into(),
            actividad: "2".into(),
            horas_asignadas: "40".into(),
            justificacion: "  ".into(),
            ..Default::default()
        };
        let Ok(Submission::Detail(detail)) = form.validate() else {
            panic!("form should be valid");
        };
        assert_eq!(detail.horas_periodo, 40.0);
        assert_eq!(detail.justificacion, None);
        assert_eq!(detail.producto_esperado, None);
    }

    #[tokio::test]
    async fn test_missing_required_field_sends_nothing() {
        let (api, client, _) = api_with_token("abc");
        let called = Cell::new(0);

        let mut plan = PlanForm::default();
        let err = submit(&api, &mut plan, || called.set(called.get() + 1))
            .await
            .unwrap_err();
        assert_eq!(err, "Debe seleccionar un periodo académico");

        let mut activity = ActivityForm {
            descripcion: "Clases".into(),
            ..Default::default()
        };
        let err = submit(&api, &mut activity, || called.set(called.get() + 1))
            .await
            .unwrap_err();
        assert_eq!(err, messages::ITEM_CODE_REQUIRED);
        // 输入保留，方便用户补充
        assert_eq!(activity.descripcion, "Clases");

        let mut evidence = EvidenceForm {
            detalle_actividad: "4".into(),
            archivo: None,
        };
        assert!(submit(&api, &mut evidence, || ()).await.is_err());

        assert!(client.calls().is_empty());
        assert_eq!(called.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_creation_resets_and_refreshes_once() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Post, &url("api/actividades/"), 201, json!({"id": 1}));
        let refreshed = Cell::new(0);

        let mut form = ActivityForm {
            funcion_sustantiva: SubstantiveFunction::Gestion,
            codigo_item: "G-01".into(),
            descripcion: "Coordinación".into(),
            horas_max_periodo: "".into(),
            horas_max_semanal: "4".into(),
            evidencia_requerida: true,
        };
        submit(&api, &mut form, || refreshed.set(refreshed.get() + 1))
            .await
            .unwrap();

        assert_eq!(form, ActivityForm::default());
        assert_eq!(refreshed.get(), 1);
        assert_eq!(
            client.requests()[0].body.as_ref().and_then(Body::json_value),
            Some(json!({
                "funcion_sustantiva": "gestion",
                "codigo_item": "G-01",
                "descripcion": "Coordinación",
                "horas_max_periodo": null,
                "horas_max_semanal": 4.0,
                "evidencia_requerida": true
            }))
        );
    }

    #[tokio::test]
    async fn test_server_rejection_shows_raw_body_and_keeps_input() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(
            HttpMethod::Post,
            &url("api/detalles/"),
            400,
            json!({"horas_asignadas": ["Excede el máximo"]}),
        );
        let refreshed = Cell::new(false);

        let mut form = DetailForm {
            planificacion: "1".into(),
            actividad: "2".into(),
            horas_asignadas: "900".into(),
            ..Default::default()
        };
        let err = submit(&api, &mut form, || refreshed.set(true))
            .await
            .unwrap_err();

        assert_eq!(err, r#"{"horas_asignadas":["Excede el máximo"]}"#);
        assert_eq!(form.horas_asignadas, "900");
        assert!(!refreshed.get());
    }

    #[tokio::test]
    async fn test_offline_failure_uses_generic_message() {
        let (api, client, _) = api_with_token("abc");
        client.mock_offline(HttpMethod::Post, &url("api/evidencias/"));

        let mut form = EvidenceForm {
            detalle_actividad: "4".into(),
            archivo: Some(Upload {
                file_name: "acta.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: vec![1, 2, 3],
            }),
        };
        let err = submit(&api, &mut form, || ()).await.unwrap_err();
        assert_eq!(err, messages::EVIDENCE_UPLOAD_FAILED);
        assert!(form.archivo.is_some());
    }

    #[tokio::test]
    async fn test_detail_options_load_both_collections() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(
            HttpMethod::Get,
            &url("api/planificaciones/"),
            200,
            json!([{"id": 1, "periodo": "2025-I", "version": 1, "estado": "aprobado"}]),
        );
        client.mock_response(
            HttpMethod::Get,
            &url("api/actividades/"),
            200,
            json!([{"id": 2, "funcion_sustantiva": "docencia", "codigo_item": "D-1"}]),
        );

        let options = detail_options(&api).await.unwrap();
        assert_eq!(options.plans[0].option_label(), "Versión 1 2025-I");
        assert_eq!(options.activities[0].option_label(), "D-1 - -");
    }

    #[tokio::test]
    async fn test_detail_options_fail_when_either_collection_fails() {
        let (api, client, _) = api_with_token("abc");
        client.mock_response(HttpMethod::Get, &url("api/planificaciones/"), 200, json!([]));
        client.mock_response(HttpMethod::Get, &url("api/actividades/"), 500, json!({}));

        let err = detail_options(&api).await.unwrap_err();
        assert_eq!(err, messages::PLAN_ACTIVITY_OPTIONS_FAILED);
    }
}
