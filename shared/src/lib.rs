use serde::{Deserialize, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;
pub mod serde_helper;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const TOKEN_SCHEME: &str = "Token";
pub const STORAGE_TOKEN_KEY: &str = "token";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    pub id: u64,
    pub nombre_periodo: String,
    #[serde(default)]
    pub numero_semanas: Option<u32>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
}

/// 计划所属的学期
///
/// 服务端视序列化器不同，返回学期主键、学期名称或嵌套对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodRef {
    Id(u64),
    Name(String),
    Nested { nombre_periodo: String },
}

impl fmt::Display for PeriodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodRef::Id(id) => write!(f, "#{}", id),
            PeriodRef::Name(name) => f.write_str(name),
            PeriodRef::Nested { nombre_periodo } => f.write_str(nombre_periodo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Pendiente,
    Aprobado,
    #[serde(untagged)]
    Other(String),
}

impl PlanStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PlanStatus::Pendiente => "pendiente",
            PlanStatus::Aprobado => "aprobado",
            PlanStatus::Other(s) => s,
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "pendiente" => PlanStatus::Pendiente,
            "aprobado" => PlanStatus::Aprobado,
            other => PlanStatus::Other(other.to_string()),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PlanStatus::Aprobado)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u64,
    pub periodo: PeriodRef,
    pub version: u32,
    #[serde(default)]
    pub estado: PlanStatus,
    #[serde(default)]
    pub usuario: Option<u64>,
    #[serde(default)]
    pub comentarios_decano: Option<String>,
}

impl Plan {
    pub fn option_label(&self) -> String {
        format!("Versión {} {}", self.version, self.periodo)
            .trim_end()
            .to_string()
    }
}

/// 实质职能 (función sustantiva)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubstantiveFunction {
    #[default]
    Docencia,
    Investigacion,
    Vinculacion,
    Gestion,
}

impl SubstantiveFunction {
    pub const ALL: [SubstantiveFunction; 4] = [
        SubstantiveFunction::Docencia,
        SubstantiveFunction::Investigacion,
        SubstantiveFunction::Vinculacion,
        SubstantiveFunction::Gestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubstantiveFunction::Docencia => "docencia",
            SubstantiveFunction::Investigacion => "investigacion",
            SubstantiveFunction::Vinculacion => "vinculacion",
            SubstantiveFunction::Gestion => "gestion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubstantiveFunction::Docencia => "Docencia",
            SubstantiveFunction::Investigacion => "Investigación",
            SubstantiveFunction::Vinculacion => "Vinculación",
            SubstantiveFunction::Gestion => "Gestión",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub funcion_sustantiva: SubstantiveFunction,
    pub codigo_item: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "serde_helper::lenient_hours")]
    pub horas_max_periodo: Option<f64>,
    #[serde(default, deserialize_with = "serde_helper::lenient_hours")]
    pub horas_max_semanal: Option<f64>,
    #[serde(default)]
    pub evidencia_requerida: bool,
}

impl Activity {
    pub fn option_label(&self) -> String {
        let descripcion = match self.descripcion.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "-",
        };
        format!("{} - {}", self.codigo_item, descripcion)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    pub id: u64,
    pub planificacion: u64,
    pub actividad: u64,
    /// 只读字段，由服务端从关联的活动中带出
    #[serde(default)]
    pub codigo_item: Option<String>,
    #[serde(default)]
    pub producto_esperado: Option<String>,
    #[serde(default)]
    pub justificacion: Option<String>,
    #[serde(deserialize_with = "serde_helper::required_hours")]
    pub horas_asignadas: f64,
    #[serde(default, deserialize_with = "serde_helper::lenient_hours")]
    pub horas_periodo: Option<f64>,
}

impl ActivityDetail {
    pub fn option_label(&self) -> String {
        let codigo = self.codigo_item.as_deref().unwrap_or("-");
        match self.producto_esperado.as_deref() {
            Some(p) => format!("{} - {}", codigo, p),
            None => format!("{} - Actividad #{}", codigo, self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: u64,
    pub detalle_actividad: u64,
    pub nombre_archivo: String,
    #[serde(default)]
    pub url_archivo: Option<String>,
    pub fecha_subida: String,
    #[serde(default)]
    pub usuario: Option<u64>,
}

impl Evidence {
    /// 可下载链接：优先使用显式 URL
    pub fn link(&self) -> Option<&str> {
        self.url_archivo.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub mensaje: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub escuela: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserProfile {
    pub fn roles_label(&self) -> String {
        self.roles.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HoursByFunction {
    #[serde(default, deserialize_with = "serde_helper::required_hours")]
    pub docencia: f64,
    #[serde(default, deserialize_with = "serde_helper::required_hours")]
    pub investigacion: f64,
    #[serde(default, deserialize_with = "serde_helper::required_hours")]
    pub vinculacion: f64,
    #[serde(default, deserialize_with = "serde_helper::required_hours")]
    pub gestion: f64,
    #[serde(default, deserialize_with = "serde_helper::required_hours")]
    pub total: f64,
}

impl HoursByFunction {
    pub fn for_function(&self, function: SubstantiveFunction) -> f64 {
        match function {
            SubstantiveFunction::Docencia => self.docencia,
            SubstantiveFunction::Investigacion => self.investigacion,
            SubstantiveFunction::Vinculacion => self.vinculacion,
            SubstantiveFunction::Gestion => self.gestion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub docente: String,
    #[serde(default)]
    pub cedula: Option<String>,
    #[serde(default)]
    pub escuela: Option<String>,
    pub periodo: String,
    #[serde(default)]
    pub numero_semanas: Option<u32>,
    pub resumen_actividades: HoursByFunction,
    #[serde(default)]
    pub observaciones: Option<String>,
}

/// 汇总报告接口的两种返回形态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportResponse {
    Report(SummaryReport),
    Empty { mensaje: String },
}

// =========================================================
// 请求载荷 (Payloads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlan {
    pub periodo: u64,
    pub version: u32,
    pub estado: PlanStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub funcion_sustantiva: SubstantiveFunction,
    pub codigo_item: String,
    pub descripcion: String,
    pub horas_max_periodo: Option<f64>,
    pub horas_max_semanal: Option<f64>,
    pub evidencia_requerida: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivityDetail {
    pub planificacion: u64,
    pub actividad: u64,
    pub producto_esperado: Option<String>,
    pub justificacion: Option<String>,
    pub horas_asignadas: f64,
    pub horas_periodo: f64,
}
