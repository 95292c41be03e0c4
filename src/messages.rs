//! 界面文案（西班牙语）

/// 列表页面的固定文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMessages {
    pub load_failed: &'static str,
    pub confirm_delete: &'static str,
    /// 删除成功后的提示；为 None 时不弹出
    pub deleted: Option<&'static str>,
    pub delete_failed: &'static str,
    pub empty: &'static str,
}

pub const PLANS: ListMessages = ListMessages {
    load_failed: "Error al obtener planificaciones",
    confirm_delete: "¿Seguro que quieres eliminar esta planificación?",
    deleted: Some("Planificación eliminada"),
    delete_failed: "Error eliminando planificación",
    empty: "No tienes planificaciones registradas.",
};

pub const ACTIVITIES: ListMessages = ListMessages {
    load_failed: "Error al cargar actividades",
    confirm_delete: "¿Seguro que quieres eliminar esta actividad?",
    deleted: Some("Actividad eliminada"),
    delete_failed: "Error eliminando actividad",
    empty: "No hay actividades registradas.",
};

pub const DETAILS: ListMessages = ListMessages {
    load_failed: "Error al cargar detalles",
    confirm_delete: "¿Seguro que quieres eliminar este detalle?",
    deleted: None,
    delete_failed: "Error al eliminar detalle",
    empty: "No hay detalles de actividad registrados.",
};

pub const EVIDENCES: ListMessages = ListMessages {
    load_failed: "Error al cargar evidencias",
    confirm_delete: "¿Seguro que quieres eliminar esta evidencia?",
    deleted: Some("Evidencia eliminada"),
    delete_failed: "Error eliminando evidencia",
    empty: "No hay evidencias registradas.",
};

pub const PERIODS_LOAD_FAILED: &str = "Error al cargar periodos";

// 表单
pub const PERIOD_REQUIRED: &str = "Debe seleccionar un periodo académico";
pub const VERSION_INVALID: &str = "La versión debe ser un número entero mayor que cero";
pub const PLAN_CREATE_FAILED: &str = "Error al crear planificación";
pub const PLAN_CREATED: &str = "Planificación creada correctamente";
pub const ITEM_CODE_REQUIRED: &str = "El código del ítem es obligatorio";
pub const ACTIVITY_CREATE_FAILED: &str = "Error al crear la actividad";
pub const DETAIL_FIELDS_REQUIRED: &str = "Completa todos los campos obligatorios";
pub const DETAIL_CREATE_FAILED: &str = "Error al crear detalle de actividad";
pub const EVIDENCE_FIELDS_REQUIRED: &str = "Por favor, selecciona un archivo y una actividad.";
pub const EVIDENCE_UPLOAD_FAILED: &str = "Error al subir la evidencia";
pub const EVIDENCE_UPLOADED: &str = "Evidencia subida correctamente";
pub const DETAIL_OPTIONS_FAILED: &str = "No se pudieron cargar las actividades";
pub const PLAN_ACTIVITY_OPTIONS_FAILED: &str = "Error al cargar planificaciones o actividades";

// 登录与会话
pub const LOGIN_FIELDS_REQUIRED: &str = "Por favor completa todos los campos";
pub const LOGIN_FAILED: &str = "Credenciales incorrectas. Por favor, inténtalo de nuevo.";

// 个人资料与报告
pub const PROFILE_LOAD_FAILED: &str = "Error al obtener el perfil";
pub const REPORT_LOAD_FAILED: &str = "Error al cargar el informe";
pub const NO_OBSERVATIONS: &str = "Ninguna";

/// 可选文本的占位符
pub const EMPTY_CELL: &str = "-";
