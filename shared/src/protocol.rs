use crate::{
    AcademicPeriod, Activity, ActivityDetail, Credentials, Evidence, NewActivity,
    NewActivityDetail, NewPlan, Plan, ReportResponse, TokenResponse, UserProfile,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a
/// single (non-collection) endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// A REST collection: list with GET, create with POST, delete by id.
pub trait Resource: DeserializeOwned {
    /// Collection path, relative to the base URL, with trailing slash.
    const COLLECTION: &'static str;

    fn id(&self) -> u64;

    fn item_path(id: u64) -> String {
        format!("{}{}/", Self::COLLECTION, id)
    }
}

/// A JSON creation payload for a collection.
pub trait Draft: Serialize {
    type Target: Resource;
}

// =========================================================
// Collections
// =========================================================

impl Resource for AcademicPeriod {
    const COLLECTION: &'static str = "api/periodos/";
    fn id(&self) -> u64 {
        self.id
    }
}

impl Resource for Plan {
    const COLLECTION: &'static str = "api/planificaciones/";
    fn id(&self) -> u64 {
        self.id
    }
}

impl Resource for Activity {
    const COLLECTION: &'static str = "api/actividades/";
    fn id(&self) -> u64 {
        self.id
    }
}

impl Resource for ActivityDetail {
    const COLLECTION: &'static str = "api/detalles/";
    fn id(&self) -> u64 {
        self.id
    }
}

/// Evidence is created with a multipart upload, so it has no `Draft`.
impl Resource for Evidence {
    const COLLECTION: &'static str = "api/evidencias/";
    fn id(&self) -> u64 {
        self.id
    }
}

impl Draft for NewPlan {
    type Target = Plan;
}

impl Draft for NewActivity {
    type Target = Activity;
}

impl Draft for NewActivityDetail {
    type Target = ActivityDetail;
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a token
impl ApiRequest for Credentials {
    type Response = TokenResponse;
    const PATH: &'static str = "api-token-auth/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Read the authenticated user's profile
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "api/protegida/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Read the pre-aggregated summary report
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryReportRequest;

impl ApiRequest for SummaryReportRequest {
    type Response = ReportResponse;
    const PATH: &'static str = "api/informe_resumen/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Multipart field names of the evidence upload
pub const EVIDENCE_DETAIL_FIELD: &str = "detalle_actividad";
pub const EVIDENCE_FILE_FIELD: &str = "nombre_archivo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths_keep_trailing_slash() {
        assert_eq!(Plan::item_path(5), "api/planificaciones/5/");
        assert_eq!(Evidence::item_path(12), "api/evidencias/12/");
        assert_eq!(<NewActivityDetail as Draft>::Target::COLLECTION, "api/detalles/");
    }
}
