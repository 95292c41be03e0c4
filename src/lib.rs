//! 学术活动规划服务的客户端核心
//!
//! 与平台无关：HTTP 传输与令牌存储通过 [`request::HttpClient`] 和
//! [`session::TokenStore`] 注入，浏览器实现位于 `planificador-frontend`。

pub mod account;
pub mod api;
pub mod collection;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod messages;
pub mod report;
pub mod request;
pub mod route;
pub mod session;

pub use api::{EvidenceUpload, PlanificadorApi};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use request::{HttpClient, HttpRequest, HttpResponse, Upload};
pub use route::{AppRoute, Navigation, resolve_navigation};
pub use session::{Session, TokenStore};
