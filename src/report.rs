//! 汇总报告

use crate::api::PlanificadorApi;
use crate::display::format_hours;
use crate::messages;
use crate::request::HttpClient;
use crate::session::TokenStore;
use planificador_shared::{ReportResponse, SubstantiveFunction, SummaryReport};

/// 打印时保留的 DOM 子树
pub const PRINT_ROOT_ID: &str = "informe-print";

/// 报告表格的一行
#[derive(Debug, Clone, PartialEq)]
pub struct HoursRow {
    pub label: &'static str,
    pub hours: String,
    pub is_total: bool,
}

/// 获取服务端预先计算好的报告
pub async fn load_report<C: HttpClient, S: TokenStore>(
    api: &PlanificadorApi<C, S>,
) -> Result<ReportResponse, String> {
    api.summary_report().await.map_err(|e| {
        log::error!("{}: {}", messages::REPORT_LOAD_FAILED, e);
        messages::REPORT_LOAD_FAILED.to_string()
    })
}

/// 四个职能加合计；合计直接使用服务端的值
pub fn hours_rows(report: &SummaryReport) -> Vec<HoursRow> {
    let summary = &report.resumen_actividades;
    SubstantiveFunction::ALL
        .into_iter()
        .map(|function| HoursRow {
            label: function.label(),
            hours: format_hours(summary.for_function(function)),
            is_total: false,
        })
        .chain(std::iter::once(HoursRow {
            label: "Total",
            hours: format_hours(summary.total),
            is_total: true,
        }))
        .collect()
}
