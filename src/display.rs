//! 表格单元格的显示规则

use crate::messages::{EMPTY_CELL, NO_OBSERVATIONS};

/// 可选文本，缺失或空白时显示 `-`
pub fn text_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => EMPTY_CELL,
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Sí" } else { "No" }
}

/// 小时数：整数不带小数位，其余保留原值
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        hours.to_string()
    }
}

/// 0 小时也算已填写
pub fn hours_or_dash(hours: Option<f64>) -> String {
    hours.map(format_hours).unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn observations_or_default(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NO_OBSERVATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(text_or_dash(None), "-");
        assert_eq!(text_or_dash(Some("")), "-");
        assert_eq!(text_or_dash(Some("Tutorías")), "Tutorías");
        assert_eq!(yes_no(true), "Sí");
        assert_eq!(yes_no(false), "No");
        assert_eq!(observations_or_default(None), "Ninguna");
    }

    #[test]
    fn test_hours() {
        assert_eq!(hours_or_dash(Some(0.0)), "0");
        assert_eq!(hours_or_dash(Some(12.5)), "12.5");
        assert_eq!(hours_or_dash(None), "-");
        assert_eq!(format_hours(40.0), "40");
    }
}
