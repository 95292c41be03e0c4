//! 宽松的数值反序列化
//!
//! 服务端的小时字段可能是数字，也可能是 DecimalField 输出的字符串 ("12.50")。

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_hours<E: Error>(self) -> Result<Option<f64>, E> {
        match self {
            NumberOrText::Number(n) => Ok(Some(n)),
            NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid hours value: {:?}", s))),
        }
    }
}

/// `null`、空字符串 → `None`；数字或数字字符串 → `Some`
pub fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(value) => value.into_hours(),
        None => Ok(None),
    }
}

/// 与 `lenient_hours` 相同，但缺失值按 0 处理
pub fn required_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_hours(deserializer).map(|h| h.unwrap_or(0.0))
}
