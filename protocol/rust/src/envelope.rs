//! 后端统一 envelope：成功包裹与错误包裹。

use serde::{Deserialize, Serialize};

/// 成功响应包裹；`data` 为业务负载。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// 构造只含负载的成功包裹。
    pub fn of(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            code: None,
            transaction_id: None,
        }
    }
}

/// 失败响应体；任何字段都可能缺失或类型不符，逐字段容错。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericServerError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

impl GenericServerError {
    /// 防御式解析错误体：非 JSON 或空体返回空结构；单个字段类型不符只丢弃该字段。
    pub fn parse_lenient(body: &[u8]) -> Self {
        let Ok(serde_json::Value::Object(fields)) = serde_json::from_slice(body) else {
            return Self::default();
        };
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Self {
            message: text("message"),
            code: fields.get("code").and_then(serde_json::Value::as_i64),
            transaction_id: text("transaction_id"),
        }
    }
}
