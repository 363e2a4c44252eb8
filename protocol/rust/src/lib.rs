// 文件职责：
// 1) 定义 portal 客户端与后端之间共用的线上数据结构（成功/错误 envelope、领域资源、聊天帧）。
// 2) 提供 correlation id 生成与时间戳等跨模块一致的基础函数。
// 3) 作为 Rust 侧协议唯一代码源，供 portal 库、CLI 与测试桩复用。

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod chat;
mod envelope;
mod models;

pub use chat::ChatMessage;
pub use envelope::{ApiEnvelope, GenericServerError};
pub use models::*;

/// 请求级追踪 ID，随 `transaction_id` 请求头发送并回显在错误信息中。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// 为一次出站调用生成新的 ID（UUID v4），永不复用。
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 返回原始字符串。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 生成纳秒精度 UTC 时间戳（RFC3339）。
pub fn now_rfc3339_nanos() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
}

/// 归一化语言标签：`es-MX` -> `es`，空值回退 `es`。
pub fn normalize_language(raw: &str) -> String {
    let primary = raw
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if primary.is_empty() {
        "es".to_string()
    } else {
        primary
    }
}
