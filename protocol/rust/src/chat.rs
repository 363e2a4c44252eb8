//! 聊天 WebSocket 帧。

use serde::{Deserialize, Serialize};

use crate::now_rfc3339_nanos;

/// 单条聊天消息（上下行同构）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    // 发送者显示名。
    pub sender: String,
    // 消息正文。
    pub content: String,
    // 发送时间（RFC3339）。
    #[serde(default)]
    pub timestamp: String,
}

impl ChatMessage {
    /// 构造一条带当前时间戳的消息。
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: now_rfc3339_nanos(),
        }
    }
}
