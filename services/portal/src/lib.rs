//! wowportal 客户端库：后端 API 约定、会话、本地校验与聊天。
//!
//! 所有后端调用都经由 `api::ApiClient::execute`：每次调用生成新的追踪 ID，
//! 严格按端点声明的成功状态码判定，失败统一归为三类 `api::ApiError`。

pub mod api;
pub mod chat;
pub mod config;
pub mod locale;
pub mod portal;
pub mod session;
