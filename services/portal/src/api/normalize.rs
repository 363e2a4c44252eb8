//! 失败归一化：把传输错误、已分类拒绝与其他异常统一折叠为 `ApiError`。

use tracing::warn;
use wp_shared_protocol::CorrelationId;

use super::error::ApiError;
use crate::locale::Locale;

/// 执行链路内部的失败形态，只在 api 模块内流转。
#[derive(Debug)]
pub(crate) enum CallFailure {
    /// reqwest 发送或读取响应体失败。
    Transport(reqwest::Error),
    /// 分类器已经得出的服务端拒绝。
    Rejected(ApiError),
    /// 成功响应体无法解码为目标类型。
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
    /// 请求构造失败（URL 非法等）。
    Build(String),
}

/// 单次调用的终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Built,
    Sent,
    Succeeded,
    ServerRejected,
    NetworkFailed,
    UnknownFailure,
}

impl CallState {
    /// 由归一化后的错误推导终态。
    pub fn of_error(err: &ApiError) -> Self {
        match err {
            ApiError::ServerRejected { .. } => Self::ServerRejected,
            ApiError::ServiceUnavailable { .. } => Self::NetworkFailed,
            ApiError::Unexpected { .. } => Self::UnknownFailure,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Sent => "sent",
            Self::Succeeded => "succeeded",
            Self::ServerRejected => "server_rejected",
            Self::NetworkFailed => "network_failed",
            Self::UnknownFailure => "unknown_failure",
        }
    }
}

/// 归一化失败；已分类的拒绝原样透传。
pub(crate) fn normalize(
    failure: CallFailure,
    transaction_id: &CorrelationId,
    locale: Locale,
) -> ApiError {
    match failure {
        CallFailure::Rejected(err) => err,
        CallFailure::Transport(err) if is_network_level(&err) => {
            warn!("request did not reach backend transaction_id={transaction_id}: {err}");
            ApiError::ServiceUnavailable {
                message: locale.service_unavailable().to_string(),
            }
        }
        CallFailure::Transport(err) => {
            warn!("request failed transaction_id={transaction_id}: {err}");
            unexpected(transaction_id, locale)
        }
        CallFailure::Decode { endpoint, source } => {
            warn!(
                "decode response failed endpoint={endpoint} transaction_id={transaction_id}: {source}"
            );
            unexpected(transaction_id, locale)
        }
        CallFailure::Build(reason) => {
            warn!("build request failed transaction_id={transaction_id}: {reason}");
            unexpected(transaction_id, locale)
        }
    }
}

/// 连接失败、超时、请求中断、响应体读取中断都视为网络层失败。
fn is_network_level(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request() || err.is_body()
}

fn unexpected(transaction_id: &CorrelationId, locale: Locale) -> ApiError {
    ApiError::Unexpected {
        message: locale.unexpected_error(transaction_id.as_str()),
        transaction_id: transaction_id.to_string(),
    }
}
