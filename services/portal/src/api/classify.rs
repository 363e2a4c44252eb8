//! 响应分类：按端点约定把 (状态码, 响应体) 判定为成功负载或服务端拒绝。

use serde::de::DeserializeOwned;
use serde_json::Value;
use wp_shared_protocol::{ApiEnvelope, CorrelationId, GenericServerError};

use super::{
    endpoint::{Endpoint, PayloadShape},
    error::{ApiError, ROLE_NOT_AUTHORIZED_MESSAGE, TOKEN_EXPIRATION_MESSAGE},
    normalize::CallFailure,
};

/// 判定一次响应。纯函数，不触网。
pub(crate) fn classify<T: DeserializeOwned>(
    endpoint: &Endpoint,
    status: u16,
    body: &[u8],
    transaction_id: &CorrelationId,
) -> Result<T, CallFailure> {
    if !endpoint.accepts(status) {
        return Err(CallFailure::Rejected(reject(
            endpoint,
            status,
            body,
            transaction_id,
        )));
    }
    decode_success(endpoint.payload, body).map_err(|source| CallFailure::Decode {
        endpoint: endpoint.name,
        source,
    })
}

/// 构造服务端拒绝错误；401/403 短路优先于响应体解析。
fn reject(
    endpoint: &Endpoint,
    status: u16,
    body: &[u8],
    transaction_id: &CorrelationId,
) -> ApiError {
    if endpoint.auth_shortcuts {
        match status {
            401 => {
                return ApiError::server_rejected(
                    TOKEN_EXPIRATION_MESSAGE,
                    401,
                    401,
                    transaction_id.as_str(),
                );
            }
            403 => {
                return ApiError::server_rejected(
                    ROLE_NOT_AUTHORIZED_MESSAGE,
                    403,
                    403,
                    transaction_id.as_str(),
                );
            }
            _ => {}
        }
    }

    let parsed = GenericServerError::parse_lenient(body);
    let message = parsed
        .message
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| endpoint.fallback_message.to_string());
    let code = parsed.code.unwrap_or_else(|| i64::from(status));
    ApiError::server_rejected(message, code, status, transaction_id.as_str())
}

/// 按负载形态解码成功响应体。
fn decode_success<T: DeserializeOwned>(
    shape: PayloadShape,
    body: &[u8],
) -> Result<T, serde_json::Error> {
    let blank = body.iter().all(u8::is_ascii_whitespace);
    match shape {
        PayloadShape::Empty => serde_json::from_value(Value::Null),
        _ if blank => serde_json::from_value(Value::Null),
        PayloadShape::Bare => serde_json::from_slice(body),
        PayloadShape::Envelope => {
            let envelope: ApiEnvelope<Value> = serde_json::from_slice(body)?;
            serde_json::from_value(envelope.data.unwrap_or(Value::Null))
        }
    }
}
