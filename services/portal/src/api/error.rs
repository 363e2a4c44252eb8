//! 调用失败的统一分类：服务端拒绝、服务不可用、未预期错误。

use thiserror::Error;

/// 401 短路文案。
pub const TOKEN_EXPIRATION_MESSAGE: &str = "Token expiration";
/// 403 短路文案。
pub const ROLE_NOT_AUTHORIZED_MESSAGE: &str = "Role not authorized";

/// API 调用对上层暴露的唯一错误类型；`Display` 即可直接展示给用户的文案。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 后端返回非 2xx（或未声明的 2xx）。
    #[error("{message}")]
    ServerRejected {
        message: String,
        /// 错误体中的业务码；缺失时为 HTTP 状态码。
        code: i64,
        /// 实际 HTTP 状态码，不受错误体影响。
        status: u16,
        transaction_id: String,
    },
    /// 请求未到达后端（连接失败、超时、连接中断）。
    #[error("{message}")]
    ServiceUnavailable { message: String },
    /// 其他未归类失败；message 已内嵌追踪 ID。
    #[error("{message}")]
    Unexpected {
        message: String,
        transaction_id: String,
    },
}

impl ApiError {
    /// 构造服务端拒绝错误。
    pub fn server_rejected(
        message: impl Into<String>,
        code: i64,
        status: u16,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self::ServerRejected {
            message: message.into(),
            code,
            status,
            transaction_id: transaction_id.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ServerRejected { message, .. }
            | Self::ServiceUnavailable { message }
            | Self::Unexpected { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::ServerRejected { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 追踪 ID；服务不可用时没有可追踪的服务端记录。
    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            Self::ServerRejected { transaction_id, .. }
            | Self::Unexpected { transaction_id, .. } => Some(transaction_id),
            Self::ServiceUnavailable { .. } => None,
        }
    }

    /// 是否为令牌过期（调用方应清理会话并要求重新登录）；只看 HTTP 状态码。
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::ServerRejected { status: 401, .. })
    }

    /// 弹窗文案：结构化错误附带追踪 ID，服务不可用不附带。
    pub fn alert_text(&self) -> String {
        match self {
            Self::ServerRejected {
                message,
                transaction_id,
                ..
            } => format!("{message} (TransactionId: {transaction_id})"),
            Self::ServiceUnavailable { message } | Self::Unexpected { message, .. } => {
                message.clone()
            }
        }
    }
}

/// API 调用结果：成功负载或三类错误之一。
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn alert_text_shows_transaction_id_only_when_traceable() {
        let rejected = ApiError::server_rejected("Realm not found", 404, 404, "t-1");
        assert_eq!(rejected.alert_text(), "Realm not found (TransactionId: t-1)");

        let unavailable = ApiError::ServiceUnavailable {
            message: "Servicios no disponibles. Intenta más tarde.".to_string(),
        };
        assert_eq!(
            unavailable.alert_text(),
            "Servicios no disponibles. Intenta más tarde."
        );
        assert_eq!(unavailable.transaction_id(), None);
    }

    #[test]
    fn display_is_user_message() {
        let err = ApiError::Unexpected {
            message: "An unexpected error occurred. TransactionId: t-9".to_string(),
            transaction_id: "t-9".to_string(),
        };
        assert_eq!(err.to_string(), err.message());
        assert_eq!(err.transaction_id(), Some("t-9"));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn auth_expiry_follows_http_status_not_body_code() {
        assert!(ApiError::server_rejected("Token expiration", 401, 401, "t").is_auth_expired());
        assert!(!ApiError::server_rejected("Role not authorized", 403, 403, "t").is_auth_expired());

        let overridden = ApiError::server_rejected("Session revoked", 9001, 401, "t");
        assert!(overridden.is_auth_expired());
        assert_eq!(overridden.code(), Some(9001));
        assert_eq!(overridden.status(), Some(401));

        let body_says_401 = ApiError::server_rejected("Bad input", 401, 400, "t");
        assert!(!body_says_401.is_auth_expired());
    }
}
