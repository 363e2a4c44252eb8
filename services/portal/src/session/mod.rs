//! 会话上下文：当前登录用户资料的进程内共享状态。
//!
//! 所有修改都经由 `reduce` 计算出完整的新值后整体替换，
//! 并发更新时后写者生效。

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use wp_shared_protocol::{LoginData, UserDetail, normalize_language};

pub mod cookies;

pub use cookies::{SessionCookies, jwt_expiration};

/// 当前用户资料（令牌另存于 cookie jar）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub logged_in: bool,
    pub user_id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// 两位语言码。
    pub language: String,
    pub country: String,
    pub avatar_url: Option<String>,
    pub admin: bool,
    /// 邮箱尚未验证。
    pub pending_validation: bool,
}

impl Default for UserSession {
    fn default() -> Self {
        Self {
            logged_in: false,
            user_id: None,
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            language: "es".to_string(),
            country: String::new(),
            avatar_url: None,
            admin: false,
            pending_validation: false,
        }
    }
}

/// 会话变更动作。
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// 登录或注册成功。
    LoggedIn { username: String, data: LoginData },
    /// 拉取到完整资料。
    ProfileLoaded(UserDetail),
    LanguageChanged(String),
    /// 资料编辑；`None` 表示保持原值。
    ProfileEdited {
        first_name: Option<String>,
        last_name: Option<String>,
        country: Option<String>,
    },
    /// 登出：回到匿名状态，仅保留语言偏好。
    LoggedOut,
}

/// 纯函数：由当前值与动作计算新值，不修改入参。
pub fn reduce(current: &UserSession, action: SessionAction) -> UserSession {
    match action {
        SessionAction::LoggedIn { username, data } => UserSession {
            logged_in: true,
            user_id: Some(data.user_id).filter(|id| *id > 0),
            username,
            language: data
                .language
                .as_deref()
                .map(normalize_language)
                .unwrap_or_else(|| current.language.clone()),
            avatar_url: data.avatar_url,
            admin: data.admin,
            pending_validation: data.pending_validation,
            ..current.clone()
        },
        SessionAction::ProfileLoaded(detail) => UserSession {
            logged_in: true,
            user_id: Some(detail.id),
            username: detail.username,
            email: detail.email,
            first_name: detail.first_name,
            last_name: detail.last_name,
            language: normalize_language(&detail.language),
            country: detail.country,
            avatar_url: detail.avatar_url.or_else(|| current.avatar_url.clone()),
            admin: detail.admin,
            pending_validation: !detail.verified,
        },
        SessionAction::LanguageChanged(language) => UserSession {
            language: normalize_language(&language),
            ..current.clone()
        },
        SessionAction::ProfileEdited {
            first_name,
            last_name,
            country,
        } => UserSession {
            first_name: first_name.unwrap_or_else(|| current.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| current.last_name.clone()),
            country: country.unwrap_or_else(|| current.country.clone()),
            ..current.clone()
        },
        SessionAction::LoggedOut => UserSession {
            language: current.language.clone(),
            ..UserSession::default()
        },
    }
}

/// 会话存储句柄；克隆后共享同一份状态。
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<UserSession>>,
}

impl SessionStore {
    pub fn new(initial: UserSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// 读取当前值的快照。
    pub async fn snapshot(&self) -> UserSession {
        self.inner.read().await.clone()
    }

    /// 应用动作并整体替换，返回新值。
    pub async fn dispatch(&self, action: SessionAction) -> UserSession {
        let mut guard = self.inner.write().await;
        let next = reduce(&guard, action);
        debug!(
            "session updated logged_in={} language={}",
            next.logged_in, next.language
        );
        *guard = next.clone();
        next
    }

    /// 直接以新值覆盖。
    pub async fn replace(&self, next: UserSession) {
        *self.inner.write().await = next;
    }
}
