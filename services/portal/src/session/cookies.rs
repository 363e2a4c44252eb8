//! 会话令牌 cookie jar：登录后保存访问令牌与刷新令牌，按过期时间自动失效。

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wp_shared_protocol::LoginData;

use crate::config::session_file_path;

pub const ACCESS_TOKEN_COOKIE: &str = "ACCESS_TOKEN";
pub const REFRESH_TOKEN_COOKIE: &str = "REFRESH_TOKEN";

/// 服务端与 JWT 都未给出过期时间时的兜底有效期。
const ACCESS_TOKEN_FALLBACK_HOURS: i64 = 1;
const REFRESH_TOKEN_FALLBACK_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredCookie {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// 渲染为 `Set-Cookie` 头值。
    pub fn to_set_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Expires={}; Secure; SameSite=Strict",
            self.name,
            self.value,
            self.expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CookieFile {
    #[serde(default)]
    cookies: Vec<StoredCookie>,
}

/// 令牌 jar；`path` 为空时只存在于内存。
#[derive(Debug, Clone, Default)]
pub struct SessionCookies {
    path: Option<PathBuf>,
    cookies: Vec<StoredCookie>,
}

impl SessionCookies {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// 从默认位置加载；无法定位用户目录时退化为内存 jar。
    pub fn load(now: DateTime<Utc>) -> anyhow::Result<Self> {
        match session_file_path() {
            Some(path) => Self::load_from(&path, now),
            None => {
                warn!("home directory unavailable, session cookies kept in memory");
                Ok(Self::in_memory())
            }
        }
    }

    /// 从指定文件加载，丢弃已过期条目。
    pub fn load_from(path: &Path, now: DateTime<Utc>) -> anyhow::Result<Self> {
        let mut jar = Self {
            path: Some(path.to_path_buf()),
            cookies: Vec::new(),
        };
        if !path.exists() {
            return Ok(jar);
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read session file: {}", path.display()))?;
        let file: CookieFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse session file: {}", path.display()))?;
        let total = file.cookies.len();
        jar.cookies = file
            .cookies
            .into_iter()
            .filter(|cookie| cookie.is_live(now))
            .collect();
        if jar.cookies.len() != total {
            debug!("dropped {} expired session cookies", total - jar.cookies.len());
        }
        Ok(jar)
    }

    /// 写入登录返回的两枚令牌。
    pub fn store_login(&mut self, data: &LoginData, now: DateTime<Utc>) {
        let access_expires = data
            .expiration_date
            .as_deref()
            .and_then(parse_server_expiration)
            .or_else(|| jwt_expiration(&data.jwt))
            .unwrap_or(now + Duration::hours(ACCESS_TOKEN_FALLBACK_HOURS));
        let refresh_expires = jwt_expiration(&data.refresh_token)
            .unwrap_or(now + Duration::days(REFRESH_TOKEN_FALLBACK_DAYS));

        self.set(ACCESS_TOKEN_COOKIE, &data.jwt, access_expires);
        if !data.refresh_token.trim().is_empty() {
            self.set(REFRESH_TOKEN_COOKIE, &data.refresh_token, refresh_expires);
        }
    }

    fn set(&mut self, name: &str, value: &str, expires_at: DateTime<Utc>) {
        self.cookies.retain(|cookie| cookie.name != name);
        self.cookies.push(StoredCookie {
            name: name.to_string(),
            value: value.to_string(),
            expires_at,
        });
    }

    fn live_value(&self, name: &str, now: DateTime<Utc>) -> Option<&str> {
        self.cookies
            .iter()
            .find(|cookie| cookie.name == name && cookie.is_live(now))
            .map(|cookie| cookie.value.as_str())
    }

    pub fn access_token(&self, now: DateTime<Utc>) -> Option<&str> {
        self.live_value(ACCESS_TOKEN_COOKIE, now)
    }

    pub fn refresh_token(&self, now: DateTime<Utc>) -> Option<&str> {
        self.live_value(REFRESH_TOKEN_COOKIE, now)
    }

    pub fn cookies(&self) -> &[StoredCookie] {
        &self.cookies
    }

    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.cookies.iter().map(StoredCookie::to_set_cookie).collect()
    }

    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// 持久化到加载时的文件；内存 jar 直接返回。
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create session dir: {}", parent.display()))?;
        }
        let file = CookieFile {
            cookies: self.cookies.clone(),
        };
        let raw = serde_json::to_string_pretty(&file).context("serialize session cookies")?;
        fs::write(path, raw).with_context(|| format!("write session file: {}", path.display()))
    }
}

/// 读取 JWT payload 的 `exp`（秒级时间戳）；不校验签名。
pub fn jwt_expiration(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}

/// 服务端过期时间：RFC3339，或不带时区的本地格式（按 UTC 处理）。
fn parse_server_expiration(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
