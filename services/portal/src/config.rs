//! 配置模块职责：
//! 1. 读取 portal 运行所需的环境变量与持久化配置文件，并提供默认值。
//! 2. 校验核心服务、交易服务与聊天服务地址。
//! 3. 提供配置落盘与本地数据目录定位等通用能力。

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{chat::DEFAULT_CHAT_HISTORY, locale::Locale};

/// 核心服务默认地址（开发态默认本机）。
pub const DEFAULT_CORE_API_URL: &str = "http://localhost:8091/core";
/// 交易服务默认地址。
pub const DEFAULT_TRANSACTION_API_URL: &str = "http://localhost:8092/transaction";
/// 聊天 WebSocket 默认地址。
pub const DEFAULT_CHAT_WS_URL: &str = "ws://localhost:8091/core/ws/chat";
/// 持久化配置版本。
const PORTAL_CONFIG_VERSION: u8 = 1;
/// 聊天历史上限的硬上限，防止误配置占用过多内存。
const MAX_CHAT_HISTORY: usize = 1000;

/// portal 持久化配置（仅存可覆盖项，不存令牌）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalPersistedConfig {
    /// 配置结构版本。
    #[serde(default = "default_config_version")]
    pub version: u8,
    #[serde(default)]
    pub core_api_url: Option<String>,
    #[serde(default)]
    pub transaction_api_url: Option<String>,
    #[serde(default)]
    pub chat_ws_url: Option<String>,
    /// 界面语言（`es` / `en`）。
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for PortalPersistedConfig {
    fn default() -> Self {
        Self {
            version: PORTAL_CONFIG_VERSION,
            core_api_url: None,
            transaction_api_url: None,
            chat_ws_url: None,
            language: None,
        }
    }
}

fn default_config_version() -> u8 {
    PORTAL_CONFIG_VERSION
}

/// portal 运行时配置。
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// 核心服务 base URL。
    pub core_api_url: String,
    /// 交易服务 base URL。
    pub transaction_api_url: String,
    /// 聊天 WebSocket 地址。
    pub chat_ws_url: String,
    pub locale: Locale,
    /// 请求超时；默认不设超时，与浏览器 fetch 行为一致。
    pub request_timeout: Option<Duration>,
    /// 聊天消息环形缓冲容量。
    pub chat_history: usize,
}

impl PortalConfig {
    /// 从环境变量与配置文件构建配置：环境变量 > 配置文件 > 默认值。
    pub fn from_env() -> anyhow::Result<Self> {
        let persisted = load_persisted_config().unwrap_or_default();
        Self::from_sources(&persisted, |key| std::env::var(key).ok())
    }

    /// 以给定的持久化配置与变量查找函数构建配置，便于测试注入。
    pub fn from_sources<F>(persisted: &PortalPersistedConfig, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, stored: &Option<String>, fallback: &str| -> String {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
                .or_else(|| {
                    stored
                        .as_ref()
                        .map(|raw| raw.trim().to_string())
                        .filter(|value| !value.is_empty())
                })
                .unwrap_or_else(|| fallback.to_string())
        };

        let raw_core = pick("WP_CORE_API_URL", &persisted.core_api_url, DEFAULT_CORE_API_URL);
        let core_api_url = validate_api_url(&raw_core)
            .with_context(|| format!("invalid core api url: {raw_core}"))?;

        let raw_transaction = pick(
            "WP_TRANSACTION_API_URL",
            &persisted.transaction_api_url,
            DEFAULT_TRANSACTION_API_URL,
        );
        let transaction_api_url = validate_api_url(&raw_transaction)
            .with_context(|| format!("invalid transaction api url: {raw_transaction}"))?;

        let raw_chat = pick("WP_CHAT_WS_URL", &persisted.chat_ws_url, DEFAULT_CHAT_WS_URL);
        let chat_ws_url = validate_chat_ws_url(&raw_chat)
            .with_context(|| format!("invalid chat ws url: {raw_chat}"))?;

        let locale = Locale::from_tag(&pick("WP_LANGUAGE", &persisted.language, "es"));

        let request_timeout = lookup("WP_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_millis);

        let chat_history = lookup("WP_CHAT_HISTORY")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .map(|value| value.min(MAX_CHAT_HISTORY))
            .unwrap_or(DEFAULT_CHAT_HISTORY);

        Ok(Self {
            core_api_url,
            transaction_api_url,
            chat_ws_url,
            locale,
            request_timeout,
            chat_history,
        })
    }
}

/// 校验 API base URL：仅允许 http/https 且必须有主机；去掉查询与片段及末尾 `/`。
pub fn validate_api_url(raw: &str) -> anyhow::Result<String> {
    let parsed = parse_with_host(raw)?;
    match parsed.scheme() {
        "http" | "https" => Ok(strip_trailing_slash(parsed)),
        other => Err(anyhow!("api url must use http:// or https://, got {other}")),
    }
}

/// 校验聊天地址：仅允许 ws/wss。
pub fn validate_chat_ws_url(raw: &str) -> anyhow::Result<String> {
    let parsed = parse_with_host(raw)?;
    match parsed.scheme() {
        "ws" | "wss" => Ok(strip_trailing_slash(parsed)),
        other => Err(anyhow!("chat url must use ws:// or wss://, got {other}")),
    }
}

fn parse_with_host(raw: &str) -> anyhow::Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("url cannot be empty"));
    }
    let mut parsed = Url::parse(trimmed).context("malformed url")?;
    if parsed.host().is_none() {
        return Err(anyhow!("url missing host"));
    }
    parsed.set_query(None);
    parsed.set_fragment(None);
    Ok(parsed)
}

fn strip_trailing_slash(url: Url) -> String {
    url.as_str().trim_end_matches('/').to_string()
}

/// 读取持久化配置；文件不存在时返回默认值。
pub fn load_persisted_config() -> anyhow::Result<PortalPersistedConfig> {
    let Some(path) = config_file_path() else {
        return Ok(PortalPersistedConfig::default());
    };
    load_persisted_config_from(&path)
}

/// 从指定路径读取持久化配置。
pub fn load_persisted_config_from(path: &Path) -> anyhow::Result<PortalPersistedConfig> {
    if !path.exists() {
        return Ok(PortalPersistedConfig::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read portal config failed: {}", path.display()))?;
    let mut parsed: PortalPersistedConfig = serde_json::from_str(&raw)
        .with_context(|| format!("decode portal config failed: {}", path.display()))?;
    if parsed.version == 0 {
        parsed.version = PORTAL_CONFIG_VERSION;
    }
    Ok(parsed)
}

/// 持久化配置到 `~/.config/wowportal/config.json`。
pub fn save_persisted_config(config: &PortalPersistedConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow!("HOME not set, cannot persist portal config"));
    };
    save_persisted_config_to(&path, config)
}

pub fn save_persisted_config_to(path: &Path, config: &PortalPersistedConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("create portal config directory failed: {}", parent.display())
        })?;
    }
    let payload = serde_json::to_string_pretty(config).context("encode portal config failed")?;
    fs::write(path, format!("{payload}\n"))
        .with_context(|| format!("write portal config failed: {}", path.display()))?;
    Ok(())
}

/// 本地数据目录：`~/.config/wowportal`。
pub fn portal_data_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(Path::new(&home).join(".config").join("wowportal"))
}

/// 配置文件路径。
pub fn config_file_path() -> Option<PathBuf> {
    portal_data_dir().map(|dir| dir.join("config.json"))
}

/// 会话 cookie 文件路径。
pub fn session_file_path() -> Option<PathBuf> {
    portal_data_dir().map(|dir| dir.join("session.json"))
}
