//! config 子命令：查看/修改/重置持久化配置。

use anyhow::{Context, anyhow};
use wp_portal::{
    config::{
        DEFAULT_CHAT_WS_URL, DEFAULT_CORE_API_URL, DEFAULT_TRANSACTION_API_URL, PortalConfig,
        PortalPersistedConfig, load_persisted_config, save_persisted_config, validate_api_url,
        validate_chat_ws_url,
    },
    locale::Locale,
};

/// config 子命令动作。
#[derive(Debug, Clone)]
pub(crate) enum ConfigCommand {
    /// 展示持久化配置与生效配置。
    Show,
    /// 写入单个配置项。
    Set { key: String, value: String },
    /// 恢复默认值。
    Reset,
}

pub(crate) fn execute(command: ConfigCommand) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Show => show(),
        ConfigCommand::Set { key, value } => set(&key, &value),
        ConfigCommand::Reset => reset(),
    }
}

fn show() -> anyhow::Result<()> {
    let persisted = load_persisted_config().unwrap_or_default();
    let stored = |value: &Option<String>, fallback: &str| {
        value.clone().unwrap_or_else(|| format!("{fallback} (default)"))
    };
    println!("persisted:");
    println!(
        "  core-api-url: {}",
        stored(&persisted.core_api_url, DEFAULT_CORE_API_URL)
    );
    println!(
        "  transaction-api-url: {}",
        stored(&persisted.transaction_api_url, DEFAULT_TRANSACTION_API_URL)
    );
    println!(
        "  chat-ws-url: {}",
        stored(&persisted.chat_ws_url, DEFAULT_CHAT_WS_URL)
    );
    println!("  language: {}", stored(&persisted.language, "es"));

    match PortalConfig::from_env() {
        Ok(cfg) => {
            println!("effective:");
            println!("  core-api-url: {}", cfg.core_api_url);
            println!("  transaction-api-url: {}", cfg.transaction_api_url);
            println!("  chat-ws-url: {}", cfg.chat_ws_url);
            println!("  language: {}", cfg.locale.tag());
            match cfg.request_timeout {
                Some(timeout) => println!("  request-timeout: {}ms", timeout.as_millis()),
                None => println!("  request-timeout: none"),
            }
            println!("  chat-history: {}", cfg.chat_history);
        }
        Err(err) => println!("effective: invalid ({err:#})"),
    }
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut persisted = load_persisted_config().unwrap_or_default();
    let normalized = apply_setting(&mut persisted, key, value)?;
    save_persisted_config(&persisted)?;
    println!("{key} updated: {normalized}");
    Ok(())
}

/// 校验并写入单个配置项，返回规范化后的值。
fn apply_setting(
    persisted: &mut PortalPersistedConfig,
    key: &str,
    value: &str,
) -> anyhow::Result<String> {
    let normalized = match key {
        "core-api-url" => {
            let url = validate_api_url(value)
                .with_context(|| format!("invalid core api url: {value}"))?;
            persisted.core_api_url = Some(url.clone());
            url
        }
        "transaction-api-url" => {
            let url = validate_api_url(value)
                .with_context(|| format!("invalid transaction api url: {value}"))?;
            persisted.transaction_api_url = Some(url.clone());
            url
        }
        "chat-ws-url" => {
            let url = validate_chat_ws_url(value)
                .with_context(|| format!("invalid chat ws url: {value}"))?;
            persisted.chat_ws_url = Some(url.clone());
            url
        }
        "language" => {
            let tag = Locale::from_tag(value).tag().to_string();
            persisted.language = Some(tag.clone());
            tag
        }
        other => {
            return Err(anyhow!(
                "unknown config key: {other}; expected core-api-url, transaction-api-url, chat-ws-url or language"
            ));
        }
    };
    persisted.version = persisted.version.max(1);
    Ok(normalized)
}

fn reset() -> anyhow::Result<()> {
    save_persisted_config(&PortalPersistedConfig::default())?;
    println!("config reset to defaults");
    Ok(())
}

#[cfg(test)]
mod tests {
    use wp_portal::config::PortalPersistedConfig;

    use super::apply_setting;

    #[test]
    fn settings_are_validated_and_normalized() {
        let mut persisted = PortalPersistedConfig::default();
        let url = apply_setting(&mut persisted, "core-api-url", "https://realm.example/core/")
            .expect("valid url");
        assert_eq!(url, "https://realm.example/core");
        assert_eq!(persisted.core_api_url.as_deref(), Some("https://realm.example/core"));

        assert_eq!(
            apply_setting(&mut persisted, "language", "en-GB").expect("language"),
            "en"
        );
        assert!(apply_setting(&mut persisted, "chat-ws-url", "http://x.example").is_err());
        assert!(apply_setting(&mut persisted, "theme", "dark").is_err());
    }
}
