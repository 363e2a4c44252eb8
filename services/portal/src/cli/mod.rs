//! portal CLI 分发：目录浏览、账号会话、配置与聊天。

use anyhow::{anyhow, bail};
use wp_portal::{
    api::{ApiClient, ApiError},
    config::PortalConfig,
    session::SessionStore,
};

mod account;
mod catalog;
mod chat;
mod settings;

use settings::ConfigCommand;

/// 需要访问后端的命令共用的运行时依赖。
pub(crate) struct CliContext {
    pub(crate) cfg: PortalConfig,
    pub(crate) client: ApiClient,
    pub(crate) session: SessionStore,
}

impl CliContext {
    fn from_env() -> anyhow::Result<Self> {
        let cfg = PortalConfig::from_env()?;
        let client = ApiClient::from_config(&cfg)?;
        Ok(Self {
            cfg,
            client,
            session: SessionStore::default(),
        })
    }
}

/// 把 API 错误转为终端可读的弹窗文案。
pub(crate) fn api_failure(err: ApiError) -> anyhow::Error {
    anyhow!(err.alert_text())
}

/// 解析并执行 portal CLI。
pub(crate) async fn dispatch(args: &[String]) -> anyhow::Result<()> {
    let cmd = args.first().map(|value| value.trim()).unwrap_or("");
    if cmd.is_empty() || matches!(cmd, "-h" | "--help" | "help") {
        print_root_help();
        return Ok(());
    }

    match cmd {
        "version" => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "config" => {
            let command = parse_config_command(&args[1..])?;
            settings::execute(command)
        }
        "realms" => catalog::realms(&CliContext::from_env()?).await,
        "online" => {
            let server_id = parse_number::<i64>(args.get(1), "server id")?
                .ok_or_else(|| anyhow!("usage: wp-portal online <server_id>"))?;
            catalog::online(&CliContext::from_env()?, server_id).await
        }
        "news" => {
            let page = parse_number::<u32>(args.get(1), "page")?.unwrap_or(0);
            let size = parse_number::<u32>(args.get(2), "size")?.unwrap_or(10);
            catalog::news(&CliContext::from_env()?, page, size).await
        }
        "plans" => catalog::plans(&CliContext::from_env()?).await,
        "products" => {
            let query = args[1..].join(" ");
            catalog::products(&CliContext::from_env()?, &query).await
        }
        "login" => {
            let (Some(username), Some(password)) = (args.get(1), args.get(2)) else {
                bail!("usage: wp-portal login <username> <password>");
            };
            account::login(&CliContext::from_env()?, username, password).await
        }
        "logout" => account::logout(&CliContext::from_env()?).await,
        "whoami" => account::whoami(&CliContext::from_env()?).await,
        "accounts" => account::accounts(&CliContext::from_env()?).await,
        "chat" => {
            let sender = args.get(1).map(String::as_str).unwrap_or("guest");
            chat::run(&CliContext::from_env()?, sender).await
        }
        other => Err(anyhow!(
            "unknown command: {other}; run `wp-portal --help` for usage"
        )),
    }
}

/// 解析 `config` 子命令。
fn parse_config_command(args: &[String]) -> anyhow::Result<ConfigCommand> {
    match args.first().map(String::as_str) {
        None | Some("show") => Ok(ConfigCommand::Show),
        Some("set") => {
            let (Some(key), Some(value)) = (args.get(1), args.get(2)) else {
                bail!("usage: wp-portal config set <key> <value>");
            };
            Ok(ConfigCommand::Set {
                key: key.clone(),
                value: value.clone(),
            })
        }
        Some("reset") => Ok(ConfigCommand::Reset),
        Some(other) => Err(anyhow!(
            "unsupported config command: {other}; run `wp-portal --help`"
        )),
    }
}

/// 可选数字参数；缺省返回 `None`。
fn parse_number<T: std::str::FromStr>(
    raw: Option<&String>,
    label: &str,
) -> anyhow::Result<Option<T>> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow!("invalid {label}: {value}")),
    }
}

fn print_root_help() {
    println!(
        "wp-portal {}

USAGE:
  wp-portal <command> [args]

COMMANDS:
  realms                      list available realms
  online <server_id>          online characters grouped by faction, race and class
  news [page] [size]          latest news
  plans                       subscription plans
  products [query]            store products, optionally filtered by name
  login <user> <password>     sign in and store session cookies
  logout                      clear session cookies
  whoami                      show the signed-in profile
  accounts                    list game accounts
  config show|set <key> <value>|reset
                              inspect or change persisted settings
  chat [name]                 join the realm chat (/history, /quit)
  version                     print version",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::{parse_config_command, parse_number, settings::ConfigCommand};

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn config_defaults_to_show() {
        assert!(matches!(
            parse_config_command(&[]).expect("show"),
            ConfigCommand::Show
        ));
        assert!(matches!(
            parse_config_command(&args(&["set", "language", "en"])).expect("set"),
            ConfigCommand::Set { ref key, ref value } if key == "language" && value == "en"
        ));
        assert!(parse_config_command(&args(&["set", "language"])).is_err());
        assert!(parse_config_command(&args(&["wipe"])).is_err());
    }

    #[test]
    fn numbers_are_optional_but_strict() {
        assert_eq!(parse_number::<u32>(None, "page").expect("none"), None);
        let raw = "3".to_string();
        assert_eq!(parse_number::<u32>(Some(&raw), "page").expect("some"), Some(3));
        let bad = "x".to_string();
        assert!(parse_number::<u32>(Some(&bad), "page").is_err());
    }
}
