//! portal 命令行入口：初始化日志后交给 CLI 分发。

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let _log_runtime = logging::init("portal")?;
    tracing::debug!("portal cli started args={}", args.len());
    cli::dispatch(&args).await
}
