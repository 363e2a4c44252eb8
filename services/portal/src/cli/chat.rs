//! 交互式聊天：标准输入逐行发送，收到的消息实时打印。

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use wp_portal::chat::ChatClient;
use wp_shared_protocol::ChatMessage;

use super::CliContext;

pub(crate) async fn run(ctx: &CliContext, sender: &str) -> anyhow::Result<()> {
    let mut client = ChatClient::connect(&ctx.cfg.chat_ws_url, ctx.cfg.chat_history).await?;
    println!("connected to {} as {sender}; /history, /quit", ctx.cfg.chat_ws_url);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("read stdin")? else {
                    break;
                };
                match line.trim() {
                    "" => {}
                    "/quit" => break,
                    "/history" => {
                        for message in client.history() {
                            print_message(&message);
                        }
                    }
                    text => client.send(&ChatMessage::new(sender, text)).await?,
                }
            }
            incoming = client.next_message() => {
                let Some(message) = incoming else {
                    println!("chat connection closed");
                    break;
                };
                print_message(&message);
            }
        }
    }

    client.close().await
}

fn print_message(message: &ChatMessage) {
    println!("[{}] {}: {}", message.timestamp, message.sender, message.content);
}
