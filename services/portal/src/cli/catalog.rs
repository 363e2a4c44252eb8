//! 公开目录命令：服务器、在线名册、新闻、订阅计划、商城商品。

use wp_portal::portal::{Roster, search::search_products};

use super::{CliContext, api_failure};

pub(crate) async fn realms(ctx: &CliContext) -> anyhow::Result<()> {
    let servers = ctx.client.get_servers().await.map_err(api_failure)?;
    if servers.is_empty() {
        println!("no realms available");
        return Ok(());
    }
    for server in servers {
        let state = if server.status { "online" } else { "offline" };
        println!(
            "#{:<4} {:<24} {:<16} {}",
            server.id, server.name, server.exp_name, state
        );
    }
    Ok(())
}

pub(crate) async fn online(ctx: &CliContext, server_id: i64) -> anyhow::Result<()> {
    let characters = ctx
        .client
        .get_online_characters(server_id)
        .await
        .map_err(api_failure)?;
    let roster = Roster::build(&characters);
    println!("online: {}", roster.total());
    for line in roster.summary() {
        println!("{line}");
    }
    Ok(())
}

pub(crate) async fn news(ctx: &CliContext, page: u32, size: u32) -> anyhow::Result<()> {
    let items = ctx.client.get_news(page, size).await.map_err(api_failure)?;
    for item in items {
        println!("[{}] {} ({})", item.id, item.title, item.author);
        if !item.summary.trim().is_empty() {
            println!("    {}", item.summary.trim());
        }
    }
    Ok(())
}

pub(crate) async fn plans(ctx: &CliContext) -> anyhow::Result<()> {
    let plans = ctx
        .client
        .get_plans(ctx.cfg.locale.tag())
        .await
        .map_err(api_failure)?;
    for plan in plans {
        let price = if plan.discount > 0 {
            plan.discounted_price
        } else {
            plan.price
        };
        println!(
            "{:<20} {price:>8.2} {} / {} {}",
            plan.name, plan.currency, plan.frequency_value, plan.frequency_type
        );
    }
    Ok(())
}

pub(crate) async fn products(ctx: &CliContext, query: &str) -> anyhow::Result<()> {
    let products = ctx
        .client
        .get_products(ctx.cfg.locale.tag())
        .await
        .map_err(api_failure)?;
    let hits = search_products(&products, query);
    if hits.is_empty() {
        println!("no products match");
        return Ok(());
    }
    for product in hits {
        let price = if product.discount > 0 {
            product.discount_price
        } else {
            product.price
        };
        let unit = if product.use_points { "pts" } else { "" };
        println!("{:<28} {:<16} {price:>8.2}{unit}", product.name, product.category);
    }
    Ok(())
}
