//! 已加载列表的本地搜索（不区分大小写的子串匹配）。

use wp_shared_protocol::{Guild, Product};

/// 返回 `key` 中包含 `query` 的条目；空白查询返回全部。
pub fn filter_by<'a, T, F>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| key(*item).to_lowercase().contains(&needle))
        .collect()
}

pub fn search_guilds<'a>(guilds: &'a [Guild], query: &str) -> Vec<&'a Guild> {
    filter_by(guilds, query, |guild| guild.name.as_str())
}

pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    filter_by(products, query, |product| product.name.as_str())
}
