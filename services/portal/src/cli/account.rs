//! 账号会话命令：登录、登出、当前用户、游戏账号列表。

use anyhow::{Context, bail};
use chrono::Utc;
use tracing::{info, warn};
use wp_portal::{
    api::ApiError,
    session::{SessionAction, SessionCookies},
};

use super::{CliContext, api_failure};

/// 游戏账号列表默认页大小。
const ACCOUNTS_PAGE_SIZE: u32 = 20;

pub(crate) async fn login(ctx: &CliContext, username: &str, password: &str) -> anyhow::Result<()> {
    let data = ctx
        .client
        .login(username, password)
        .await
        .map_err(api_failure)?;

    let mut cookies = SessionCookies::load(Utc::now())?;
    cookies.store_login(&data, Utc::now());
    cookies.save().context("persist session cookies")?;

    let session = ctx
        .session
        .dispatch(SessionAction::LoggedIn {
            username: username.to_string(),
            data,
        })
        .await;
    info!("login succeeded user_id={:?}", session.user_id);
    println!("logged in as {}", session.username);
    if session.pending_validation {
        println!("check your inbox to verify your email address");
    }
    Ok(())
}

pub(crate) async fn logout(ctx: &CliContext) -> anyhow::Result<()> {
    let mut cookies = SessionCookies::load(Utc::now())?;
    cookies.clear();
    cookies.save().context("clear session cookies")?;
    ctx.session.dispatch(SessionAction::LoggedOut).await;
    println!("logged out");
    Ok(())
}

pub(crate) async fn whoami(ctx: &CliContext) -> anyhow::Result<()> {
    let mut cookies = SessionCookies::load(Utc::now())?;
    let jwt = access_token(ctx, &mut cookies).await?;
    let detail = match ctx.client.get_user(&jwt).await {
        Ok(detail) => detail,
        Err(err) => return Err(expire_on_auth_failure(&mut cookies, err)),
    };
    let session = ctx
        .session
        .dispatch(SessionAction::ProfileLoaded(detail))
        .await;

    println!("{} <{}>", session.username, session.email);
    println!("name: {} {}", session.first_name, session.last_name);
    println!("country: {}  language: {}", session.country, session.language);
    if session.admin {
        println!("role: admin");
    }
    if session.pending_validation {
        println!("email not verified");
    }
    Ok(())
}

pub(crate) async fn accounts(ctx: &CliContext) -> anyhow::Result<()> {
    let mut cookies = SessionCookies::load(Utc::now())?;
    let jwt = access_token(ctx, &mut cookies).await?;
    let page = match ctx
        .client
        .get_game_accounts(&jwt, 0, ACCOUNTS_PAGE_SIZE, None)
        .await
    {
        Ok(page) => page,
        Err(err) => return Err(expire_on_auth_failure(&mut cookies, err)),
    };

    if page.accounts.is_empty() {
        println!("no game accounts yet");
        return Ok(());
    }
    for account in &page.accounts {
        println!(
            "#{:<6} {:<20} {:<16} {}",
            account.id,
            account.username,
            account.realm,
            account.expansion.as_deref().unwrap_or("-")
        );
    }
    println!("total: {}", page.size);
    Ok(())
}

/// 取可用访问令牌；访问令牌过期但刷新令牌仍有效时先换新。
async fn access_token(ctx: &CliContext, cookies: &mut SessionCookies) -> anyhow::Result<String> {
    let now = Utc::now();
    if let Some(jwt) = cookies.access_token(now) {
        return Ok(jwt.to_string());
    }
    let Some(refresh) = cookies.refresh_token(now).map(str::to_string) else {
        bail!("not logged in; run `wp-portal login <user> <password>`");
    };

    let data = match ctx.client.refresh_token(&refresh).await {
        Ok(data) => data,
        Err(err) => return Err(expire_on_auth_failure(cookies, err)),
    };
    cookies.store_login(&data, now);
    cookies.save().context("persist refreshed session cookies")?;
    info!("access token refreshed");
    Ok(data.jwt)
}

/// 令牌失效时清空本地 cookie，其余错误原样返回。
fn expire_on_auth_failure(cookies: &mut SessionCookies, err: ApiError) -> anyhow::Error {
    if err.is_auth_expired() {
        cookies.clear();
        if let Err(save_err) = cookies.save() {
            warn!("clear expired session failed: {save_err:#}");
        }
    }
    api_failure(err)
}
