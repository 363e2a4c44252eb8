//! 公会接口。

use wp_shared_protocol::{AttachGuildRequest, Guild, GuildsPage};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_GUILDS: Endpoint =
    Endpoint::new("get_guilds", Service::Core, HttpMethod::Get, "/api/guilds")
        .fallback("Could not load the guilds");

pub const GET_GUILD: Endpoint =
    Endpoint::new("get_guild", Service::Core, HttpMethod::Get, "/api/guilds/claim")
        .fallback("Could not load the guild");

pub const ATTACH_GUILD: Endpoint =
    Endpoint::new("attach_guild", Service::Core, HttpMethod::Put, "/api/guilds/attach")
        .authenticated()
        .empty()
        .fallback("Could not join the guild");

pub const UNLINK_GUILD: Endpoint =
    Endpoint::new("unlink_guild", Service::Core, HttpMethod::Delete, "/api/guilds/unlink")
        .accepting(&[200, 204])
        .authenticated()
        .empty()
        .fallback("Could not leave the guild");

impl ApiClient {
    /// 分页查询公会，`search` 为服务端模糊匹配关键字。
    pub async fn get_guilds(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
    ) -> ApiResult<GuildsPage> {
        self.execute(
            Call::new(&GET_GUILDS)
                .query("page", page)
                .query("size", size)
                .query_opt("search", search.filter(|value| !value.trim().is_empty())),
        )
        .await
    }

    pub async fn get_guild(&self, guild_id: i64, server_id: i64) -> ApiResult<Guild> {
        self.execute(
            Call::new(&GET_GUILD)
                .segment(guild_id)
                .query("server_id", server_id),
        )
        .await
    }

    pub async fn attach_guild(&self, jwt: &str, request: &AttachGuildRequest) -> ApiResult<()> {
        self.execute(Call::new(&ATTACH_GUILD).bearer(jwt).json(request))
            .await
    }

    pub async fn unlink_guild(
        &self,
        jwt: &str,
        server_id: i64,
        account_id: i64,
        character_id: i64,
    ) -> ApiResult<()> {
        self.execute(
            Call::new(&UNLINK_GUILD)
                .bearer(jwt)
                .query("server_id", server_id)
                .query("account_id", account_id)
                .query("character_id", character_id),
        )
        .await
    }
}
