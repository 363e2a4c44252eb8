//! 角色接口：账号下角色与在线角色。

use wp_shared_protocol::{Character, OnlineCharacter};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_CHARACTERS: Endpoint =
    Endpoint::new("get_characters", Service::Core, HttpMethod::Get, "/api/characters")
        .authenticated()
        .fallback("Could not load your characters");

/// 在线角色接口直接返回裸数组。
pub const GET_ONLINE_CHARACTERS: Endpoint = Endpoint::new(
    "get_online_characters",
    Service::Core,
    HttpMethod::Get,
    "/api/characters/online",
)
.bare()
.fallback("Could not load the online players");

impl ApiClient {
    pub async fn get_characters(
        &self,
        jwt: &str,
        account_id: i64,
        server_id: i64,
    ) -> ApiResult<Vec<Character>> {
        self.execute(
            Call::new(&GET_CHARACTERS)
                .bearer(jwt)
                .query("account_id", account_id)
                .query("server_id", server_id),
        )
        .await
    }

    pub async fn get_online_characters(&self, server_id: i64) -> ApiResult<Vec<OnlineCharacter>> {
        self.execute(Call::new(&GET_ONLINE_CHARACTERS).query("server_id", server_id))
            .await
    }
}
