//! 服务器（realm）接口：列表、落地页、管理端创建与解绑。

use wp_shared_protocol::{CreateRealmRequest, RealmVdp, ServerModel};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_SERVERS: Endpoint =
    Endpoint::new("get_servers", Service::Core, HttpMethod::Get, "/api/realm")
        .fallback("Could not load the available realms");

pub const GET_REALM_VDP: Endpoint =
    Endpoint::new("get_realm_vdp", Service::Core, HttpMethod::Get, "/api/realm/vdp")
        .fallback("Could not load the realm page");

pub const CREATE_REALM: Endpoint =
    Endpoint::new("create_realm", Service::Core, HttpMethod::Post, "/api/realm/create")
        .accepting(&[201])
        .authenticated()
        .with_auth_shortcuts()
        .empty()
        .fallback("Could not register the realm");

pub const UNLINK_REALM: Endpoint =
    Endpoint::new("unlink_realm", Service::Core, HttpMethod::Delete, "/api/realm")
        .accepting(&[200, 204])
        .authenticated()
        .with_auth_shortcuts()
        .empty()
        .fallback("Could not unlink the realm");

impl ApiClient {
    /// 公开服务器列表。
    pub async fn get_servers(&self) -> ApiResult<Vec<ServerModel>> {
        self.execute(Call::new(&GET_SERVERS)).await
    }

    pub async fn get_realm_vdp(&self, realm_id: i64) -> ApiResult<RealmVdp> {
        self.execute(Call::new(&GET_REALM_VDP).segment(realm_id))
            .await
    }

    pub async fn create_realm(&self, jwt: &str, request: &CreateRealmRequest) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_REALM).bearer(jwt).json(request))
            .await
    }

    /// 解绑服务器；200 与 204 都视为成功。
    pub async fn unlink_realm(&self, jwt: &str, realm_id: i64) -> ApiResult<()> {
        self.execute(
            Call::new(&UNLINK_REALM)
                .bearer(jwt)
                .query("realm_id", realm_id),
        )
        .await
    }
}
