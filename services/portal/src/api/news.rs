//! 新闻接口。

use wp_shared_protocol::{CreateNewsRequest, News};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

/// 新闻列表返回裸数组。
pub const GET_NEWS: Endpoint =
    Endpoint::new("get_news", Service::Core, HttpMethod::Get, "/api/news")
        .bare()
        .fallback("Could not load the news");

pub const GET_NEWS_BY_ID: Endpoint =
    Endpoint::new("get_news_by_id", Service::Core, HttpMethod::Get, "/api/news")
        .fallback("Could not load the article");

pub const CREATE_NEWS: Endpoint =
    Endpoint::new("create_news", Service::Core, HttpMethod::Post, "/api/news")
        .accepting(&[200, 201])
        .authenticated()
        .with_auth_shortcuts()
        .empty()
        .fallback("The article could not be published");

impl ApiClient {
    pub async fn get_news(&self, page: u32, size: u32) -> ApiResult<Vec<News>> {
        self.execute(
            Call::new(&GET_NEWS)
                .query("page", page)
                .query("size", size),
        )
        .await
    }

    pub async fn get_news_by_id(&self, news_id: i64) -> ApiResult<News> {
        self.execute(Call::new(&GET_NEWS_BY_ID).segment(news_id))
            .await
    }

    pub async fn create_news(&self, jwt: &str, request: &CreateNewsRequest) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_NEWS).bearer(jwt).json(request))
            .await
    }
}
