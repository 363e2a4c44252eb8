//! 商店接口：分类、商品与购买。

use wp_shared_protocol::{BuyProductRequest, BuyRedirect, Product, ProductCategory};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_CATEGORIES: Endpoint = Endpoint::new(
    "get_categories",
    Service::Core,
    HttpMethod::Get,
    "/api/products/category",
)
.fallback("Could not load the store categories");

pub const GET_PRODUCTS: Endpoint =
    Endpoint::new("get_products", Service::Core, HttpMethod::Get, "/api/products")
        .fallback("Could not load the store");

pub const GET_PRODUCT: Endpoint =
    Endpoint::new("get_product", Service::Core, HttpMethod::Get, "/api/products")
        .fallback("Could not load the product");

pub const BUY_PRODUCT: Endpoint = Endpoint::new(
    "buy_product",
    Service::Transaction,
    HttpMethod::Post,
    "/api/transaction/purchase",
)
.authenticated()
.with_auth_shortcuts()
.fallback("The purchase could not be started");

impl ApiClient {
    pub async fn get_categories(&self) -> ApiResult<Vec<ProductCategory>> {
        self.execute(Call::new(&GET_CATEGORIES)).await
    }

    pub async fn get_products(&self, language: &str) -> ApiResult<Vec<Product>> {
        self.execute(Call::new(&GET_PRODUCTS).query("language", language))
            .await
    }

    /// 按商品参考号查询详情。
    pub async fn get_product(&self, reference: &str) -> ApiResult<Product> {
        self.execute(Call::new(&GET_PRODUCT).segment(reference))
            .await
    }

    /// 发起购买；返回支付网关跳转信息（积分购买 `is_payment=false`）。
    pub async fn buy_product(
        &self,
        jwt: &str,
        request: &BuyProductRequest,
    ) -> ApiResult<BuyRedirect> {
        self.execute(Call::new(&BUY_PRODUCT).bearer(jwt).json(request))
            .await
    }
}
