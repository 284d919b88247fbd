use serde_json::{json, Value};

use crate::domain::entities::page::PageEnvelope;
use crate::domain::entities::product::{ProductDetail, ProductSave};
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 产品管理 API，适配引出棒 WMS 物料体系。
/// 分页查询产品列表，返回包含关联类目信息的数据。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("products/page", &params).await
}

/// 产品详情，用于编辑表单回显。
pub async fn detail(client: &ApiClient, id: &str) -> Result<ProductDetail, ApiError> {
    client.get("products/detail", &json!({ "id": id })).await
}

/// 新增产品，后端执行 SKU 自动生成逻辑。
pub async fn save(client: &ApiClient, data: &ProductSave) -> Result<Value, ApiError> {
    client.post("products/save", data).await
}

pub async fn update(client: &ApiClient, data: &ProductSave) -> Result<Value, ApiError> {
    client.post("products/update", data).await
}

pub async fn set_status(client: &ApiClient, id: &str, is_active: i64) -> Result<Value, ApiError> {
    client
        .post("products/status", &json!({ "id": id, "isActive": is_active }))
        .await
}

/// 删除产品（伪删除）。
pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.post("products/delete", &json!({ "id": id })).await
}
