use serde_json::{json, Value};

use crate::domain::entities::category::{CategoryDetail, CategorySave};
use crate::domain::entities::page::PageEnvelope;
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 类目管理 API：产品分类定义及属性绑定关系维护。
/// 分页查询类目，后端默认按 createdAt 正序返回。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("categories/page", &params).await
}

pub async fn save(client: &ApiClient, data: &CategorySave) -> Result<Value, ApiError> {
    client.post("categories/save", data).await
}

/// 更新类目，attributeIds 全量覆盖，同步中间表关联。
pub async fn update(client: &ApiClient, data: &CategorySave) -> Result<Value, ApiError> {
    client.post("categories/update", data).await
}

/// 类目详情，attributeIds 数组支持表单一键回显。
pub async fn detail(client: &ApiClient, id: &str) -> Result<CategoryDetail, ApiError> {
    client.get("categories/detail", &json!({ "id": id })).await
}

/// 删除类目（伪删除，后端 softRemove 保留轨迹）。
pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.post("categories/delete", &json!({ "id": id })).await
}

/// 修改类目状态 (1:启用, 0:禁用)。禁用后录入产品时不可选择。
pub async fn set_status(client: &ApiClient, id: &str, is_active: i64) -> Result<Value, ApiError> {
    client
        .post("categories/status", &json!({ "id": id, "isActive": is_active }))
        .await
}
