use serde_json::{json, Value};

use crate::domain::entities::page::PageEnvelope;
use crate::domain::entities::role::{RoleBrief, RoleSave};
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 角色 API。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("roles", &params).await
}

/// 获取所有激活角色下拉列表。
pub async fn select_list(client: &ApiClient) -> Result<Vec<RoleBrief>, ApiError> {
    client.post("roles/selectRoleLists", &Value::Null).await
}

pub async fn create(client: &ApiClient, data: &RoleSave) -> Result<Value, ApiError> {
    client.post("roles", data).await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<JsonRow, ApiError> {
    client.get(&format!("roles/{id}"), &Value::Null).await
}

pub async fn update(client: &ApiClient, id: &str, data: &RoleSave) -> Result<Value, ApiError> {
    client.post(&format!("roles/{id}/update"), data).await
}

/// 更新角色启用状态。
pub async fn set_status(client: &ApiClient, id: &str, is_active: i64) -> Result<Value, ApiError> {
    client
        .post(&format!("roles/{id}/status"), &json!({ "isActive": is_active }))
        .await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&format!("roles/{id}")).await
}
