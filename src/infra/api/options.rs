use serde_json::{json, Value};

use crate::domain::entities::option_value::{BatchOptionSave, OptionSave};
use crate::domain::entities::page::PageEnvelope;
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 规格值 API，入参出参对称。
/// 分页查询规格值。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("options/page", &params).await
}

pub async fn save(client: &ApiClient, data: &OptionSave) -> Result<Value, ApiError> {
    client.post("options/save", data).await
}

pub async fn update(client: &ApiClient, data: &OptionSave) -> Result<Value, ApiError> {
    client.post("options/update", data).await
}

/// 批量新增规格值，工业品多规格快速录入专用。
pub async fn batch_save(client: &ApiClient, data: &BatchOptionSave) -> Result<Value, ApiError> {
    client.post("options/batchSave", data).await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<OptionSave, ApiError> {
    client.get("options/detail", &json!({ "id": id })).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.post("options/delete", &json!({ "id": id })).await
}

pub async fn set_status(client: &ApiClient, id: &str, is_active: i64) -> Result<Value, ApiError> {
    client
        .post("options/status", &json!({ "id": id, "isActive": is_active }))
        .await
}
