use serde_json::{json, Value};

use crate::domain::entities::attribute::AttributeDetail;
use crate::domain::entities::page::PageEnvelope;
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 属性 API。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("attributes/page", &params).await
}

pub async fn save(client: &ApiClient, data: &AttributeDetail) -> Result<Value, ApiError> {
    client.post("attributes/save", data).await
}

pub async fn update(client: &ApiClient, data: &AttributeDetail) -> Result<Value, ApiError> {
    client.post("attributes/update", data).await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<AttributeDetail, ApiError> {
    client.get("attributes/detail", &json!({ "id": id })).await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.post("attributes/delete", &json!({ "id": id })).await
}

pub async fn set_status(client: &ApiClient, id: &str, is_active: i64) -> Result<Value, ApiError> {
    client
        .post("attributes/status", &json!({ "id": id, "isActive": is_active }))
        .await
}
