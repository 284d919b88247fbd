use serde_json::json;

use crate::domain::entities::tenant::TenantDetail;
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;

/// 租户 API。
pub async fn detail(client: &ApiClient, id: &str) -> Result<TenantDetail, ApiError> {
    client.post("tenants/detail", &json!({ "id": id })).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    data: &TenantDetail,
) -> Result<TenantDetail, ApiError> {
    client.patch(&format!("tenants/{id}"), data).await
}
