use serde_json::Value;

use crate::domain::entities::session::{LoginParams, LoginReply, RegisterParams};
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;

/// 认证模块 API。
pub async fn login(client: &ApiClient, params: &LoginParams) -> Result<LoginReply, ApiError> {
    client.post("auth/login", params).await
}

/// 申请开通/注册租户。
pub async fn register(client: &ApiClient, params: &RegisterParams) -> Result<Value, ApiError> {
    client.post("tenants/onboard", params).await
}

pub async fn logout(client: &ApiClient) -> Result<Value, ApiError> {
    client.post("auth/logout", &Value::Null).await
}
