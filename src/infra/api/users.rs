use serde_json::{json, Value};

use crate::domain::entities::page::PageEnvelope;
use crate::domain::entities::session::UserInfo;
use crate::domain::entities::user::{ChangePassword, ResetPassword, UserSave};
use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::{JsonRow, ParamMap};

/// 用户 API。
pub async fn get_user_info(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get("users/getUserInfo", &Value::Null).await
}

/// 分页查询用户。
pub async fn page(client: &ApiClient, params: ParamMap) -> Result<PageEnvelope<JsonRow>, ApiError> {
    client.get("users/page", &params).await
}

pub async fn detail(client: &ApiClient, id: &str) -> Result<JsonRow, ApiError> {
    client.post("users/detail", &json!({ "id": id })).await
}

/// 新增用户。
pub async fn save(client: &ApiClient, data: &UserSave) -> Result<Value, ApiError> {
    client.post("users/save", data).await
}

/// 更新用户。
pub async fn update(client: &ApiClient, data: &UserSave) -> Result<Value, ApiError> {
    client.post("users/update", data).await
}

/// 个人修改密码。
pub async fn change_password(client: &ApiClient, data: &ChangePassword) -> Result<Value, ApiError> {
    client.post("users/password", data).await
}

/// 管理员重置密码。
pub async fn reset_password(client: &ApiClient, data: &ResetPassword) -> Result<Value, ApiError> {
    client.post("users/reset", data).await
}

/// 启用/禁用用户。
pub async fn set_status(client: &ApiClient, id: &str, is_active: bool) -> Result<Value, ApiError> {
    client
        .post("users/status", &json!({ "id": id, "isActive": is_active }))
        .await
}

pub async fn remove(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.post("users/delete", &json!({ "id": id })).await
}
