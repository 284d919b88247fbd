use serde_json::json;

use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;
use crate::usecase::ports::data_source::JsonRow;

/// 字典 API。
pub async fn options(client: &ApiClient, kind: &str) -> Result<Vec<JsonRow>, ApiError> {
    client.get("dicts/options", &json!({ "type": kind })).await
}
