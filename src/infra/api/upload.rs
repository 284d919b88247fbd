use std::path::PathBuf;

use serde_json::Value;

use crate::infra::http::client::ApiClient;
use crate::infra::http::error::ApiError;

/// 上传文件，返回存储后的 URL 列表。
pub async fn upload_files(client: &ApiClient, files: Vec<PathBuf>) -> Result<Vec<String>, ApiError> {
    let reply: Value = client.upload("upload/fileList", files).await?;
    Ok(extract_urls(&reply))
}

/// The upload endpoint has answered both as a bare URL array and as a list
/// of `{url}` objects; accept either.
fn extract_urls(reply: &Value) -> Vec<String> {
    let items = match reply {
        Value::Array(items) => items.as_slice(),
        Value::String(url) => return vec![url.clone()],
        _ => return Vec::new(),
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(url.clone()),
            Value::Object(map) => map.get("url").and_then(Value::as_str).map(String::from),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_extract_from_both_reply_shapes() {
        let bare = serde_json::json!(["/files/a.png", "/files/b.png"]);
        assert_eq!(extract_urls(&bare), vec!["/files/a.png", "/files/b.png"]);

        let wrapped = serde_json::json!([{ "url": "/files/c.png" }]);
        assert_eq!(extract_urls(&wrapped), vec!["/files/c.png"]);

        assert!(extract_urls(&serde_json::json!({})).is_empty());
    }
}
