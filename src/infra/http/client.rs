use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::domain::entities::menu::Route;
use crate::domain::entities::session::Session;
use crate::ui::widgets::toast::Toasts;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// 全局统一的响应结构。
#[derive(Debug, Deserialize)]
struct Reply {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

/// HTTP collaborator for every API module. Cheap to clone; owns the base
/// URL, bearer-token injection and the envelope/transport error policy, so
/// callers above it only ever see `ApiError`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    http: reqwest::Client,
    session: Signal<Session>,
    route: Signal<Route>,
    toasts: Toasts,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ApiClient {
    pub fn new(session: Signal<Session>, route: Signal<Route>, toasts: Toasts) -> Self {
        let base_url = std::env::var("WMS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let http = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(err) => {
                log::warn!("falling back to default http client: {err}");
                reqwest::Client::new()
            }
        };
        Self {
            inner: Arc::new(ApiClientInner {
                base_url,
                http,
                session,
                route,
                toasts,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self
            .inner
            .http
            .get(self.url(path))
            .query(&query_pairs(params));
        self.execute(path, request).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.inner.http.post(self.url(path)).json(body);
        self.execute(path, request).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.inner.http.patch(self.url(path)).json(body);
        self.execute(path, request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.inner.http.delete(self.url(path));
        self.execute(path, request).await
    }

    /// 上传文件，支持多文件，自动构建 multipart 表单。
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<PathBuf>,
    ) -> Result<T, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let name = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("file")
                .to_string();
            let bytes = std::fs::read(&file)
                .map_err(|err| ApiError::Parse(format!("读取文件失败 {}: {err}", file.display())))?;
            form = form.part("file", reqwest::multipart::Part::bytes(bytes).file_name(name));
        }
        let request = self.inner.http.post(self.url(path)).multipart(form);
        self.execute(path, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.inner.session.peek().token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let message = if err.is_timeout() || err.is_connect() {
                    "服务器无响应，请检查后端服务是否启动".to_string()
                } else {
                    format!("网络请求失败，请稍后重试: {err}")
                };
                self.inner.toasts.error(message);
                log::error!("request to {path} failed: {err}");
                return Err(ApiError::Network(err));
            }
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            let server_message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| value.get("message").and_then(Value::as_str).map(String::from));
            let message = transport_message(status, server_message.as_deref(), path);
            if status == 401 {
                self.force_logout();
            }
            self.inner.toasts.error(message.clone());
            log::error!("request to {path} returned {status}: {message}");
            return Err(ApiError::Http { status, message });
        }

        match decode_reply::<T>(&body) {
            Ok(data) => Ok(data),
            Err(err) => {
                if let ApiError::Business { message, .. } = &err {
                    self.inner.toasts.error(message.clone());
                }
                log::error!("request to {path} rejected: {err}");
                Err(err)
            }
        }
    }

    /// 401 清除会话并回到登录页。
    fn force_logout(&self) {
        if let Err(err) = crate::infra::session::clear_token() {
            log::warn!("failed to clear saved token: {err:#}");
        }
        let mut session = self.inner.session;
        session.set(Session::default());
        let mut route = self.inner.route;
        route.set(Route::Login);
    }
}

/// 业务层级的错误处理：HTTP 200 但 code 不是成功码。
fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let reply: Reply = serde_json::from_str(body).map_err(|err| ApiError::Parse(err.to_string()))?;
    if reply.code != 200 && reply.code != 0 {
        let message = if reply.message.is_empty() {
            "业务请求失败".to_string()
        } else {
            reply.message
        };
        return Err(ApiError::Business {
            code: reply.code,
            message,
        });
    }
    serde_json::from_value(reply.data).map_err(|err| ApiError::Parse(err.to_string()))
}

fn transport_message(status: u16, server_message: Option<&str>, path: &str) -> String {
    match status {
        400 => server_message
            .map(String::from)
            .unwrap_or_else(|| "请求参数错误 (400)".to_string()),
        401 => "登录状态已失效，请重新登录 (401)".to_string(),
        403 => "您没有权限访问该资源 (403)".to_string(),
        404 => format!("请求地址不存在: {path} (404)"),
        500 => "服务器内部错误 (500)".to_string(),
        502 => "网关错误 (502)".to_string(),
        other => server_message
            .map(String::from)
            .unwrap_or_else(|| format!("连接出错 ({other})")),
    }
}

/// Flattens request parameters into query pairs; array values repeat the
/// key so date ranges survive URL encoding.
fn query_pairs(params: &impl Serialize) -> Vec<(String, String)> {
    let Ok(Value::Object(map)) = serde_json::to_value(params) else {
        return Vec::new();
    };
    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), plain_text(&item)));
                }
            }
            other => pairs.push((key, plain_text(&other))),
        }
    }
    pairs
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn success_codes_unwrap_the_data_field() {
        let body = r#"{"code": 200, "message": "ok", "data": {"name": "引出棒"}}"#;
        let named: Named = decode_reply(body).expect("reply should decode");
        assert_eq!(named.name, "引出棒");

        let body = r#"{"code": 0, "data": {"name": "绝缘件"}}"#;
        let named: Named = decode_reply::<Named>(body).expect("code 0 is also success");
        assert_eq!(named.name, "绝缘件");
    }

    #[test]
    fn business_codes_surface_the_server_message() {
        let body = r#"{"code": 40001, "message": "编码已存在"}"#;
        let err = decode_reply::<Value>(body).expect_err("non-success code should fail");
        match err {
            ApiError::Business { code, message } => {
                assert_eq!(code, 40001);
                assert_eq!(message, "编码已存在");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_data_decodes_as_null_for_untyped_callers() {
        let body = r#"{"code": 200, "message": "ok"}"#;
        let value: Value = decode_reply(body).expect("missing data should default to null");
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn transport_messages_follow_the_status_taxonomy() {
        assert_eq!(
            transport_message(401, None, "users/page"),
            "登录状态已失效，请重新登录 (401)"
        );
        assert_eq!(
            transport_message(404, None, "users/page"),
            "请求地址不存在: users/page (404)"
        );
        assert_eq!(
            transport_message(400, Some("参数缺失"), "users/page"),
            "参数缺失"
        );
        assert_eq!(transport_message(418, None, "users/page"), "连接出错 (418)");
    }

    #[test]
    fn array_params_repeat_the_key_in_query_pairs() {
        let mut params = serde_json::Map::new();
        params.insert("name".to_string(), Value::String("引出棒".to_string()));
        params.insert(
            "range".to_string(),
            serde_json::json!(["2024-01-01 00:00:00", "2024-02-01 00:00:00"]),
        );
        params.insert("page".to_string(), serde_json::json!(1));

        let pairs = query_pairs(&params);

        assert!(pairs.contains(&("name".to_string(), "引出棒".to_string())));
        assert!(pairs.contains(&("page".to_string(), "1".to_string())));
        assert_eq!(
            pairs.iter().filter(|(key, _)| key == "range").count(),
            2,
            "range array should repeat the key"
        );
    }
}
