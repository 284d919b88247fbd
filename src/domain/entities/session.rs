use serde::{Deserialize, Serialize};

/// 登录请求参数。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LoginParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// 登录成功返回的数据结构。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginReply {
    pub access_token: String,
}

/// 租户入驻申请参数。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParams {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub admin_user: String,
    pub admin_pass: String,
}

/// 当前登录用户的身份与权限码。
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: Option<serde_json::Value>,
    pub username: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub is_platform_admin: bool,
    pub tenant_id: Option<serde_json::Value>,
    pub tenant_name: Option<String>,
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nickname) if !nickname.is_empty() => nickname,
            _ => &self.username,
        }
    }

    pub fn tenant_id_text(&self) -> Option<String> {
        id_text(self.tenant_id.as_ref())
    }
}

/// Token plus the profile fetched with it. The token alone survives a
/// restart; the profile is re-fetched on startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn permissions(&self) -> &[String] {
        self.user.as_ref().map(|u| u.permissions.as_slice()).unwrap_or(&[])
    }

    pub fn is_platform_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_platform_admin).unwrap_or(false)
    }
}

/// Backend ids arrive as either strings or numbers; normalize for display
/// and request building.
pub fn id_text(id: Option<&serde_json::Value>) -> Option<String> {
    match id {
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_tolerates_numeric_and_string_ids() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id": 7, "username": "admin", "tenantId": "t-1", "permissions": ["*"]}"#,
        )
        .expect("user info should deserialize");

        assert_eq!(id_text(user.id.as_ref()), Some("7".to_string()));
        assert_eq!(user.tenant_id_text(), Some("t-1".to_string()));
    }

    #[test]
    fn display_name_prefers_the_nickname() {
        let mut user = UserInfo {
            username: "op01".to_string(),
            ..UserInfo::default()
        };
        assert_eq!(user.display_name(), "op01");

        user.nickname = Some("张三".to_string());
        assert_eq!(user.display_name(), "张三");
    }
}
