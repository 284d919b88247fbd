use serde::{Deserialize, Serialize};

use super::session::id_text;

/// 创建/更新角色提交对象；permissionCodes 对应菜单配置里的权限码。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoleSave {
    pub name: String,
    pub is_active: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub permission_codes: Vec<String>,
}

/// 下拉框用的角色简表。
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct RoleBrief {
    pub id: Option<serde_json::Value>,
    pub name: String,
}

impl RoleBrief {
    pub fn id_text(&self) -> Option<String> {
        id_text(self.id.as_ref())
    }

    /// 过滤掉后端偶发的脏数据：无名称或名称是纯数字的项。
    pub fn usable(&self) -> bool {
        !self.name.trim().is_empty()
            && self.id.is_some()
            && self.name.trim().parse::<f64>().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_role_entries_are_detected() {
        let ok = RoleBrief {
            id: Some(serde_json::json!(1)),
            name: "仓管员".to_string(),
        };
        let unnamed = RoleBrief {
            id: Some(serde_json::json!(2)),
            name: "  ".to_string(),
        };
        let numeric = RoleBrief {
            id: Some(serde_json::json!(3)),
            name: "42".to_string(),
        };

        assert!(ok.usable());
        assert!(!unnamed.usable());
        assert!(!numeric.usable());
    }
}
