use serde::{Deserialize, Serialize};

/// 属性简表：用于在类目详情中展示已绑定的属性。
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeBrief {
    pub id: String,
    pub name: String,
    pub code: String,
    pub unit: Option<String>,
}

/// 类目保存/更新提交对象；更新时必传 id。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategorySave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub is_active: i64,
    /// 绑定的属性 ID 集合，后端据此更新中间表。
    pub attribute_ids: Vec<String>,
}

/// 类目详情，attributeIds 已扁平化，可直接回显进编辑表单。
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDetail {
    pub id: String,
    pub name: String,
    pub code: String,
    pub is_active: i64,
    pub attribute_ids: Vec<String>,
    pub attributes: Vec<AttributeBrief>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
