use serde::{Deserialize, Serialize};

/// 产品保存/更新提交对象。specs 需包含所属类目绑定的全部属性值；
/// code 不传时由后端按类目加规格自动生成 SKU。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub specs: serde_json::Map<String, serde_json::Value>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_stock: Option<i64>,
    pub is_active: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryBrief {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// 产品详情，用于编辑表单回显。
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category_id: String,
    pub unit: Option<String>,
    pub specs: serde_json::Map<String, serde_json::Value>,
    pub images: Vec<String>,
    pub safety_stock: Option<i64>,
    pub is_active: i64,
    pub category: Option<CategoryBrief>,
}
