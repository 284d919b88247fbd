use serde::{Deserialize, Serialize};

/// 规格值保存/更新提交对象，入参出参对称。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionSave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 所属属性 ID，保存时必传。
    pub attribute_id: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    pub is_active: i64,
}

/// 批量新增规格值；values 由后端去重插入。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptionSave {
    pub attribute_id: String,
    pub values: Vec<String>,
}
