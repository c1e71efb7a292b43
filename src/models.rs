use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// 电压设备记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub number: String, // 调度号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>, // 供电范围
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>, // 设备型号
    #[serde(default, rename = "subId", skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
    #[serde(default, rename = "transId", skip_serializing_if = "Option::is_none")]
    pub trans_id: Option<String>,
}

impl VoltageRecord {
    pub fn range_or_empty(&self) -> &str {
        self.range.as_deref().unwrap_or("")
    }

    pub fn model_or_empty(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }
}

/// 列表所属的上级实体
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    None,
    Substation(String),
    TransformerBox(String),
}

impl Scope {
    /// 查询参数 / 请求体中的上级 ID 字段
    pub fn query_pair(&self) -> Option<(&'static str, &str)> {
        match self {
            Scope::None => None,
            Scope::Substation(id) => Some(("subId", id.as_str())),
            Scope::TransformerBox(id) => Some(("transId", id.as_str())),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Scope::None => "全部".to_string(),
            Scope::Substation(id) => format!("变电站 {}", id),
            Scope::TransformerBox(id) => format!("箱变 {}", id),
        }
    }
}

/// 表单提交的字段值
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoltageFields {
    pub number: String,
    pub range: String,
    pub model: String,
}

/// 列表查询参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page_index: u32,
    pub page_size: u32,
    pub scope: Scope,
}

impl ListQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page_size", self.page_size.to_string()),
            ("page_index", self.page_index.to_string()),
        ];
        if let Some((key, id)) = self.scope.query_pair() {
            params.push((key, id.to_string()));
        }
        params
    }
}

/// 列表响应中的 `data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VoltagePage {
    pub count: u64,
    #[serde(default)]
    pub voltages: Vec<VoltageRecord>,
}

/// 服务端统一的响应外壳 `{ "data": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// 新增请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePayload {
    #[serde(rename = "subId", skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
    #[serde(rename = "transId", skip_serializing_if = "Option::is_none")]
    pub trans_id: Option<String>,
    #[serde(flatten)]
    pub fields: VoltageFields,
}

impl CreatePayload {
    pub fn new(scope: &Scope, fields: VoltageFields) -> Self {
        let (sub_id, trans_id) = match scope {
            Scope::None => (None, None),
            Scope::Substation(id) => (Some(id.clone()), None),
            Scope::TransformerBox(id) => (None, Some(id.clone())),
        };
        Self {
            sub_id,
            trans_id,
            fields,
        }
    }
}

/// 更新请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: VoltageFields,
}

impl UpdatePayload {
    pub fn new(id: impl Into<String>, fields: VoltageFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// 删除请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletePayload<'a> {
    pub id: &'a str,
}
