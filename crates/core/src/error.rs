//! 序列化边界上的错误
//!
//! 断点解析与样式改写本身不会失败，只有 JSON 输入不合法时才会返回错误。

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("style must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// JSON 值的类型名，用于错误信息
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
