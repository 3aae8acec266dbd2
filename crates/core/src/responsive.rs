use serde_json::Value;
use tracing::trace;

use crate::error::{value_kind, Error};
use crate::query::media_queries;
use crate::types::{MediaQueries, PartialOptions, StyleObject};

/// 将样式对象中的断点 key 改写为媒体查询
///
/// 使用全局配置 + `options` 生成断点映射，例如 `sm = 580` 时：
///
/// ```text
/// { "sm, md": { color: red }, a: { sm: { color: blue } } }
/// → { "@media (min-width: 580px)": { color: red }, ..., a: { "@media (min-width: 580px)": { color: blue } } }
/// ```
///
/// 输入不会被修改，返回一棵新的样式树。
pub fn responsive(style: &StyleObject, options: &PartialOptions) -> StyleObject {
    rewrite_style(style, &media_queries(options))
}

/// 对任意 JSON 值执行 `responsive`，非对象原样返回
pub fn responsive_value(style: &Value, options: &PartialOptions) -> Value {
    match style {
        Value::Object(map) => Value::Object(responsive(map, options)),
        other => other.clone(),
    }
}

/// 解析 JSON 样式文本，改写后重新序列化
pub fn responsive_json(source: &str, options: &PartialOptions) -> Result<String, Error> {
    match serde_json::from_str::<Value>(source)? {
        Value::Object(map) => Ok(serde_json::to_string(&responsive(&map, options))?),
        other => Err(Error::NotAnObject(value_kind(&other))),
    }
}

/// 用已生成的断点映射改写样式对象
///
/// 规则（按 key 原有顺序）：
/// 1. 含逗号的 key：拆分并去掉空白，每个已知断点各生成一个媒体查询 key，值相同；
///    只要有一个断点命中就删除原 key，否则原样保留（不递归）
/// 2. 已知断点：改名为对应的媒体查询
/// 3. 值为对象：递归改写
/// 4. 其它：保持不变
///
/// 生成空查询的断点视为未知。
///
/// 输出顺序：先是保留下来的 key（保持原顺序），再按生成顺序追加媒体查询 key。
/// 生成的媒体查询与已有 key 同名时覆盖其值；多个断点生成同一查询时后者生效。
pub fn rewrite_style(style: &StyleObject, queries: &MediaQueries) -> StyleObject {
    let mut result = StyleObject::new();
    let mut generated: Vec<(&str, &Value)> = Vec::new();

    for (key, value) in style {
        if key.contains(',') {
            let mut matched = false;
            for name in key.split(',').map(str::trim) {
                match lookup(queries, name) {
                    Some(query) => {
                        trace!(breakpoint = name, query, "expanding combined breakpoint");
                        generated.push((query, value));
                        matched = true;
                    }
                    None => trace!(segment = name, key = key.as_str(), "ignoring unknown breakpoint"),
                }
            }

            if !matched {
                result.insert(key.clone(), value.clone());
            }
        } else if let Some(query) = lookup(queries, key) {
            trace!(breakpoint = key.as_str(), query, "rewriting breakpoint");
            generated.push((query, value));
        } else if let Value::Object(nested) = value {
            result.insert(key.clone(), Value::Object(rewrite_style(nested, queries)));
        } else {
            result.insert(key.clone(), value.clone());
        }
    }

    for (query, value) in generated {
        result.insert(query.to_string(), value.clone());
    }

    result
}

fn lookup<'a>(queries: &'a MediaQueries, name: &str) -> Option<&'a str> {
    queries
        .get(name)
        .map(String::as_str)
        .filter(|query| !query.is_empty())
}
