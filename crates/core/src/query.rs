use tracing::trace;

use crate::config::resolve_options;
use crate::types::{Breakpoint, Direction, MediaQueries, PartialOptions, ResponsiveOptions};

impl Breakpoint {
    /// 生成该断点对应的媒体查询，无法生成时返回空字符串
    ///
    /// - `Literal("@media print")` → `"@media print"`
    /// - `Width(1024)` + `Min` → `"@media (min-width: 1024px)"`
    /// - `Range(Some(0), Some(320))` → `"@media (min-width: 0px) and (max-width: 320px)"`
    pub fn to_query(&self, direction: Direction) -> String {
        match self {
            Breakpoint::Literal(query) => query.clone(),
            Breakpoint::Width(width) => {
                format!("@media ({}-width: {}px)", direction, format_px(*width))
            }
            Breakpoint::Range(min, max) => {
                let mut range = Vec::with_capacity(2);
                if let Some(min) = min {
                    range.push(format!("(min-width: {}px)", format_px(*min)));
                }
                if let Some(max) = max {
                    range.push(format!("(max-width: {}px)", format_px(*max)));
                }

                if range.is_empty() {
                    String::new()
                } else {
                    format!("@media {}", range.join(" and "))
                }
            }
            Breakpoint::Other(_) => String::new(),
        }
    }
}

/// 按 JavaScript `Number#toString` 的规则输出像素值
///
/// `1024`、`1.5`、`0`（含 `-0`）；绝对值 >= 1e21 或 < 1e-6 时使用指数形式，如 `1e+21`、`1.5e-7`。
fn format_px(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // Rust 的 `{:e}` 输出 `1e21`，JavaScript 为 `1e+21`
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

/// 在已合并的配置中查找断点并生成媒体查询
///
/// 断点不存在时返回空字符串
pub fn media_query(breakpoint: &str, options: &ResponsiveOptions) -> String {
    match options.breakpoints.get(breakpoint) {
        Some(value) => {
            let query = value.to_query(options.direction);
            if query.is_empty() {
                trace!(breakpoint, ?value, "breakpoint produces no media query");
            }
            query
        }
        None => String::new(),
    }
}

/// 为注册表中的每个断点生成媒体查询，key 集合与注册表一致
pub fn all_media_queries(options: &ResponsiveOptions) -> MediaQueries {
    options
        .breakpoints
        .keys()
        .map(|name| (name.clone(), media_query(name, options)))
        .collect()
}

/// 使用全局配置 + 调用方配置生成单个断点的媒体查询
pub fn media(breakpoint: &str, options: &PartialOptions) -> String {
    media_query(breakpoint, &resolve_options(options))
}

/// 使用全局配置 + 调用方配置生成全部断点的媒体查询
pub fn media_queries(options: &PartialOptions) -> MediaQueries {
    all_media_queries(&resolve_options(options))
}
