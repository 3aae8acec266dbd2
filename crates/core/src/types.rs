use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::Error;

/// 样式对象
///
/// key 可以是 CSS 属性名、断点名、逗号分隔的断点列表，或者已经生成好的媒体查询。
/// 依赖 serde_json 的 `preserve_order`，保持 key 的书写顺序。
pub type StyleObject = Map<String, Value>;

/// 断点注册表：断点名 → 断点值
pub type BreakpointRegistry = IndexMap<String, Breakpoint>;

/// 断点名 → 媒体查询字符串
pub type MediaQueries = IndexMap<String, String>;

/// 数值断点生成媒体查询时使用的方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `(min-width: ...)`，移动优先
    #[default]
    Min,
    /// `(max-width: ...)`，桌面优先
    Max,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Min => "min",
            Direction::Max => "max",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 断点值
///
/// JSON 形式：
/// - `"@media print"` → `Literal`
/// - `1024` → `Width`
/// - `[0, 320]` / `[579, null]` / `[null, 320]` → `Range`
/// - 其它任意形状 → `Other`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakpoint {
    /// 自定义媒体查询，原样输出
    Literal(String),
    /// 像素宽度，方向由 `Direction` 决定
    Width(f64),
    /// (min, max) 像素区间，方向无关
    Range(Option<f64>, Option<f64>),
    /// 无法识别的形状，保留下来但不会生成查询
    Other(Value),
}

impl Breakpoint {
    pub fn literal(query: impl Into<String>) -> Self {
        Breakpoint::Literal(query.into())
    }

    pub fn width(px: impl Into<f64>) -> Self {
        Breakpoint::Width(px.into())
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Breakpoint::Range(min, max)
    }
}

impl From<&str> for Breakpoint {
    fn from(query: &str) -> Self {
        Breakpoint::Literal(query.to_string())
    }
}

impl From<String> for Breakpoint {
    fn from(query: String) -> Self {
        Breakpoint::Literal(query)
    }
}

impl From<i32> for Breakpoint {
    fn from(px: i32) -> Self {
        Breakpoint::Width(px.into())
    }
}

impl From<f64> for Breakpoint {
    fn from(px: f64) -> Self {
        Breakpoint::Width(px)
    }
}

impl From<(Option<f64>, Option<f64>)> for Breakpoint {
    fn from((min, max): (Option<f64>, Option<f64>)) -> Self {
        Breakpoint::Range(min, max)
    }
}

impl From<(i32, i32)> for Breakpoint {
    fn from((min, max): (i32, i32)) -> Self {
        Breakpoint::Range(Some(min.into()), Some(max.into()))
    }
}

/// 完整的响应式配置（已合并默认值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveOptions {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub breakpoints: BreakpointRegistry,
}

impl ResponsiveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_breakpoint(mut self, name: impl Into<String>, value: impl Into<Breakpoint>) -> Self {
        self.breakpoints.insert(name.into(), value.into());
        self
    }

    /// 浅合并：`partial` 中出现的顶层字段整体替换，不会逐个合并断点
    pub fn merge(&self, partial: &PartialOptions) -> Self {
        Self {
            direction: partial.direction.unwrap_or(self.direction),
            breakpoints: partial
                .breakpoints
                .clone()
                .unwrap_or_else(|| self.breakpoints.clone()),
        }
    }
}

/// 调用方传入的局部配置，所有字段可选
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<BreakpointRegistry>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串解析，如 `{"direction": "max", "breakpoints": {"sm": 580}}`
    pub fn from_json(json_str: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointRegistry) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// 追加单个断点；若还没有注册表则新建一个
    pub fn with_breakpoint(mut self, name: impl Into<String>, value: impl Into<Breakpoint>) -> Self {
        self.breakpoints
            .get_or_insert_with(BreakpointRegistry::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.breakpoints.is_none()
    }
}

impl From<ResponsiveOptions> for PartialOptions {
    fn from(options: ResponsiveOptions) -> Self {
        Self {
            direction: Some(options.direction),
            breakpoints: Some(options.breakpoints),
        }
    }
}
