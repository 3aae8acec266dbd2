use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use mediawind_core::{
    get_configuration, media as rs_media, media_queries as rs_media_queries, resolve_options,
    responsive_value, set_configuration, PartialOptions,
};

// ── 类型转换 ──────────────────────────────────────────────────

fn parse_options(options: JsValue) -> Result<PartialOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(PartialOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_style(style: JsValue) -> Result<Value, JsError> {
    serde_wasm_bindgen::from_value(style)
        .map_err(|e| JsError::new(&format!("Invalid style object: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 设置全局响应式配置，与已有配置浅合并
///
/// @param options - `{ direction?: 'min' | 'max', breakpoints?: { [name]: number | string | [min, max] } }`
#[wasm_bindgen(js_name = "setResponsiveConfigurations")]
pub fn set_responsive_configurations(options: JsValue) -> Result<(), JsError> {
    set_configuration(&parse_options(options)?);
    Ok(())
}

/// 获取当前全局响应式配置
///
/// @returns `{ direction, breakpoints }`
#[wasm_bindgen(js_name = "getResponsiveConfigurations")]
pub fn get_responsive_configurations() -> Result<JsValue, JsError> {
    to_js(&get_configuration())
}

/// 全局配置与传入配置合并后的结果
#[wasm_bindgen(js_name = "responsiveOptions")]
pub fn responsive_options(options: JsValue) -> Result<JsValue, JsError> {
    to_js(&resolve_options(&parse_options(options)?))
}

/// 生成单个断点的媒体查询，未知断点返回空字符串
///
/// @param breakpoint - 断点名（如 "sm"）
/// @param options    - 本次调用的配置，可选
#[wasm_bindgen]
pub fn media(breakpoint: &str, options: JsValue) -> Result<String, JsError> {
    Ok(rs_media(breakpoint, &parse_options(options)?))
}

/// 生成全部断点的媒体查询
///
/// @returns `{ [breakpoint]: query }`
#[wasm_bindgen(js_name = "mediaQueries")]
pub fn media_queries(options: JsValue) -> Result<JsValue, JsError> {
    to_js(&rs_media_queries(&parse_options(options)?))
}

/// 将样式对象中的断点 key 改写为媒体查询
///
/// @param style   - 样式对象，如 `{ "sm, md": { color: "red" } }`
/// @param options - 本次调用的配置，可选
/// @returns 新的样式对象，传入的对象不会被修改
#[wasm_bindgen]
pub fn responsive(style: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    let style = parse_style(style)?;
    to_js(&responsive_value(&style, &options))
}

/// `responsive` 的别名
#[wasm_bindgen(js_name = "R")]
pub fn r(style: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    responsive(style, options)
}
