//! 响应式配置存储
//!
//! 提供两种用法：
//! - `ConfigStore`：显式传递的配置上下文
//! - `set_configuration` / `get_configuration`：进程级全局默认配置

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::query::{all_media_queries, media_query};
use crate::responsive::rewrite_style;
use crate::types::{MediaQueries, PartialOptions, ResponsiveOptions, StyleObject};

/// 配置上下文：保存当前默认配置，并以其为基础解析每次调用的配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    current: ResponsiveOptions,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(options: ResponsiveOptions) -> Self {
        Self { current: options }
    }

    /// 浅合并到当前配置；`breakpoints` 会整体替换而不是追加
    pub fn set(&mut self, options: &PartialOptions) {
        self.current = self.current.merge(options);
        debug!(
            direction = %self.current.direction,
            breakpoints = self.current.breakpoints.len(),
            "responsive configuration updated"
        );
    }

    pub fn get(&self) -> &ResponsiveOptions {
        &self.current
    }

    pub fn reset(&mut self) {
        self.current = ResponsiveOptions::default();
    }

    /// 当前配置 + 调用方配置
    pub fn resolve(&self, options: &PartialOptions) -> ResponsiveOptions {
        self.current.merge(options)
    }

    pub fn media(&self, breakpoint: &str, options: &PartialOptions) -> String {
        media_query(breakpoint, &self.resolve(options))
    }

    pub fn media_queries(&self, options: &PartialOptions) -> MediaQueries {
        all_media_queries(&self.resolve(options))
    }

    pub fn responsive(&self, style: &StyleObject, options: &PartialOptions) -> StyleObject {
        rewrite_style(style, &self.media_queries(options))
    }
}

static CONFIGURATION: Lazy<RwLock<ConfigStore>> = Lazy::new(|| RwLock::new(ConfigStore::new()));

/// 设置全局配置，与已有配置浅合并
pub fn set_configuration(options: &PartialOptions) {
    CONFIGURATION
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set(options);
}

/// 获取全局配置的快照
pub fn get_configuration() -> ResponsiveOptions {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get()
        .clone()
}

/// 恢复全局配置为默认值（`min`，无断点）
pub fn reset_configuration() {
    CONFIGURATION
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .reset();
}

/// 全局配置 + 调用方配置
pub fn resolve_options(options: &PartialOptions) -> ResponsiveOptions {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .resolve(options)
}
