//! 基于属性的不变量测试
//!
//! 1. `all_media_queries` 的 key 集合（及顺序）与断点注册表一致，与方向无关
//! 2. 任意非负整数宽度 N：`min` → `(min-width: Npx)`，`max` → `(max-width: Npx)`
//! 3. 区间断点与方向无关
//! 4. 逗号分隔的断点 key 与空白无关

use mediawind_core::{
    all_media_queries, media_query, rewrite_style, Breakpoint, BreakpointRegistry, Direction,
    ResponsiveOptions, StyleObject,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// ── Helpers ─────────────────────────────────────────────────────────────

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Min), Just(Direction::Max)]
}

fn breakpoint_strategy() -> impl Strategy<Value = Breakpoint> {
    prop_oneof![
        "@media [a-z]{1,8}".prop_map(Breakpoint::literal),
        (0u32..5000).prop_map(Breakpoint::width),
        (
            proptest::option::of(0u32..5000),
            proptest::option::of(0u32..5000)
        )
            .prop_map(|(min, max)| -> Breakpoint {
                (min.map(f64::from), max.map(f64::from)).into()
            }),
        Just(Breakpoint::Other(json!([579]))),
    ]
}

fn registry_strategy() -> impl Strategy<Value = BreakpointRegistry> {
    proptest::collection::vec(("[a-z]{1,6}", breakpoint_strategy()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

fn queries() -> mediawind_core::MediaQueries {
    all_media_queries(
        &ResponsiveOptions::new()
            .with_breakpoint("sm", 580)
            .with_breakpoint("md", 768)
            .with_breakpoint("lg", 1024),
    )
}

fn rewrite_single(key: &str) -> Value {
    let mut style = StyleObject::new();
    style.insert(key.to_string(), json!({ "color": "red" }));
    Value::Object(rewrite_style(&style, &queries()))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn media_queries_keep_registry_key_set(
        registry in registry_strategy(),
        direction in direction_strategy(),
    ) {
        let options = ResponsiveOptions {
            direction,
            breakpoints: registry,
        };
        let queries = all_media_queries(&options);

        prop_assert_eq!(
            queries.keys().collect::<Vec<_>>(),
            options.breakpoints.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn width_follows_direction(n in any::<u32>()) {
        let min = ResponsiveOptions::new().with_breakpoint("bp", Breakpoint::width(n));
        let max = min.clone().with_direction(Direction::Max);

        prop_assert_eq!(media_query("bp", &min), format!("@media (min-width: {}px)", n));
        prop_assert_eq!(media_query("bp", &max), format!("@media (max-width: {}px)", n));
    }

    #[test]
    fn range_ignores_direction(
        min in proptest::option::of(0u32..100_000),
        max in proptest::option::of(0u32..100_000),
    ) {
        let options = ResponsiveOptions::new()
            .with_breakpoint("bp", Breakpoint::range(min.map(f64::from), max.map(f64::from)));

        prop_assert_eq!(
            media_query("bp", &options),
            media_query("bp", &options.clone().with_direction(Direction::Max))
        );
    }

    #[test]
    fn combined_keys_ignore_whitespace(
        parts in proptest::collection::vec(
            (
                prop::sample::select(vec!["sm", "md", "lg", "xl"]),
                "[ \t]{0,3}",
                "[ \t]{0,3}",
            ),
            2..5,
        ),
    ) {
        let padded = parts
            .iter()
            .map(|(name, left, right)| format!("{}{}{}", left, name, right))
            .collect::<Vec<_>>()
            .join(",");
        let compact = parts
            .iter()
            .map(|(name, _, _)| *name)
            .collect::<Vec<_>>()
            .join(",");

        if parts.iter().any(|(name, _, _)| *name != "xl") {
            prop_assert_eq!(rewrite_single(&padded), rewrite_single(&compact));
        } else {
            // 没有已知断点时原 key 原样保留
            let mut untouched = StyleObject::new();
            untouched.insert(padded.clone(), json!({ "color": "red" }));
            prop_assert_eq!(rewrite_single(&padded), Value::Object(untouched));
        }
    }
}
