pub mod config;
pub mod error;
pub mod query;
pub mod responsive;
pub mod types;

// Re-export commonly used types
pub use config::{
    get_configuration, reset_configuration, resolve_options, set_configuration, ConfigStore,
};
pub use error::Error;
pub use query::{all_media_queries, media, media_queries, media_query};
pub use responsive::{responsive, responsive_json, responsive_value, rewrite_style};
pub use types::{
    Breakpoint, BreakpointRegistry, Direction, MediaQueries, PartialOptions, ResponsiveOptions,
    StyleObject,
};
