//! App Configuration
//!
//! Compile-time TOML asset with UI settings and the initial item list.

use serde::Deserialize;

use crate::models::TodoItem;
use leptos_dragdrop::DEFAULT_DRAG_THRESHOLD_PX;

const TODO_CONFIG_TOML: &str = include_str!("../assets/todo.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub version: u32,
    pub app_title: String,
    /// Pointer movement before a press turns into a drag
    pub drag_threshold_px: i32,
    pub seed: Vec<SeedItem>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            version: 1,
            app_title: "Todo Items".to_string(),
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            seed: Vec::new(),
        }
    }
}

impl TodoConfig {
    /// Initial store contents, each with a fresh id
    pub fn seed_items(&self) -> Vec<TodoItem> {
        self.seed
            .iter()
            .map(|seed| TodoItem {
                done: seed.done,
                ..TodoItem::new(seed.title.clone(), seed.details.clone())
            })
            .collect()
    }
}

fn sanitize_config(config: &mut TodoConfig) {
    if config.drag_threshold_px < 0 {
        tracing::warn!(value = config.drag_threshold_px, "negative drag threshold; using default");
        config.drag_threshold_px = DEFAULT_DRAG_THRESHOLD_PX;
    }
    if config.app_title.trim().is_empty() {
        config.app_title = TodoConfig::default().app_title;
    }
}

pub fn parse_config(source: &str) -> Result<TodoConfig, toml::de::Error> {
    let mut config = toml::from_str::<TodoConfig>(source)?;
    sanitize_config(&mut config);
    Ok(config)
}

/// Load the embedded config, falling back to defaults when it does not parse
pub fn load_config() -> TodoConfig {
    match parse_config(TODO_CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(
                version = config.version,
                seed_count = config.seed.len(),
                drag_threshold_px = config.drag_threshold_px,
                "loaded todo config"
            );
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed parsing todo config; using defaults");
            TodoConfig::default()
        }
    }
}
