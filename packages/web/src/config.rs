//! Build-time configuration: the embedded `gardenhub.toml` plus any
//! `GARDENHUB_*` variables present when the bundle was compiled.

use store::config::{ENV_API_URL, ENV_FIREBASE_API_KEY, ENV_GOOGLE_CLIENT_ID, ENV_REDIRECT_URI};
use store::GardenHubConfig;

const EMBEDDED: &str = include_str!("../gardenhub.toml");

pub fn load() -> GardenHubConfig {
    let mut config = GardenHubConfig::from_toml(EMBEDDED).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", GardenHubConfig::filename());
        GardenHubConfig::default()
    });
    config.apply_overrides(build_env);
    config
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_URL => option_env!("GARDENHUB_API_URL"),
        ENV_FIREBASE_API_KEY => option_env!("GARDENHUB_FIREBASE_API_KEY"),
        ENV_GOOGLE_CLIENT_ID => option_env!("GARDENHUB_GOOGLE_CLIENT_ID"),
        ENV_REDIRECT_URI => option_env!("GARDENHUB_REDIRECT_URI"),
        _ => None,
    };
    value.map(str::to_string)
}
