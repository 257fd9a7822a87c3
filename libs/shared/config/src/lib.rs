use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: String,
    pub data_dir: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| {
                    warn!("CATALOG_PATH not set, using default data/professionals.json");
                    "data/professionals.json".to_string()
                }),
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| {
                    warn!("DATA_DIR not set, using default data");
                    "data".to_string()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
        }
    }
}
