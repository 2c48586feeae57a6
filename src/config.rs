use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let geocoder_url = std::env::var("GEOCODER_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org/reverse".to_string());

        let geocoder_user_agent = std::env::var("GEOCODER_USER_AGENT")
            .unwrap_or_else(|_| format!("trackviz-rs/{}", env!("CARGO_PKG_VERSION")));

        let cache_path = std::env::var("GEOCODE_CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("geocode_cache.db"));

        Self {
            geocoder_url,
            geocoder_user_agent,
            cache_path,
        }
    }
}
