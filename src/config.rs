use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleConfig {
    pub base_url: String,
    pub start_page: u32,
    pub timeout_secs: u64,
}

impl Default for PeopleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://join.nutshell.com".into(),
            start_page: 1,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub people: PeopleConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = PeopleConfig::default();
        let people = PeopleConfig {
            base_url: std::env::var("PEOPLE_BASE_URL").unwrap_or(defaults.base_url),
            // pages are 1-based
            start_page: std::env::var("PEOPLE_START_PAGE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(defaults.start_page),
            timeout_secs: std::env::var("PEOPLE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_secs),
        };
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>()?,
            Err(_) => 8080,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            people,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            people: PeopleConfig::default(),
        }
    }
}
