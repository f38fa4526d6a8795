use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_from_email: String,
    pub seed_demo_events: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(defaults.port),
            default_from_email: env::var("DEFAULT_FROM_EMAIL")
                .unwrap_or(defaults.default_from_email),
            seed_demo_events: env::var("SEED_DEMO_EVENTS")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(defaults.seed_demo_events),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            default_from_email: "noreply@example.com".to_string(),
            seed_demo_events: true,
        }
    }
}
