use serde::Deserialize;
use skybook_catalog::PricingConfig;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for this long are dropped
    pub idle_timeout_seconds: u32,
    pub sweep_interval_seconds: u32,
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.idle_timeout_seconds))
    }

    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.sweep_interval_seconds.max(1)))
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 3000_i64)?
            .set_default("pricing.currency", "USD")?
            .set_default("sessions.idle_timeout_seconds", 1800_i64)?
            .set_default("sessions.sweep_interval_seconds", 60_i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SKYBOOK__SERVER__PORT=8080`
            .add_source(
                config::Environment::with_prefix("SKYBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
