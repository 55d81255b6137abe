use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5001, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Single origin allowed to call the API; the frontend dev server by default.
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origin: "http://localhost:5173".into() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.cors.normalize_from_env();
        self.cors.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl CorsConfig {
    pub fn normalize_from_env(&mut self) {
        // TOML wins; the env var only fills a blank value
        if self.allowed_origin.trim().is_empty() {
            if let Ok(origin) = std::env::var("CORS_ALLOWED_ORIGIN") {
                self.allowed_origin = origin;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() {
            return Err(anyhow!(
                "cors.allowed_origin is empty; set it in config.toml or the CORS_ALLOWED_ORIGIN env var"
            ));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(anyhow!("cors.allowed_origin must start with http:// or https://"));
        }
        if origin.ends_with('/') {
            return Err(anyhow!("cors.allowed_origin must not end with a trailing slash"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 5001

            [cors]
            allowed_origin = "http://localhost:5173"
            "#,
        )
        .expect("parse config");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5001);
        assert_eq!(cfg.cors.allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut cfg: AppConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(cfg.server.port, 5001);
        assert_eq!(cfg.cors.allowed_origin, "http://localhost:5173");
        cfg.normalize_and_validate().expect("defaults validate");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 0
            "#,
        )
        .expect("parse config");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_bad_cors_origin() {
        let mut cfg = AppConfig::default();
        cfg.cors.allowed_origin = "localhost:5173".into();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.cors.allowed_origin = "http://localhost:5173/".into();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
