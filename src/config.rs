use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http: HttpServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The Stripe secret key is environment-only and never stored in the
    /// config file.
    pub fn stripe_secret_key(&self) -> Result<String, env::VarError> {
        env::var("STRIPE_SECRET_KEY")
    }

    pub fn http_host(&self) -> &str {
        &self.server.http.host
    }

    pub fn http_port(&self) -> u16 {
        self.server.http.port
    }
}

// Default implementation for testing or when config file is missing
impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                http: HttpServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8888,
                },
            },
        }
    }
}
