use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Listener address for the page and the JSON API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP (default: "127.0.0.1")
    /// - SERVICE_PORT (default: 8080; an unparseable port falls back to it)
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let ip = ip
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = port
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { ip, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
