//! 启动配置
//!
//! 监听地址与端口来自环境变量；数据库选择与 TLS 终结属于外部基础设施，
//! 不在本核心的职责内。
//!
use anyhow::Context;
use std::env;

const HOST_VAR: &str = "VEREIN_HOST";
const PORT_VAR: &str = "VEREIN_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 从环境变量读取，未设置时使用默认值
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var(HOST_VAR).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var(PORT_VAR) {
            Ok(wert) => wert
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {wert}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// 监听地址 `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
