//! Command-line configuration of the BFF server.
//!
//! The upstream base URL is not a flag: it always comes from the server-side
//! environment variable (`API_BASE_URL`).

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Nomad backend-for-frontend server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしではデフォルトのアドレスで待ち受ける
        let config = ServerConfig::parse_from(["nomad-server"]);

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        // テスト項目: --host / --port で待ち受けアドレスを変更できる
        let config =
            ServerConfig::parse_from(["nomad-server", "--host", "0.0.0.0", "--port", "3000"]);

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }
}
