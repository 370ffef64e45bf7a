use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

const DEFAULT_GRPC_HOST: &str = "0.0.0.0";
const DEFAULT_GRPC_PORT: u16 = 50051;
const DEFAULT_DB_URL: &str = "sqlite://users.db?mode=rwc";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db: DbConfig,
    pub grpc: GrpcConfig,
}

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct GrpcConfig {
    pub host: String,
    pub port: u16,
}

impl GrpcConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            db: DbConfig {
                url: DEFAULT_DB_URL.to_string(),
                max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            },
            grpc: GrpcConfig {
                host: DEFAULT_GRPC_HOST.to_string(),
                port: DEFAULT_GRPC_PORT,
            },
        }
    }
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn parse_env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
        match env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(key, value = %raw, fallback = %default, "Unparseable environment variable");
                default
            }),
            Err(_) => default,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            db: DbConfig {
                url: Self::get_env_or("DATABASE_URL", DEFAULT_DB_URL),
                max_connections: Self::parse_env_or(
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_DB_MAX_CONNECTIONS,
                ),
            },
            grpc: GrpcConfig {
                host: Self::get_env_or("GRPC_HOST", DEFAULT_GRPC_HOST),
                port: Self::parse_env_or("GRPC_PORT", DEFAULT_GRPC_PORT),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get_or_init(EnvConfig::from_env)
}
