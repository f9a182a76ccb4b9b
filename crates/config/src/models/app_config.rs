use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{database::DatabaseConfig, logging::LogConfig, migration::MigrationConfig};
use crate::validation::ConfigValidator;

/// 环境变量前缀，例如 `GENIE_BRIDGE_DATABASE__URL`
pub const ENV_PREFIX: &str = "GENIE_BRIDGE";

const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "config/genie-bridge.toml",
    "genie-bridge.toml",
    "/etc/genie-bridge/config.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

impl AppConfig {
    /// 加载配置：默认值 < TOML文件 < 环境变量
    ///
    /// 指定的配置文件不存在时报错；未指定时依次查找默认路径，都不存在则只用默认值。
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = DatabaseConfig::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("database.url", defaults.url)?
            .set_default("database.max_connections", i64::from(defaults.max_connections))?
            .set_default("database.min_connections", i64::from(defaults.min_connections))?
            .set_default(
                "database.connection_timeout_seconds",
                defaults.connection_timeout_seconds as i64,
            )?;

        if let Some(path) = config_path {
            if !Path::new(path).exists() {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.database.validate()?;
        self.logging.validate()?;
        self.migration.validate()?;
        Ok(())
    }
}
