use crate::validation::{ConfigValidator, ValidationUtils};
use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// 可执行参数迁移的源表和目标表
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MigrationConfig {
    #[serde(default = "default_source_table")]
    pub source_table: String,
    #[serde(default = "default_target_table")]
    pub target_table: String,
}

fn default_source_table() -> String {
    "commands".to_string()
}

fn default_target_table() -> String {
    "command_executable_arguments".to_string()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            source_table: default_source_table(),
            target_table: default_target_table(),
        }
    }
}

impl ConfigValidator for MigrationConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_sql_identifier(&self.source_table, "migration.source_table")?;
        ValidationUtils::validate_sql_identifier(&self.target_table, "migration.target_table")?;
        if self.source_table == self.target_table {
            return Err(ConfigError::Validation(
                "migration.source_table and migration.target_table must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_config_validation() {
        assert!(MigrationConfig::default().validate().is_ok());

        let config = MigrationConfig {
            source_table: "commands".to_string(),
            target_table: "commands".to_string(),
        };
        assert!(config.validate().is_err());

        let config = MigrationConfig {
            source_table: "commands--".to_string(),
            ..MigrationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
