use genie_bridge_config::{ConfigValidator, MigrationConfig};
use genie_bridge_errors::{BridgeError, BridgeResult};

/// 迁移涉及的两张表
///
/// 表名会被拼入SQL，只能通过校验过的配置构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableTables {
    source: String,
    target: String,
}

impl ExecutableTables {
    pub fn from_config(config: &MigrationConfig) -> BridgeResult<Self> {
        config
            .validate()
            .map_err(|e| BridgeError::config_error(e.to_string()))?;
        Ok(Self {
            source: config.source_table.clone(),
            target: config.target_table.clone(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub(crate) fn select_executables_sql(&self) -> String {
        format!("SELECT id, executable FROM {} ORDER BY id", self.source)
    }

    pub(crate) fn insert_argument_sql(&self, placeholders: [&str; 3]) -> String {
        let [command_id, argument, order_index] = placeholders;
        format!(
            "INSERT INTO {} (command_id, argument, order_index) VALUES ({}, {}, {})",
            self.target, command_id, argument, order_index
        )
    }
}

impl Default for ExecutableTables {
    fn default() -> Self {
        let config = MigrationConfig::default();
        Self {
            source: config.source_table,
            target: config.target_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_generation() {
        let tables = ExecutableTables::default();
        assert_eq!(
            tables.select_executables_sql(),
            "SELECT id, executable FROM commands ORDER BY id"
        );
        assert_eq!(
            tables.insert_argument_sql(["$1", "$2", "$3"]),
            "INSERT INTO command_executable_arguments (command_id, argument, order_index) VALUES ($1, $2, $3)"
        );
    }

    #[test]
    fn test_from_config_rejects_unsafe_names() {
        let config = MigrationConfig {
            source_table: "commands; DELETE FROM jobs".to_string(),
            ..MigrationConfig::default()
        };
        let err = ExecutableTables::from_config(&config).unwrap_err();
        assert!(matches!(err, BridgeError::Configuration(_)));

        let config = MigrationConfig {
            source_table: "legacy_commands".to_string(),
            target_table: "legacy_args".to_string(),
        };
        let tables = ExecutableTables::from_config(&config).unwrap();
        assert_eq!(tables.source(), "legacy_commands");
        assert_eq!(tables.target(), "legacy_args");
    }
}
