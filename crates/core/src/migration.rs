//! 命令可执行字符串到参数表的批量迁移
//!
//! 读取命令表中每一行的 `executable`，按空白拆分后逐个写入参数表，
//! `order_index` 从0开始。拆分结果为空的命令被跳过。
//! 迁移不在事务中执行，也不检查目标表是否已有数据；重复执行前需要清理目标表。

use std::sync::Arc;

use genie_bridge_domain::{CommandExecutableStore, ExecutableArgumentRow};
use genie_bridge_errors::{BridgeError, BridgeResult};
use metrics::counter;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::executable;

/// 一次迁移的统计结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub commands_scanned: usize,
    pub commands_migrated: usize,
    pub commands_skipped: usize,
    pub arguments_inserted: usize,
}

pub struct ExecutableMigration<S: CommandExecutableStore + ?Sized> {
    store: Arc<S>,
}

impl<S: CommandExecutableStore + ?Sized> ExecutableMigration<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 执行迁移，任一写入失败时立即返回错误，已写入的行不会回滚
    #[instrument(skip(self))]
    pub async fn run(&self) -> BridgeResult<MigrationReport> {
        let rows = self.store.fetch_command_executables().await?;
        info!("开始迁移 {} 个命令的可执行参数", rows.len());

        let mut report = MigrationReport {
            commands_scanned: rows.len(),
            ..Default::default()
        };

        for row in rows {
            counter!("command_migration_rows_total").increment(1);
            let arguments = executable::split(&row.executable);
            if arguments.is_empty() {
                debug!("命令 {} 的可执行字符串为空，跳过", row.id);
                counter!("command_migration_skipped_total").increment(1);
                report.commands_skipped += 1;
                continue;
            }

            for (index, argument) in arguments.into_iter().enumerate() {
                let order_index = i32::try_from(index).map_err(|_| {
                    BridgeError::internal(format!("命令 {} 的参数数量超出范围", row.id))
                })?;
                let argument_row = ExecutableArgumentRow::new(row.id, argument, order_index);
                if let Err(e) = self.store.insert_argument(&argument_row).await {
                    warn!("写入命令 {} 的第 {} 个参数失败: {}", row.id, order_index, e);
                    return Err(e);
                }
                counter!("command_migration_arguments_total").increment(1);
                report.arguments_inserted += 1;
            }

            debug!("命令 {} 迁移完成", row.id);
            report.commands_migrated += 1;
        }

        info!(
            "可执行参数迁移完成: 扫描 {} 个命令, 迁移 {} 个, 跳过 {} 个, 写入 {} 个参数",
            report.commands_scanned,
            report.commands_migrated,
            report.commands_skipped,
            report.arguments_inserted
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_bridge_domain::LegacyCommandRow;
    use genie_bridge_testing_utils::mocks::MockCommandExecutableStore;

    #[tokio::test]
    async fn test_migrates_arguments_in_order() {
        let store = Arc::new(MockCommandExecutableStore::with_rows(vec![LegacyCommandRow::new(
            42,
            "spark-submit --master yarn",
        )]));

        let report = ExecutableMigration::new(store.clone()).run().await.unwrap();

        assert_eq!(
            store.inserted(),
            vec![
                ExecutableArgumentRow::new(42, "spark-submit", 0),
                ExecutableArgumentRow::new(42, "--master", 1),
                ExecutableArgumentRow::new(42, "yarn", 2),
            ]
        );
        assert_eq!(report.commands_migrated, 1);
        assert_eq!(report.arguments_inserted, 3);
    }

    #[tokio::test]
    async fn test_skips_blank_executables() {
        let store = Arc::new(MockCommandExecutableStore::with_rows(vec![
            LegacyCommandRow::new(1, "   "),
            LegacyCommandRow::new(2, "hive\t-f"),
            LegacyCommandRow::new(3, ""),
        ]));

        let report = ExecutableMigration::new(store.clone()).run().await.unwrap();

        assert_eq!(
            report,
            MigrationReport {
                commands_scanned: 3,
                commands_migrated: 1,
                commands_skipped: 2,
                arguments_inserted: 2,
            }
        );
        assert!(store.inserted().iter().all(|row| row.command_id == 2));
    }

    #[tokio::test]
    async fn test_empty_table() {
        let store = Arc::new(MockCommandExecutableStore::new());
        let report = ExecutableMigration::new(store.clone()).run().await.unwrap();
        assert_eq!(report, MigrationReport::default());
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_stops_migration() {
        let store = Arc::new(
            MockCommandExecutableStore::with_rows(vec![
                LegacyCommandRow::new(1, "a b"),
                LegacyCommandRow::new(2, "c"),
            ])
            .fail_inserts_after(1),
        );

        let result = ExecutableMigration::new(store.clone()).run().await;

        assert!(result.is_err());
        // 失败前写入的行保留
        assert_eq!(store.inserted(), vec![ExecutableArgumentRow::new(1, "a", 0)]);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let store = Arc::new(MockCommandExecutableStore::new().fail_fetch());
        let err = ExecutableMigration::new(store.clone()).run().await.unwrap_err();
        assert!(matches!(err, BridgeError::Internal(_)));
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_works_with_trait_object() {
        let store: Arc<dyn CommandExecutableStore> = Arc::new(
            MockCommandExecutableStore::with_rows(vec![LegacyCommandRow::new(7, "pig")]),
        );
        let report = ExecutableMigration::new(store).run().await.unwrap();
        assert_eq!(report.arguments_inserted, 1);
    }
}
