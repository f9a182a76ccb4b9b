//! `migrate-executables` 子命令：把命令表中的可执行字符串拆分写入参数表

use anyhow::{Context, Result};
use genie_bridge_config::AppConfig;
use genie_bridge_core::{ExecutableMigration, MigrationReport};
use genie_bridge_infrastructure::{DatabaseManager, ExecutableTables};
use tracing::info;

pub async fn run_migration(config: &AppConfig, ensure_schema: bool) -> Result<MigrationReport> {
    let tables = ExecutableTables::from_config(&config.migration)?;
    let manager = DatabaseManager::new(&config.database)
        .await
        .context("连接数据库失败")?;
    manager
        .health_check()
        .await
        .context("数据库健康检查失败")?;

    if ensure_schema {
        manager.ensure_schema(&tables).await.context("创建迁移表失败")?;
    }

    info!(
        "开始迁移: {} -> {}",
        tables.source(),
        tables.target()
    );
    let store = manager.command_executable_store(tables);
    let result = ExecutableMigration::new(store).run().await;
    manager.close().await;

    result.context("命令可执行参数迁移失败")
}
