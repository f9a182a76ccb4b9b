use std::sync::Arc;

use genie_bridge_config::{DatabaseConfig, MigrationConfig};
use genie_bridge_core::ExecutableMigration;
use genie_bridge_domain::{CommandExecutableStore, ExecutableArgumentRow, LegacyCommandRow};
use genie_bridge_errors::BridgeError;
use genie_bridge_infrastructure::{DatabaseManager, ExecutableTables, SqliteCommandExecutableStore};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};

// 内存数据库每个连接各自独立，连接池只保留一个连接
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory SQLite")
}

async fn seed_commands(pool: &SqlitePool, table: &str, rows: &[(i64, &str)]) {
    for (id, executable) in rows {
        sqlx::query(&format!("INSERT INTO {table} (id, executable) VALUES (?, ?)"))
            .bind(*id)
            .bind(*executable)
            .execute(pool)
            .await
            .expect("Failed to seed command");
    }
}

async fn migrated_arguments(pool: &SqlitePool, table: &str) -> Vec<(i64, String, i32)> {
    sqlx::query(&format!(
        "SELECT command_id, argument, order_index FROM {table} ORDER BY command_id, order_index"
    ))
    .fetch_all(pool)
    .await
    .expect("Failed to read arguments")
    .iter()
    .map(|row| {
        (
            row.get::<i64, _>("command_id"),
            row.get::<String, _>("argument"),
            row.get::<i32, _>("order_index"),
        )
    })
    .collect()
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let store = SqliteCommandExecutableStore::new(memory_pool().await);
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();
    assert!(store.fetch_command_executables().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_and_insert() {
    let store = SqliteCommandExecutableStore::new(memory_pool().await);
    store.ensure_schema().await.unwrap();
    seed_commands(store.pool(), "commands", &[(2, "hive -f"), (1, "pig")]).await;

    let rows = store.fetch_command_executables().await.unwrap();
    assert_eq!(
        rows,
        vec![LegacyCommandRow::new(1, "pig"), LegacyCommandRow::new(2, "hive -f")]
    );

    store
        .insert_argument(&ExecutableArgumentRow::new(1, "pig", 0))
        .await
        .unwrap();
    assert_eq!(
        migrated_arguments(store.pool(), "command_executable_arguments").await,
        vec![(1, "pig".to_string(), 0)]
    );
}

#[tokio::test]
async fn test_duplicate_argument_position_is_rejected() {
    let store = SqliteCommandExecutableStore::new(memory_pool().await);
    store.ensure_schema().await.unwrap();

    let row = ExecutableArgumentRow::new(1, "pig", 0);
    store.insert_argument(&row).await.unwrap();
    let err = store.insert_argument(&row).await.unwrap_err();
    assert!(matches!(err, BridgeError::Database(_)));
}

#[tokio::test]
async fn test_migration_end_to_end() {
    let store = Arc::new(SqliteCommandExecutableStore::new(memory_pool().await));
    store.ensure_schema().await.unwrap();
    seed_commands(
        store.pool(),
        "commands",
        &[(42, "spark-submit --master yarn"), (43, "   "), (44, "hive\t-f  q.sql")],
    )
    .await;

    let report = ExecutableMigration::new(store.clone()).run().await.unwrap();

    assert_eq!(report.commands_scanned, 3);
    assert_eq!(report.commands_migrated, 2);
    assert_eq!(report.commands_skipped, 1);
    assert_eq!(report.arguments_inserted, 6);
    assert_eq!(
        migrated_arguments(store.pool(), "command_executable_arguments").await,
        vec![
            (42, "spark-submit".to_string(), 0),
            (42, "--master".to_string(), 1),
            (42, "yarn".to_string(), 2),
            (44, "hive".to_string(), 0),
            (44, "-f".to_string(), 1),
            (44, "q.sql".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn test_manager_with_custom_tables() {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connection_timeout_seconds: 5,
    };
    let tables = ExecutableTables::from_config(&MigrationConfig {
        source_table: "legacy_commands".to_string(),
        target_table: "legacy_command_args".to_string(),
    })
    .unwrap();

    let manager = DatabaseManager::new(&config).await.unwrap();
    manager.ensure_schema(&tables).await.unwrap();

    let genie_bridge_infrastructure::DatabasePool::SQLite(pool) = manager.pool() else {
        panic!("expected SQLite pool");
    };
    seed_commands(pool, "legacy_commands", &[(7, "presto --execute")]).await;

    let store = manager.command_executable_store(tables);
    let report = ExecutableMigration::new(store).run().await.unwrap();
    assert_eq!(report.arguments_inserted, 2);
    assert_eq!(
        migrated_arguments(pool, "legacy_command_args").await,
        vec![
            (7, "presto".to_string(), 0),
            (7, "--execute".to_string(), 1),
        ]
    );

    manager.close().await;
}
