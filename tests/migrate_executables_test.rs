use genie_bridge::run_migration;
use genie_bridge_config::{AppConfig, DatabaseConfig};
use genie_bridge_infrastructure::SqliteCommandExecutableStore;
use sqlx::Row;

fn sqlite_config(url: &str) -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: url.to_string(),
            max_connections: 1,
            min_connections: 1,
            connection_timeout_seconds: 5,
        },
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_run_migration_against_sqlite_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("genie.db").display());

    let store = SqliteCommandExecutableStore::new_embedded(&url).await.unwrap();
    for (id, executable) in [(1_i64, "spark-submit --master yarn"), (2, "")] {
        sqlx::query("INSERT INTO commands (id, executable) VALUES (?, ?)")
            .bind(id)
            .bind(executable)
            .execute(store.pool())
            .await
            .unwrap();
    }
    store.pool().close().await;

    let report = run_migration(&sqlite_config(&url), false).await.unwrap();
    assert_eq!(report.commands_scanned, 2);
    assert_eq!(report.commands_migrated, 1);
    assert_eq!(report.commands_skipped, 1);
    assert_eq!(report.arguments_inserted, 3);

    let store = SqliteCommandExecutableStore::new_embedded(&url).await.unwrap();
    let arguments: Vec<String> = sqlx::query(
        "SELECT argument FROM command_executable_arguments WHERE command_id = 1 ORDER BY order_index",
    )
    .fetch_all(store.pool())
    .await
    .unwrap()
    .iter()
    .map(|row| row.get("argument"))
    .collect();
    assert_eq!(arguments, vec!["spark-submit", "--master", "yarn"]);
}

#[tokio::test]
async fn test_run_migration_creates_schema_on_request() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("empty.db").display());

    let report = run_migration(&sqlite_config(&url), true).await.unwrap();
    assert_eq!(report.commands_scanned, 0);
    assert_eq!(report.arguments_inserted, 0);
}

#[tokio::test]
async fn test_run_migration_rejects_bad_table_names() {
    let mut config = sqlite_config("sqlite::memory:");
    config.migration.target_table = "args; DROP TABLE commands".to_string();
    assert!(run_migration(&config, true).await.is_err());
}
