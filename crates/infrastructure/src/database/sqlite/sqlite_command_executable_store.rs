use async_trait::async_trait;
use genie_bridge_domain::{CommandExecutableStore, ExecutableArgumentRow, LegacyCommandRow};
use genie_bridge_errors::BridgeResult;
use sqlx::{Row, SqlitePool};
use tracing::{debug, instrument};

use crate::database::ExecutableTables;

pub struct SqliteCommandExecutableStore {
    pool: SqlitePool,
    tables: ExecutableTables,
}

impl SqliteCommandExecutableStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_tables(pool, ExecutableTables::default())
    }

    pub fn with_tables(pool: SqlitePool, tables: ExecutableTables) -> Self {
        Self { pool, tables }
    }

    /// 创建嵌入式SQLite存储，自动创建数据库文件和表
    pub async fn new_embedded(database_path: &str) -> BridgeResult<Self> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        debug!("Creating embedded SQLite command store at: {}", database_path);

        let connect_options = SqliteConnectOptions::from_str(database_path)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 创建命令表和参数表（如不存在）
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> BridgeResult<()> {
        debug!("Ensuring SQLite schema for executable migration");

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY,
                executable TEXT NOT NULL
            )
            "#,
            self.tables.source()
        ))
        .execute(&self.pool)
        .await?;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                command_id INTEGER NOT NULL,
                argument TEXT NOT NULL,
                order_index INTEGER NOT NULL,
                PRIMARY KEY (command_id, order_index)
            )
            "#,
            self.tables.target()
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CommandExecutableStore for SqliteCommandExecutableStore {
    #[instrument(skip(self))]
    async fn fetch_command_executables(&self) -> BridgeResult<Vec<LegacyCommandRow>> {
        let rows = sqlx::query(&self.tables.select_executables_sql())
            .fetch_all(&self.pool)
            .await?;

        let commands = rows
            .iter()
            .map(|row| -> Result<LegacyCommandRow, sqlx::Error> {
                Ok(LegacyCommandRow::new(
                    row.try_get::<i64, _>("id")?,
                    row.try_get::<String, _>("executable")?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Fetched {} command executables", commands.len());
        Ok(commands)
    }

    #[instrument(skip(self, row), fields(command_id = row.command_id, order_index = row.order_index))]
    async fn insert_argument(&self, row: &ExecutableArgumentRow) -> BridgeResult<()> {
        sqlx::query(&self.tables.insert_argument_sql(["?", "?", "?"]))
            .bind(row.command_id)
            .bind(&row.argument)
            .bind(row.order_index)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
