use async_trait::async_trait;
use genie_bridge_domain::{CommandExecutableStore, ExecutableArgumentRow, LegacyCommandRow};
use genie_bridge_errors::BridgeResult;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use crate::database::ExecutableTables;

/// PostgreSQL 上的命令可执行参数存储
pub struct PostgresCommandExecutableStore {
    pool: PgPool,
    tables: ExecutableTables,
}

impl PostgresCommandExecutableStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_tables(pool, ExecutableTables::default())
    }

    pub fn with_tables(pool: PgPool, tables: ExecutableTables) -> Self {
        Self { pool, tables }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建命令表和参数表（如不存在），生产库中这两张表通常已由 schema 迁移创建
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> BridgeResult<()> {
        debug!("Ensuring PostgreSQL schema for executable migration");

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
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
                command_id BIGINT NOT NULL,
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
impl CommandExecutableStore for PostgresCommandExecutableStore {
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
        sqlx::query(&self.tables.insert_argument_sql(["$1", "$2", "$3"]))
            .bind(row.command_id)
            .bind(&row.argument)
            .bind(row.order_index)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
