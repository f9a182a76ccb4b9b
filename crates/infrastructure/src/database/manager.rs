use std::sync::Arc;
use std::time::Duration;

use genie_bridge_config::DatabaseConfig;
use genie_bridge_domain::CommandExecutableStore;
use genie_bridge_errors::BridgeResult;
use tracing::{debug, info};

use super::postgres::PostgresCommandExecutableStore;
use super::sqlite::SqliteCommandExecutableStore;
use super::ExecutableTables;

/// 按连接串识别数据库类型
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

impl DatabaseType {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            DatabaseType::PostgreSQL
        } else {
            DatabaseType::SQLite
        }
    }
}

pub enum DatabasePool {
    PostgreSQL(sqlx::PgPool),
    SQLite(sqlx::SqlitePool),
}

impl DatabasePool {
    /// 按配置创建连接池，类型由URL决定
    pub async fn new(config: &DatabaseConfig) -> BridgeResult<Self> {
        let acquire_timeout = Duration::from_secs(config.connection_timeout_seconds);

        match DatabaseType::from_url(&config.url) {
            DatabaseType::PostgreSQL => {
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .acquire_timeout(acquire_timeout)
                    .connect(&config.url)
                    .await?;
                Ok(DatabasePool::PostgreSQL(pool))
            }
            DatabaseType::SQLite => {
                let pool = sqlx::sqlite::SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .acquire_timeout(acquire_timeout)
                    .connect(&config.url)
                    .await?;
                Ok(DatabasePool::SQLite(pool))
            }
        }
    }

    pub fn database_type(&self) -> DatabaseType {
        match self {
            DatabasePool::PostgreSQL(_) => DatabaseType::PostgreSQL,
            DatabasePool::SQLite(_) => DatabaseType::SQLite,
        }
    }

    pub async fn health_check(&self) -> BridgeResult<()> {
        match self {
            DatabasePool::PostgreSQL(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            DatabasePool::SQLite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    pub async fn close(&self) {
        match self {
            DatabasePool::PostgreSQL(pool) => pool.close().await,
            DatabasePool::SQLite(pool) => pool.close().await,
        }
    }
}

/// 统一的数据库入口，负责连接池和存储实现的创建
pub struct DatabaseManager {
    pool: DatabasePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> BridgeResult<Self> {
        let pool = DatabasePool::new(config).await?;
        info!("已连接数据库: {:?}", pool.database_type());
        Ok(Self { pool })
    }

    pub fn database_type(&self) -> DatabaseType {
        self.pool.database_type()
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub async fn health_check(&self) -> BridgeResult<()> {
        self.pool.health_check().await
    }

    pub async fn close(&self) {
        self.pool.close().await
    }

    /// 创建对应数据库的命令可执行参数存储
    pub fn command_executable_store(
        &self,
        tables: ExecutableTables,
    ) -> Arc<dyn CommandExecutableStore> {
        debug!(
            "Creating command executable store: {} -> {}",
            tables.source(),
            tables.target()
        );
        match &self.pool {
            DatabasePool::PostgreSQL(pool) => Arc::new(PostgresCommandExecutableStore::with_tables(
                pool.clone(),
                tables,
            )),
            DatabasePool::SQLite(pool) => Arc::new(SqliteCommandExecutableStore::with_tables(
                pool.clone(),
                tables,
            )),
        }
    }

    /// 为当前数据库创建迁移所需的表（如不存在）
    pub async fn ensure_schema(&self, tables: &ExecutableTables) -> BridgeResult<()> {
        match &self.pool {
            DatabasePool::PostgreSQL(pool) => {
                PostgresCommandExecutableStore::with_tables(pool.clone(), tables.clone())
                    .ensure_schema()
                    .await
            }
            DatabasePool::SQLite(pool) => {
                SqliteCommandExecutableStore::with_tables(pool.clone(), tables.clone())
                    .ensure_schema()
                    .await
            }
        }
    }
}
