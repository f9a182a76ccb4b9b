pub mod database;

pub use database::{
    DatabaseManager, DatabasePool, DatabaseType, ExecutableTables, PostgresCommandExecutableStore,
    SqliteCommandExecutableStore,
};
