pub mod manager;
pub mod postgres;
pub mod sqlite;
pub mod tables;

pub use manager::{DatabaseManager, DatabasePool, DatabaseType};
pub use postgres::PostgresCommandExecutableStore;
pub use sqlite::SqliteCommandExecutableStore;
pub use tables::ExecutableTables;
