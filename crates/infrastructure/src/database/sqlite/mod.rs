pub mod sqlite_command_executable_store;

pub use sqlite_command_executable_store::SqliteCommandExecutableStore;
