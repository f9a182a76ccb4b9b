pub mod postgres_command_executable_store;

pub use postgres_command_executable_store::PostgresCommandExecutableStore;
