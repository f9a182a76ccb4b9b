pub mod common;
pub mod convert;
pub mod migrate;

pub use common::{init_logging, load_config};
pub use convert::{convert_document, ConvertOptions, EntityKind, Target};
pub use migrate::run_migration;
