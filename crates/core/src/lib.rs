//! 旧模式（扁平标签）与结构化模式之间的转换核心
//!
//! - [`tags`]: 保留身份标签的识别、剥离和注入
//! - [`criterion`]: 选择条件与扁平标签之间的编解码
//! - [`executable`]: 可执行字符串的拆分与拼接
//! - [`converters`]: 各实体在两种模式之间的转换
//! - [`migration`]: 命令可执行参数的批量迁移

pub mod converters;
pub mod criterion;
pub mod executable;
pub mod migration;
pub mod tags;

pub use converters::job_request::CommandArgsMode;
pub use migration::{ExecutableMigration, MigrationReport};
