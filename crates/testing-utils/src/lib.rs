//! # Genie Bridge Testing Utils
//!
//! 工作区内各 crate 共用的测试工具：
//!
//! - **Builders**: 以合理默认值构造旧模式和结构化模式的实体
//! - **Mocks**: 命令可执行参数存储的内存实现
//!
//! ```toml
//! [dev-dependencies]
//! genie-bridge-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod mocks;

pub use builders::*;
pub use mocks::*;
