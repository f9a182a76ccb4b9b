//! 领域仓储抽象
//!
//! 批量迁移只需要读取命令表并写入参数表，这里只定义这两类操作。

use async_trait::async_trait;
use genie_bridge_errors::BridgeResult;
use serde::{Deserialize, Serialize};

/// 命令表中待迁移的一行：`SELECT id, executable FROM commands`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCommandRow {
    pub id: i64,
    pub executable: String,
}

impl LegacyCommandRow {
    pub fn new<S: Into<String>>(id: i64, executable: S) -> Self {
        Self {
            id,
            executable: executable.into(),
        }
    }
}

/// 参数表中的一行，`order_index` 从0开始并在同一命令内严格递增
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableArgumentRow {
    pub command_id: i64,
    pub argument: String,
    pub order_index: i32,
}

impl ExecutableArgumentRow {
    pub fn new<S: Into<String>>(command_id: i64, argument: S, order_index: i32) -> Self {
        Self {
            command_id,
            argument: argument.into(),
            order_index,
        }
    }
}

/// 命令可执行参数的存储抽象
#[async_trait]
pub trait CommandExecutableStore: Send + Sync {
    async fn fetch_command_executables(&self) -> BridgeResult<Vec<LegacyCommandRow>>;
    async fn insert_argument(&self, row: &ExecutableArgumentRow) -> BridgeResult<()>;
}
