//! Mock implementations of repository traits
//!
//! 内存实现，用于在没有数据库连接的情况下测试迁移逻辑。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use genie_bridge_domain::{CommandExecutableStore, ExecutableArgumentRow, LegacyCommandRow};
use genie_bridge_errors::{BridgeError, BridgeResult};

/// Mock implementation of CommandExecutableStore for testing
#[derive(Debug, Clone, Default)]
pub struct MockCommandExecutableStore {
    rows: Arc<Mutex<Vec<LegacyCommandRow>>>,
    inserted: Arc<Mutex<Vec<ExecutableArgumentRow>>>,
    fail_inserts_after: Option<usize>,
    fail_fetch: bool,
}

impl MockCommandExecutableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<LegacyCommandRow>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            ..Default::default()
        }
    }

    /// 成功写入 `count` 行之后，后续写入都返回数据库错误
    pub fn fail_inserts_after(mut self, count: usize) -> Self {
        self.fail_inserts_after = Some(count);
        self
    }

    pub fn fail_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn inserted(&self) -> Vec<ExecutableArgumentRow> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutableStore for MockCommandExecutableStore {
    async fn fetch_command_executables(&self) -> BridgeResult<Vec<LegacyCommandRow>> {
        if self.fail_fetch {
            return Err(BridgeError::internal("模拟读取失败"));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_argument(&self, row: &ExecutableArgumentRow) -> BridgeResult<()> {
        let mut inserted = self.inserted.lock().unwrap();
        if let Some(limit) = self.fail_inserts_after {
            if inserted.len() >= limit {
                return Err(BridgeError::internal("模拟写入失败"));
            }
        }
        inserted.push(row.clone());
        Ok(())
    }
}
