//! 旧模式与结构化模式之间的实体转换
//!
//! 每个子模块针对一种实体，提供 `to_structured` / `to_legacy` 两个方向的纯函数。
//! 转换从不修改输入，总是返回新的值。

pub mod application;
pub mod cluster;
pub mod command;
pub mod job_request;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use genie_bridge_domain::{ExecutionEnvironment, Metadata};

use crate::tags;

fn environment(
    configs: &BTreeSet<String>,
    dependencies: &BTreeSet<String>,
    setup_file: &Option<String>,
) -> ExecutionEnvironment {
    ExecutionEnvironment::new(configs.clone(), dependencies.clone(), setup_file.clone())
}

/// 旧记录缺少时间戳时取当前时间
fn timestamps(
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    (created.unwrap_or(now), updated.unwrap_or(now))
}

/// 旧模式中各资源共有的元数据字段
struct LegacyFields<'a, S> {
    name: &'a str,
    user: &'a str,
    version: &'a Option<String>,
    status: S,
    tags: &'a BTreeSet<String>,
    description: &'a Option<String>,
    metadata: &'a Option<serde_json::Value>,
}

impl<S> LegacyFields<'_, S> {
    fn into_metadata(self) -> Metadata<S> {
        Metadata {
            name: self.name.to_string(),
            user: self.user.to_string(),
            version: self.version.clone(),
            status: self.status,
            tags: tags::strip_reserved(self.tags),
            description: self.description.clone(),
            metadata: self.metadata.clone(),
        }
    }
}
