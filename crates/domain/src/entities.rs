//! 新（结构化）模式的实体
//!
//! 身份、元数据、执行资源和选择条件都是显式的类型化字段。

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{
    duration_millis, AgentConfigRequest, AgentEnvironmentRequest, ApplicationStatus,
    ClusterStatus, CommandStatus, Criterion, ExecutionEnvironment,
};

/// 资源的通用元数据，`S` 为资源对应的状态类型
///
/// 结构化模式下 `tags` 不包含任何保留前缀的标签。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata<S> {
    pub name: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub status: S,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

pub type ApplicationMetadata = Metadata<ApplicationStatus>;
pub type ClusterMetadata = Metadata<ClusterStatus>;
pub type CommandMetadata = Metadata<CommandStatus>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: ApplicationMetadata,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: ClusterMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: CommandMetadata,
    /// 可执行文件及其参数，顺序有意义
    pub executable: Vec<String>,
    /// 作业默认内存（MB）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i32>,
    #[serde(with = "duration_millis")]
    pub check_delay: Duration,
}

/// 创建应用的请求，ID 由调用方可选地指定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: ApplicationMetadata,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: ClusterMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    pub metadata: CommandMetadata,
    pub executable: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i32>,
    #[serde(
        default,
        with = "duration_millis::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_delay: Option<Duration>,
}

/// 作业元数据，作业没有状态字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMetadata {
    pub name: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_instance: Option<String>,
}

/// 作业的执行资源选择条件
///
/// `cluster_criteria` 的顺序即匹配优先级。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResourceCriteria {
    pub cluster_criteria: Vec<Criterion>,
    pub command_criterion: Criterion,
    #[serde(default)]
    pub application_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,
    #[serde(default)]
    pub resources: ExecutionEnvironment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_args: Option<Vec<String>>,
    pub metadata: JobMetadata,
    pub criteria: ExecutionResourceCriteria,
    #[serde(default)]
    pub agent_environment: AgentEnvironmentRequest,
    #[serde(default)]
    pub agent_config: AgentConfigRequest,
}
