//! `convert` 子命令：在旧模式和结构化模式之间转换单个 JSON 文档

use anyhow::{Context, Result};
use clap::ValueEnum;
use genie_bridge_core::converters::{application, cluster, command, job_request};
use genie_bridge_core::CommandArgsMode;
use genie_bridge_domain::{
    Application, Cluster, Command, JobRequest, LegacyApplication, LegacyCluster, LegacyCommand,
    LegacyJobRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Application,
    Cluster,
    Command,
    JobRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// 旧模式 -> 结构化实体（要求带ID）
    Structured,
    /// 旧模式 -> 结构化创建请求（ID可选）
    Request,
    /// 结构化实体 -> 旧模式
    Legacy,
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub entity: EntityKind,
    pub target: Target,
    pub command_args: CommandArgsMode,
}

fn parse<T: DeserializeOwned>(input: &str, what: &str) -> Result<T> {
    serde_json::from_str(input).with_context(|| format!("解析{what}JSON失败"))
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("序列化转换结果失败")
}

/// 转换一个 JSON 文档，返回格式化后的 JSON
pub fn convert_document(input: &str, options: ConvertOptions) -> Result<String> {
    debug!("转换 {:?} -> {:?}", options.entity, options.target);

    match (options.entity, options.target) {
        (EntityKind::Application, Target::Structured) => {
            let legacy: LegacyApplication = parse(input, "旧模式应用")?;
            render(&application::to_structured(&legacy)?)
        }
        (EntityKind::Application, Target::Request) => {
            let legacy: LegacyApplication = parse(input, "旧模式应用")?;
            render(&application::to_request(&legacy))
        }
        (EntityKind::Application, Target::Legacy) => {
            let structured: Application = parse(input, "应用")?;
            render(&application::to_legacy(&structured))
        }
        (EntityKind::Cluster, Target::Structured) => {
            let legacy: LegacyCluster = parse(input, "旧模式集群")?;
            render(&cluster::to_structured(&legacy)?)
        }
        (EntityKind::Cluster, Target::Request) => {
            let legacy: LegacyCluster = parse(input, "旧模式集群")?;
            render(&cluster::to_request(&legacy))
        }
        (EntityKind::Cluster, Target::Legacy) => {
            let structured: Cluster = parse(input, "集群")?;
            render(&cluster::to_legacy(&structured))
        }
        (EntityKind::Command, Target::Structured) => {
            let legacy: LegacyCommand = parse(input, "旧模式命令")?;
            render(&command::to_structured(&legacy)?)
        }
        (EntityKind::Command, Target::Request) => {
            let legacy: LegacyCommand = parse(input, "旧模式命令")?;
            render(&command::to_request(&legacy)?)
        }
        (EntityKind::Command, Target::Legacy) => {
            let structured: Command = parse(input, "命令")?;
            render(&command::to_legacy(&structured))
        }
        // 作业只有请求形式，structured 与 request 等价
        (EntityKind::JobRequest, Target::Structured | Target::Request) => {
            let legacy: LegacyJobRequest = parse(input, "旧模式作业请求")?;
            render(&job_request::to_structured_with(&legacy, options.command_args)?)
        }
        (EntityKind::JobRequest, Target::Legacy) => {
            let structured: JobRequest = parse(input, "作业请求")?;
            render(&job_request::to_legacy(&structured))
        }
    }
}
