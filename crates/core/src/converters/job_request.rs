use genie_bridge_domain::{
    AgentConfigRequest, AgentEnvironmentRequest, ExecutionResourceCriteria, JobMetadata,
    JobRequest, LegacyJobRequest,
};
use genie_bridge_errors::InvalidCriterionError;

use super::environment;
use crate::{criterion, executable};

/// 旧模式作业参数字符串转换为参数列表的方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandArgsMode {
    /// 整个字符串作为一个参数
    #[default]
    Verbatim,
    /// 按空白拆分，引号内的内容作为一个参数
    Tokenize,
}

pub fn to_structured(legacy: &LegacyJobRequest) -> Result<JobRequest, InvalidCriterionError> {
    to_structured_with(legacy, CommandArgsMode::default())
}

/// 旧模式作业请求转换为结构化请求
///
/// 集群和命令选择条件使用严格解码，出现多个身份标签或空条件时失败。
pub fn to_structured_with(
    legacy: &LegacyJobRequest,
    mode: CommandArgsMode,
) -> Result<JobRequest, InvalidCriterionError> {
    let cluster_criteria = legacy
        .cluster_criterias
        .iter()
        .map(criterion::from_cluster_criteria)
        .collect::<Result<Vec<_>, _>>()?;
    let command_criterion = criterion::decode_strict(&legacy.command_criteria)?;

    let command_args = legacy.command_args.as_ref().map(|args| match mode {
        CommandArgsMode::Verbatim => vec![args.clone()],
        CommandArgsMode::Tokenize => executable::split_arguments(args),
    });

    Ok(JobRequest {
        requested_id: legacy.id.clone(),
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        command_args,
        metadata: JobMetadata {
            name: legacy.name.clone(),
            user: legacy.user.clone(),
            version: legacy.version.clone(),
            tags: legacy.tags.clone(),
            description: legacy.description.clone(),
            metadata: legacy.metadata.clone(),
            email: legacy.email.clone(),
            group: legacy.group.clone(),
            grouping: legacy.grouping.clone(),
            grouping_instance: legacy.grouping_instance.clone(),
        },
        criteria: ExecutionResourceCriteria {
            cluster_criteria,
            command_criterion,
            application_ids: legacy.applications.clone(),
        },
        agent_environment: AgentEnvironmentRequest {
            requested_job_cpu: legacy.cpu,
            requested_job_memory: legacy.memory,
        },
        agent_config: AgentConfigRequest {
            archiving_disabled: legacy.disable_log_archival,
            interactive: false,
            timeout_requested: legacy.timeout,
        },
    })
}

/// 结构化作业请求转换为旧模式，集群选择条件保持原有顺序
pub fn to_legacy(request: &JobRequest) -> LegacyJobRequest {
    let metadata = &request.metadata;
    let resources = &request.resources;
    LegacyJobRequest {
        id: request.requested_id.clone(),
        name: metadata.name.clone(),
        user: metadata.user.clone(),
        version: metadata.version.clone(),
        description: metadata.description.clone(),
        tags: metadata.tags.clone(),
        metadata: metadata.metadata.clone(),
        cluster_criterias: request
            .criteria
            .cluster_criteria
            .iter()
            .map(criterion::to_cluster_criteria)
            .collect(),
        command_criteria: criterion::encode(&request.criteria.command_criterion),
        applications: request.criteria.application_ids.clone(),
        command_args: request
            .command_args
            .as_deref()
            .filter(|args| !args.is_empty())
            .map(executable::join),
        disable_log_archival: request.agent_config.archiving_disabled,
        email: metadata.email.clone(),
        group: metadata.group.clone(),
        grouping: metadata.grouping.clone(),
        grouping_instance: metadata.grouping_instance.clone(),
        configs: resources.configs.clone(),
        dependencies: resources.dependencies.clone(),
        setup_file: resources.setup_file.clone(),
        timeout: request.agent_config.timeout_requested,
        cpu: request.agent_environment.requested_job_cpu,
        memory: request.agent_environment.requested_job_memory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_bridge_domain::{ClusterCriteria, Criterion};
    use genie_bridge_testing_utils::builders::{set, JobRequestBuilder, LegacyJobRequestBuilder};

    #[test]
    fn test_to_legacy_preserves_cluster_criteria_order() {
        let request = JobRequestBuilder::new()
            .with_cluster_criteria(vec![
                Criterion::with_tags(["prod"]),
                Criterion::with_tags(["dev"]),
            ])
            .build();

        let legacy = to_legacy(&request);
        assert_eq!(
            legacy.cluster_criterias,
            vec![
                ClusterCriteria::new(set(&["prod"])),
                ClusterCriteria::new(set(&["dev"])),
            ]
        );
    }

    #[test]
    fn test_to_legacy_encodes_command_criterion() {
        let request = JobRequestBuilder::new()
            .with_command_criterion(Criterion {
                id: Some("cmd1".to_string()),
                name: Some("spark".to_string()),
                tags: set(&["type:spark"]),
            })
            .build();
        let legacy = to_legacy(&request);
        assert_eq!(
            legacy.command_criteria,
            set(&["genie.id:cmd1", "genie.name:spark", "type:spark"])
        );
    }

    #[test]
    fn test_to_structured_decodes_criteria() {
        let legacy = LegacyJobRequestBuilder::new()
            .with_cluster_criterias(&[&["genie.name:prod-yarn", "sched:sla"], &["sched:adhoc"]])
            .with_command_criteria(&["genie.id:cmd1", "type:spark"])
            .build();
        let request = to_structured(&legacy).unwrap();

        let clusters = &request.criteria.cluster_criteria;
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].name.as_deref(), Some("prod-yarn"));
        assert_eq!(clusters[0].tags, set(&["sched:sla"]));
        assert_eq!(clusters[1], Criterion::with_tags(["sched:adhoc"]));
        assert_eq!(request.criteria.command_criterion.id.as_deref(), Some("cmd1"));
    }

    #[test]
    fn test_to_structured_rejects_invalid_criteria() {
        let legacy = LegacyJobRequestBuilder::new()
            .with_cluster_criterias(&[&[]])
            .build();
        assert_eq!(to_structured(&legacy), Err(InvalidCriterionError::Empty));

        let legacy = LegacyJobRequestBuilder::new()
            .with_command_criteria(&["genie.id:a", "genie.id:b"])
            .build();
        assert!(matches!(
            to_structured(&legacy),
            Err(InvalidCriterionError::AmbiguousIdentity { .. })
        ));
    }

    #[test]
    fn test_command_args_modes() {
        let legacy = LegacyJobRequestBuilder::new()
            .with_command_args(r#"-e "select 1" --verbose"#)
            .build();

        let verbatim = to_structured(&legacy).unwrap();
        assert_eq!(
            verbatim.command_args,
            Some(vec![r#"-e "select 1" --verbose"#.to_string()])
        );

        let tokenized = to_structured_with(&legacy, CommandArgsMode::Tokenize).unwrap();
        assert_eq!(
            tokenized.command_args,
            Some(vec!["-e".to_string(), "select 1".to_string(), "--verbose".to_string()])
        );

        let without = LegacyJobRequestBuilder::new().build();
        assert_eq!(to_structured(&without).unwrap().command_args, None);
    }

    #[test]
    fn test_to_legacy_joins_command_args() {
        let request = JobRequestBuilder::new()
            .with_command_args(vec!["-f", "query.sql"])
            .build();
        assert_eq!(to_legacy(&request).command_args.as_deref(), Some("-f query.sql"));

        let request = JobRequestBuilder::new().with_command_args(Vec::<&str>::new()).build();
        assert_eq!(to_legacy(&request).command_args, None);
    }

    #[test]
    fn test_agent_settings_and_metadata() {
        let legacy = LegacyJobRequestBuilder::new()
            .with_id("job-1")
            .with_tags(&["genie.id:job-1", "adhoc"])
            .with_agent_settings(Some(2), Some(4096), Some(3600), true)
            .with_email("user@example.com")
            .build();
        let request = to_structured(&legacy).unwrap();

        assert_eq!(request.requested_id.as_deref(), Some("job-1"));
        // 作业标签原样保留
        assert_eq!(request.metadata.tags, set(&["genie.id:job-1", "adhoc"]));
        assert_eq!(request.agent_environment.requested_job_cpu, Some(2));
        assert_eq!(request.agent_environment.requested_job_memory, Some(4096));
        assert_eq!(request.agent_config.timeout_requested, Some(3600));
        assert!(request.agent_config.archiving_disabled);
        assert!(!request.agent_config.interactive);
        assert_eq!(request.metadata.email.as_deref(), Some("user@example.com"));

        assert_eq!(to_legacy(&request), legacy);
    }
}
