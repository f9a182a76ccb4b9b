//! Test data builders
//!
//! 旧模式实体的默认值对应一条完整、合法的记录：带ID、无时间戳、
//! 无可选字段，便于测试只覆盖关心的字段。

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use genie_bridge_domain::{
    AgentConfigRequest, AgentEnvironmentRequest, ApplicationStatus, ClusterCriteria,
    ClusterStatus, CommandStatus, Criterion, ExecutionEnvironment, ExecutionResourceCriteria,
    JobMetadata, JobRequest, LegacyApplication, LegacyCluster, LegacyCommand, LegacyJobRequest,
    DEFAULT_CHECK_DELAY_MS,
};

/// 由字符串切片构造有序集合
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// 旧模式资源共有字段的 builder 方法
macro_rules! legacy_resource_methods {
    ($field:ident, $status:ty, $output:ty) => {
        pub fn with_id(mut self, id: &str) -> Self {
            self.$field.id = Some(id.to_string());
            self
        }

        pub fn without_id(mut self) -> Self {
            self.$field.id = None;
            self
        }

        pub fn with_name(mut self, name: &str) -> Self {
            self.$field.name = name.to_string();
            self
        }

        pub fn with_user(mut self, user: &str) -> Self {
            self.$field.user = user.to_string();
            self
        }

        pub fn with_status(mut self, status: $status) -> Self {
            self.$field.status = status;
            self
        }

        pub fn with_tags(mut self, tags: &[&str]) -> Self {
            self.$field.tags = set(tags);
            self
        }

        pub fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
            self.$field.created = Some(created);
            self.$field.updated = Some(updated);
            self
        }

        pub fn with_description(mut self, description: &str) -> Self {
            self.$field.description = Some(description.to_string());
            self
        }

        pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
            self.$field.metadata = Some(metadata);
            self
        }

        pub fn with_configs(mut self, configs: &[&str]) -> Self {
            self.$field.configs = set(configs);
            self
        }

        pub fn with_dependencies(mut self, dependencies: &[&str]) -> Self {
            self.$field.dependencies = set(dependencies);
            self
        }

        pub fn with_setup_file(mut self, setup_file: &str) -> Self {
            self.$field.setup_file = Some(setup_file.to_string());
            self
        }

        pub fn build(self) -> $output {
            self.$field
        }
    };
}

pub struct LegacyApplicationBuilder {
    application: LegacyApplication,
}

impl LegacyApplicationBuilder {
    pub fn new() -> Self {
        Self {
            application: LegacyApplication {
                id: Some("app-1".to_string()),
                created: None,
                updated: None,
                name: "spark".to_string(),
                user: "genie".to_string(),
                version: Some("2.4.0".to_string()),
                status: ApplicationStatus::Active,
                description: None,
                tags: BTreeSet::new(),
                metadata: None,
                configs: BTreeSet::new(),
                dependencies: BTreeSet::new(),
                setup_file: None,
                application_type: None,
            },
        }
    }

    pub fn with_type(mut self, application_type: &str) -> Self {
        self.application.application_type = Some(application_type.to_string());
        self
    }

    legacy_resource_methods!(application, ApplicationStatus, LegacyApplication);
}

impl Default for LegacyApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LegacyClusterBuilder {
    cluster: LegacyCluster,
}

impl LegacyClusterBuilder {
    pub fn new() -> Self {
        Self {
            cluster: LegacyCluster {
                id: Some("cluster-1".to_string()),
                created: None,
                updated: None,
                name: "yarn".to_string(),
                user: "genie".to_string(),
                version: Some("2.7.1".to_string()),
                status: ClusterStatus::Up,
                description: None,
                tags: BTreeSet::new(),
                metadata: None,
                configs: BTreeSet::new(),
                dependencies: BTreeSet::new(),
                setup_file: None,
            },
        }
    }

    legacy_resource_methods!(cluster, ClusterStatus, LegacyCluster);
}

impl Default for LegacyClusterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LegacyCommandBuilder {
    command: LegacyCommand,
}

impl LegacyCommandBuilder {
    pub fn new() -> Self {
        Self {
            command: LegacyCommand {
                id: Some("cmd-1".to_string()),
                created: None,
                updated: None,
                name: "spark-submit".to_string(),
                user: "genie".to_string(),
                version: Some("2.4.0".to_string()),
                status: CommandStatus::Active,
                description: None,
                tags: BTreeSet::new(),
                metadata: None,
                configs: BTreeSet::new(),
                dependencies: BTreeSet::new(),
                setup_file: None,
                executable: Some("spark-submit --master yarn".to_string()),
                executable_and_arguments: Vec::new(),
                check_delay: DEFAULT_CHECK_DELAY_MS as i64,
                memory: None,
            },
        }
    }

    pub fn with_executable(mut self, executable: &str) -> Self {
        self.command.executable = Some(executable.to_string());
        self
    }

    pub fn without_executable(mut self) -> Self {
        self.command.executable = None;
        self
    }

    pub fn with_executable_and_arguments(mut self, arguments: &[&str]) -> Self {
        self.command.executable_and_arguments =
            arguments.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_memory(mut self, memory: i32) -> Self {
        self.command.memory = Some(memory);
        self
    }

    pub fn with_check_delay(mut self, check_delay: i64) -> Self {
        self.command.check_delay = check_delay;
        self
    }

    legacy_resource_methods!(command, CommandStatus, LegacyCommand);
}

impl Default for LegacyCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LegacyJobRequestBuilder {
    request: LegacyJobRequest,
}

impl LegacyJobRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: LegacyJobRequest {
                id: None,
                name: "test_job".to_string(),
                user: "genie".to_string(),
                version: Some("1.0".to_string()),
                description: None,
                tags: BTreeSet::new(),
                metadata: None,
                cluster_criterias: vec![ClusterCriteria::new(set(&["sched:adhoc"]))],
                command_criteria: set(&["type:spark"]),
                applications: vec![],
                command_args: None,
                disable_log_archival: false,
                email: None,
                group: None,
                grouping: None,
                grouping_instance: None,
                configs: BTreeSet::new(),
                dependencies: BTreeSet::new(),
                setup_file: None,
                timeout: None,
                cpu: None,
                memory: None,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.request.id = Some(id.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.request.tags = set(tags);
        self
    }

    pub fn with_cluster_criterias(mut self, criterias: &[&[&str]]) -> Self {
        self.request.cluster_criterias = criterias
            .iter()
            .map(|tags| ClusterCriteria::new(set(tags)))
            .collect();
        self
    }

    pub fn with_command_criteria(mut self, tags: &[&str]) -> Self {
        self.request.command_criteria = set(tags);
        self
    }

    pub fn with_applications(mut self, applications: &[&str]) -> Self {
        self.request.applications = applications.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_command_args(mut self, command_args: &str) -> Self {
        self.request.command_args = Some(command_args.to_string());
        self
    }

    pub fn with_agent_settings(
        mut self,
        cpu: Option<i32>,
        memory: Option<i32>,
        timeout: Option<i32>,
        disable_log_archival: bool,
    ) -> Self {
        self.request.cpu = cpu;
        self.request.memory = memory;
        self.request.timeout = timeout;
        self.request.disable_log_archival = disable_log_archival;
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.request.email = Some(email.to_string());
        self
    }

    pub fn build(self) -> LegacyJobRequest {
        self.request
    }
}

impl Default for LegacyJobRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 结构化作业请求的 builder
pub struct JobRequestBuilder {
    request: JobRequest,
}

impl JobRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: JobRequest {
                requested_id: None,
                resources: ExecutionEnvironment::default(),
                command_args: None,
                metadata: JobMetadata {
                    name: "test_job".to_string(),
                    user: "genie".to_string(),
                    version: Some("1.0".to_string()),
                    ..Default::default()
                },
                criteria: ExecutionResourceCriteria {
                    cluster_criteria: vec![Criterion::with_tags(["sched:adhoc"])],
                    command_criterion: Criterion::with_tags(["type:spark"]),
                    application_ids: vec![],
                },
                agent_environment: AgentEnvironmentRequest::default(),
                agent_config: AgentConfigRequest::default(),
            },
        }
    }

    pub fn with_requested_id(mut self, id: &str) -> Self {
        self.request.requested_id = Some(id.to_string());
        self
    }

    pub fn with_cluster_criteria(mut self, criteria: Vec<Criterion>) -> Self {
        self.request.criteria.cluster_criteria = criteria;
        self
    }

    pub fn with_command_criterion(mut self, criterion: Criterion) -> Self {
        self.request.criteria.command_criterion = criterion;
        self
    }

    pub fn with_command_args<S: Into<String>>(mut self, args: Vec<S>) -> Self {
        self.request.command_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> JobRequest {
        self.request
    }
}

impl Default for JobRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
