use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use genie_bridge_errors::{InvalidCriterionError, InvalidStatusError};
use serde::{de, Deserialize, Deserializer, Serialize};

/// 命令默认的作业状态检查间隔（毫秒）
pub const DEFAULT_CHECK_DELAY_MS: u64 = 10_000;

pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(DEFAULT_CHECK_DELAY_MS);

/// 执行环境：配置文件、依赖文件和可选的初始化脚本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionEnvironment {
    #[serde(default)]
    pub configs: BTreeSet<String>,
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_file: Option<String>,
}

impl ExecutionEnvironment {
    pub fn new(
        configs: BTreeSet<String>,
        dependencies: BTreeSet<String>,
        setup_file: Option<String>,
    ) -> Self {
        Self {
            configs,
            dependencies,
            setup_file,
        }
    }
}

/// 选择条件：用于为作业匹配集群或命令的谓词，不是实体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Criterion {
    /// 构造非空的选择条件
    pub fn new(
        id: Option<String>,
        name: Option<String>,
        tags: BTreeSet<String>,
    ) -> Result<Self, InvalidCriterionError> {
        let criterion = Self { id, name, tags };
        criterion.validate()?;
        Ok(criterion)
    }

    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: None,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.tags.is_empty()
    }

    pub fn validate(&self) -> Result<(), InvalidCriterionError> {
        if self.is_empty() {
            return Err(InvalidCriterionError::Empty);
        }
        Ok(())
    }
}

/// 旧模式中的集群选择条件，仅包含一组扁平标签
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterCriteria {
    pub tags: BTreeSet<String>,
}

impl ClusterCriteria {
    pub fn new(tags: BTreeSet<String>) -> Self {
        Self { tags }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEnvironmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_job_cpu: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_job_memory: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfigRequest {
    #[serde(default)]
    pub archiving_disabled: bool,
    #[serde(default)]
    pub interactive: bool,
    /// 请求的作业超时时间（秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_requested: Option<i32>,
}

/// 为各类状态生成统一的字符串映射和大小写不敏感解析，JSON 反序列化同样经过 `FromStr`
macro_rules! resource_status {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_uppercase();
                match normalized.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(InvalidStatusError::new($kind, s)),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse::<$name>().map_err(de::Error::custom)
            }
        }
    };
}

resource_status!(ApplicationStatus, "应用", {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Deprecated => "DEPRECATED",
});

resource_status!(ClusterStatus, "集群", {
    Up => "UP",
    OutOfService => "OUT_OF_SERVICE",
    Terminated => "TERMINATED",
});

resource_status!(CommandStatus, "命令", {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Deprecated => "DEPRECATED",
});

resource_status!(JobStatus, "作业", {
    Accepted => "ACCEPTED",
    Claimed => "CLAIMED",
    Failed => "FAILED",
    Init => "INIT",
    Invalid => "INVALID",
    Killed => "KILLED",
    Reserved => "RESERVED",
    Resolved => "RESOLVED",
    Running => "RUNNING",
    Succeeded => "SUCCEEDED",
});

/// `Duration` 以毫秒整数的形式序列化，与旧模式的 checkDelay 字段保持一致
pub mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }

    pub mod option {
        use std::time::Duration;

        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<Duration>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(delay) => serializer.serialize_some(&(delay.as_millis() as u64)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Duration>, D::Error> {
            Option::<u64>::deserialize(deserializer).map(|ms| ms.map(Duration::from_millis))
        }
    }
}
