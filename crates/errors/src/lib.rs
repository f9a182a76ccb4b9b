use thiserror::Error;


/// 旧模式资源缺少标识，无法转换为新模式实体
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} 缺少资源ID，无法转换为新模式")]
pub struct MissingIdentifierError {
    pub entity: &'static str,
}

impl MissingIdentifierError {
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }
}

/// 旧模式命令既没有 `executable` 也没有 `executableAndArguments`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("命令缺少可执行文件: executable 和 executableAndArguments 都为空")]
pub struct MissingExecutableError;

/// 旧模式命令转换为新模式实体时的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandConversionError {
    #[error(transparent)]
    MissingIdentifier(#[from] MissingIdentifierError),
    #[error(transparent)]
    MissingExecutable(#[from] MissingExecutableError),
}

/// 选择条件无效：既没有ID、名称也没有标签，或身份标签存在歧义
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCriterionError {
    #[error("选择条件为空: 至少需要ID、名称或一个标签")]
    Empty,
    #[error("选择条件包含多个 {prefix} 标签: {values:?}")]
    AmbiguousIdentity {
        prefix: &'static str,
        values: Vec<String>,
    },
}

/// 无法识别的资源状态字符串
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("无效的{kind}状态: '{value}'")]
pub struct InvalidStatusError {
    pub kind: &'static str,
    pub value: String,
}

impl InvalidStatusError {
    pub fn new<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    MissingIdentifier(#[from] MissingIdentifierError),
    #[error(transparent)]
    MissingExecutable(#[from] MissingExecutableError),
    #[error(transparent)]
    InvalidCriterion(#[from] InvalidCriterionError),
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusError),
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<CommandConversionError> for BridgeError {
    fn from(err: CommandConversionError) -> Self {
        match err {
            CommandConversionError::MissingIdentifier(e) => BridgeError::MissingIdentifier(e),
            CommandConversionError::MissingExecutable(e) => BridgeError::MissingExecutable(e),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(err: anyhow::Error) -> Self {
        BridgeError::Internal(err.to_string())
    }
}
