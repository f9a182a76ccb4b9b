use std::time::Duration;

use genie_bridge_domain::{Command, CommandRequest, CommandStatus, LegacyCommand};
use genie_bridge_errors::{CommandConversionError, MissingExecutableError, MissingIdentifierError};

use super::{environment, timestamps, LegacyFields};
use crate::{executable, tags};

fn legacy_fields(legacy: &LegacyCommand) -> LegacyFields<'_, CommandStatus> {
    LegacyFields {
        name: &legacy.name,
        user: &legacy.user,
        version: &legacy.version,
        status: legacy.status,
        tags: &legacy.tags,
        description: &legacy.description,
        metadata: &legacy.metadata,
    }
}

/// 负数的旧检查间隔按0处理
fn check_delay(millis: i64) -> Duration {
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}

/// 非空的 `executableAndArguments` 原样使用，否则拆分 `executable`
fn executable_of(legacy: &LegacyCommand) -> Result<Vec<String>, MissingExecutableError> {
    if !legacy.executable_and_arguments.is_empty() {
        return Ok(legacy.executable_and_arguments.clone());
    }
    let arguments = legacy
        .executable
        .as_deref()
        .map(executable::split)
        .unwrap_or_default();
    if arguments.is_empty() {
        return Err(MissingExecutableError);
    }
    Ok(arguments)
}

pub fn to_structured(legacy: &LegacyCommand) -> Result<Command, CommandConversionError> {
    let id = legacy
        .id
        .clone()
        .ok_or(MissingIdentifierError::new("Command"))?;
    let executable = executable_of(legacy)?;
    let (created, updated) = timestamps(legacy.created, legacy.updated);

    Ok(Command {
        id,
        created,
        updated,
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
        executable,
        memory: legacy.memory,
        check_delay: check_delay(legacy.check_delay),
    })
}

pub fn to_request(legacy: &LegacyCommand) -> Result<CommandRequest, MissingExecutableError> {
    Ok(CommandRequest {
        requested_id: legacy.id.clone(),
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
        executable: executable_of(legacy)?,
        memory: legacy.memory,
        check_delay: Some(check_delay(legacy.check_delay)),
    })
}

pub fn to_legacy(command: &Command) -> LegacyCommand {
    let metadata = &command.metadata;
    let resources = &command.resources;
    LegacyCommand {
        id: Some(command.id.clone()),
        created: Some(command.created),
        updated: Some(command.updated),
        name: metadata.name.clone(),
        user: metadata.user.clone(),
        version: metadata.version.clone(),
        status: metadata.status,
        description: metadata.description.clone(),
        tags: tags::inject_identity(&command.id, &metadata.name, &metadata.tags),
        metadata: metadata.metadata.clone(),
        configs: resources.configs.clone(),
        dependencies: resources.dependencies.clone(),
        setup_file: resources.setup_file.clone(),
        executable: Some(executable::join(&command.executable)),
        executable_and_arguments: command.executable.clone(),
        check_delay: i64::try_from(command.check_delay.as_millis()).unwrap_or(i64::MAX),
        memory: command.memory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_bridge_domain::DEFAULT_CHECK_DELAY;
    use genie_bridge_testing_utils::builders::{set, LegacyCommandBuilder};

    #[test]
    fn test_executable_is_normalized_across_schemas() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_executable("/bin/sh  -c  'run'")
            .build();

        let command = to_structured(&legacy).unwrap();
        assert_eq!(command.executable, vec!["/bin/sh", "-c", "'run'"]);

        let back = to_legacy(&command);
        assert_eq!(back.executable.as_deref(), Some("/bin/sh -c 'run'"));
        assert_eq!(back.executable_and_arguments, vec!["/bin/sh", "-c", "'run'"]);
    }

    #[test]
    fn test_executable_and_arguments_take_precedence() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_executable("ignored --flag")
            .with_executable_and_arguments(&["/bin/sh", "-c", "echo a b"])
            .build();

        let command = to_structured(&legacy).unwrap();
        assert_eq!(command.executable, vec!["/bin/sh", "-c", "echo a b"]);

        // 含空格的参数经过旧模式往返后保持不变
        let back = to_legacy(&command);
        assert_eq!(back.executable_and_arguments, vec!["/bin/sh", "-c", "echo a b"]);
        assert_eq!(back.executable.as_deref(), Some("/bin/sh -c echo a b"));
        assert_eq!(to_structured(&back).unwrap().executable, command.executable);
    }

    #[test]
    fn test_missing_executable_is_rejected() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .without_executable()
            .build();
        assert_eq!(
            to_structured(&legacy),
            Err(CommandConversionError::MissingExecutable(MissingExecutableError))
        );
        assert_eq!(to_request(&legacy), Err(MissingExecutableError));

        let blank = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_executable(" \t ")
            .build();
        assert_eq!(to_request(&blank), Err(MissingExecutableError));
    }

    #[test]
    fn test_to_structured_requires_id() {
        let legacy = LegacyCommandBuilder::new().without_id().build();
        assert_eq!(
            to_structured(&legacy),
            Err(MissingIdentifierError::new("Command").into())
        );
    }

    #[test]
    fn test_memory_and_check_delay() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_memory(2048)
            .with_check_delay(5000)
            .build();
        let command = to_structured(&legacy).unwrap();
        assert_eq!(command.memory, Some(2048));
        assert_eq!(command.check_delay, Duration::from_millis(5000));

        let back = to_legacy(&command);
        assert_eq!(back.memory, Some(2048));
        assert_eq!(back.check_delay, 5000);
    }

    #[test]
    fn test_absent_memory_stays_absent() {
        let legacy = LegacyCommandBuilder::new().with_id("cmd1").build();
        let command = to_structured(&legacy).unwrap();
        assert_eq!(command.memory, None);
        assert_eq!(command.check_delay, DEFAULT_CHECK_DELAY);
        assert_eq!(to_legacy(&command).memory, None);
    }

    #[test]
    fn test_negative_check_delay_clamped() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_check_delay(-1)
            .build();
        assert_eq!(to_structured(&legacy).unwrap().check_delay, Duration::ZERO);
    }

    #[test]
    fn test_identity_tags() {
        let legacy = LegacyCommandBuilder::new()
            .with_id("cmd1")
            .with_name("spark-submit")
            .with_tags(&["genie.id:cmd1", "genie.name:spark-submit", "type:spark", "ver:2.4"])
            .build();
        let command = to_structured(&legacy).unwrap();
        assert_eq!(command.metadata.tags, set(&["type:spark", "ver:2.4"]));
        assert_eq!(to_legacy(&command).tags, legacy.tags);
    }

    #[test]
    fn test_to_request() {
        let legacy = LegacyCommandBuilder::new()
            .without_id()
            .with_executable("spark-submit\t--master yarn")
            .with_check_delay(30_000)
            .build();
        let request = to_request(&legacy).unwrap();
        assert_eq!(request.requested_id, None);
        assert_eq!(request.executable, vec!["spark-submit", "--master", "yarn"]);
        assert_eq!(request.check_delay, Some(Duration::from_secs(30)));
    }
}
