use genie_bridge_domain::{Application, ApplicationRequest, ApplicationStatus, LegacyApplication};
use genie_bridge_errors::MissingIdentifierError;

use super::{environment, timestamps, LegacyFields};
use crate::tags;

fn legacy_fields(legacy: &LegacyApplication) -> LegacyFields<'_, ApplicationStatus> {
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

/// 旧模式应用转换为结构化应用，旧记录必须带有ID
pub fn to_structured(legacy: &LegacyApplication) -> Result<Application, MissingIdentifierError> {
    let id = legacy
        .id
        .clone()
        .ok_or(MissingIdentifierError::new("Application"))?;
    let (created, updated) = timestamps(legacy.created, legacy.updated);

    Ok(Application {
        id,
        created,
        updated,
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
        application_type: legacy.application_type.clone(),
    })
}

/// 旧模式应用转换为创建请求，ID可选
pub fn to_request(legacy: &LegacyApplication) -> ApplicationRequest {
    ApplicationRequest {
        requested_id: legacy.id.clone(),
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
        application_type: legacy.application_type.clone(),
    }
}

pub fn to_legacy(application: &Application) -> LegacyApplication {
    let metadata = &application.metadata;
    let resources = &application.resources;
    LegacyApplication {
        id: Some(application.id.clone()),
        created: Some(application.created),
        updated: Some(application.updated),
        name: metadata.name.clone(),
        user: metadata.user.clone(),
        version: metadata.version.clone(),
        status: metadata.status,
        description: metadata.description.clone(),
        tags: tags::inject_identity(&application.id, &metadata.name, &metadata.tags),
        metadata: metadata.metadata.clone(),
        configs: resources.configs.clone(),
        dependencies: resources.dependencies.clone(),
        setup_file: resources.setup_file.clone(),
        application_type: application.application_type.clone(),
    }
}
