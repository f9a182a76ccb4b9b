use genie_bridge_domain::{Cluster, ClusterRequest, ClusterStatus, LegacyCluster};
use genie_bridge_errors::MissingIdentifierError;

use super::{environment, timestamps, LegacyFields};
use crate::tags;

fn legacy_fields(legacy: &LegacyCluster) -> LegacyFields<'_, ClusterStatus> {
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

pub fn to_structured(legacy: &LegacyCluster) -> Result<Cluster, MissingIdentifierError> {
    let id = legacy
        .id
        .clone()
        .ok_or(MissingIdentifierError::new("Cluster"))?;
    let (created, updated) = timestamps(legacy.created, legacy.updated);

    Ok(Cluster {
        id,
        created,
        updated,
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
    })
}

pub fn to_request(legacy: &LegacyCluster) -> ClusterRequest {
    ClusterRequest {
        requested_id: legacy.id.clone(),
        resources: environment(&legacy.configs, &legacy.dependencies, &legacy.setup_file),
        metadata: legacy_fields(legacy).into_metadata(),
    }
}

pub fn to_legacy(cluster: &Cluster) -> LegacyCluster {
    let metadata = &cluster.metadata;
    let resources = &cluster.resources;
    LegacyCluster {
        id: Some(cluster.id.clone()),
        created: Some(cluster.created),
        updated: Some(cluster.updated),
        name: metadata.name.clone(),
        user: metadata.user.clone(),
        version: metadata.version.clone(),
        status: metadata.status,
        description: metadata.description.clone(),
        tags: tags::inject_identity(&cluster.id, &metadata.name, &metadata.tags),
        metadata: metadata.metadata.clone(),
        configs: resources.configs.clone(),
        dependencies: resources.dependencies.clone(),
        setup_file: resources.setup_file.clone(),
    }
}
