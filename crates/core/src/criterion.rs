//! 选择条件与扁平标签之间的编解码

use std::collections::BTreeSet;

use genie_bridge_domain::{ClusterCriteria, Criterion};
use genie_bridge_errors::InvalidCriterionError;

use crate::tags::{GENIE_ID_PREFIX, GENIE_NAME_PREFIX};

/// 把扁平标签拆分为选择条件
///
/// 标签按字典序处理，出现多个ID（或名称）标签时第一个生效，其余被丢弃。
/// 本函数不会失败；需要拒绝歧义或空条件时使用 [`decode_strict`]。
pub fn decode(tags: &BTreeSet<String>) -> Criterion {
    let mut criterion = Criterion::default();
    for tag in tags {
        if let Some(id) = tag.strip_prefix(GENIE_ID_PREFIX) {
            if criterion.id.is_none() {
                criterion.id = Some(id.to_string());
            }
        } else if let Some(name) = tag.strip_prefix(GENIE_NAME_PREFIX) {
            if criterion.name.is_none() {
                criterion.name = Some(name.to_string());
            }
        } else {
            criterion.tags.insert(tag.clone());
        }
    }
    criterion
}

/// 严格解码：拒绝多个ID或名称标签，并要求结果非空
pub fn decode_strict(tags: &BTreeSet<String>) -> Result<Criterion, InvalidCriterionError> {
    reject_duplicates(tags, GENIE_ID_PREFIX)?;
    reject_duplicates(tags, GENIE_NAME_PREFIX)?;
    let criterion = decode(tags);
    criterion.validate()?;
    Ok(criterion)
}

fn reject_duplicates(
    tags: &BTreeSet<String>,
    prefix: &'static str,
) -> Result<(), InvalidCriterionError> {
    let values: Vec<String> = tags
        .iter()
        .filter_map(|tag| tag.strip_prefix(prefix))
        .map(str::to_string)
        .collect();
    if values.len() > 1 {
        return Err(InvalidCriterionError::AmbiguousIdentity { prefix, values });
    }
    Ok(())
}

/// 把选择条件编码为扁平标签
pub fn encode(criterion: &Criterion) -> BTreeSet<String> {
    let mut tags = criterion.tags.clone();
    if let Some(id) = &criterion.id {
        tags.insert(format!("{GENIE_ID_PREFIX}{id}"));
    }
    if let Some(name) = &criterion.name {
        tags.insert(format!("{GENIE_NAME_PREFIX}{name}"));
    }
    tags
}

pub fn to_cluster_criteria(criterion: &Criterion) -> ClusterCriteria {
    ClusterCriteria::new(encode(criterion))
}

pub fn from_cluster_criteria(
    criteria: &ClusterCriteria,
) -> Result<Criterion, InvalidCriterionError> {
    decode_strict(&criteria.tags)
}
