//! 标签命名空间过滤
//!
//! 旧模式把资源ID和名称以带保留前缀的标签存放在标签集合中，
//! 结构化模式中它们是显式字段，不能重复出现在用户可见的标签里。

use std::collections::BTreeSet;

/// 系统添加的资源ID标签前缀
pub const GENIE_ID_PREFIX: &str = "genie.id:";
/// 系统添加的资源名称标签前缀
pub const GENIE_NAME_PREFIX: &str = "genie.name:";

pub fn is_reserved(tag: &str) -> bool {
    tag.starts_with(GENIE_ID_PREFIX) || tag.starts_with(GENIE_NAME_PREFIX)
}

/// 去掉所有带保留前缀的标签
pub fn strip_reserved(tags: &BTreeSet<String>) -> BTreeSet<String> {
    tags.iter().filter(|tag| !is_reserved(tag)).cloned().collect()
}

/// 在标签集合中加入资源的身份标签
///
/// 已存在的、指向其他ID或名称的旧身份标签会被保留。
pub fn inject_identity(id: &str, name: &str, tags: &BTreeSet<String>) -> BTreeSet<String> {
    let mut legacy_tags = tags.clone();
    legacy_tags.insert(format!("{GENIE_ID_PREFIX}{id}"));
    legacy_tags.insert(format!("{GENIE_NAME_PREFIX}{name}"));
    legacy_tags
}
