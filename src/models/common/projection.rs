//! 序列化投影上下文与超链接
//!
//! 每个 (实体, 分组, 版本) 组合有一个显式的投影结构体与映射函数，
//! 替代运行时反射式的字段分组标注。字段只在协商版本不低于其引入
//! 版本时输出。

use serde::Serialize;

use crate::models::auth::entities::ROLE_ADMIN;
use crate::utils::version::ApiVersion;

/// `createdAt` 字段自 2.0 起对外输出
pub const SINCE_CREATED_AT: ApiVersion = ApiVersion::new(2, 0);

/// 投影上下文：协商出的 API 版本 + 调用者权限
#[derive(Debug, Clone)]
pub struct ProjectionContext {
    pub version: ApiVersion,
    pub admin: bool,
}

impl ProjectionContext {
    pub fn new(version: ApiVersion, roles: &[String]) -> Self {
        Self {
            version,
            admin: roles.iter().any(|r| r == ROLE_ADMIN),
        }
    }

    /// 该字段在当前协商版本下是否输出
    pub fn includes(&self, since: ApiVersion) -> bool {
        self.version >= since
    }
}

/// 单个超链接
#[derive(Debug, Clone, Serialize)]
pub struct Href {
    pub href: String,
}

/// 资源超链接集合
///
/// update/delete 仅对持有 ROLE_ADMIN 的调用者输出。
#[derive(Debug, Clone, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Href,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Href>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Href>,
}

impl Links {
    pub fn for_resource(collection: &str, id: i64, ctx: &ProjectionContext) -> Self {
        let href = format!("/api/{collection}/{id}");
        Self {
            self_link: Href { href: href.clone() },
            update: ctx.admin.then(|| Href { href: href.clone() }),
            delete: ctx.admin.then(|| Href { href }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_hidden_without_admin_role() {
        let ctx = ProjectionContext::new(ApiVersion::new(1, 0), &["ROLE_USER".to_string()]);
        let links = Links::for_resource("classes", 7, &ctx);
        assert_eq!(links.self_link.href, "/api/classes/7");
        assert!(links.update.is_none());
        assert!(links.delete.is_none());
    }

    #[test]
    fn test_links_present_for_admin() {
        let roles = vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()];
        let ctx = ProjectionContext::new(ApiVersion::new(1, 0), &roles);
        let links = Links::for_resource("professeurs", 3, &ctx);
        assert!(links.update.is_some());
        assert!(links.delete.is_some());
    }

    #[test]
    fn test_version_gate() {
        let ctx = ProjectionContext::new(ApiVersion::new(1, 0), &[]);
        assert!(!ctx.includes(SINCE_CREATED_AT));
        let ctx = ProjectionContext::new(ApiVersion::new(2, 0), &[]);
        assert!(ctx.includes(SINCE_CREATED_AT));
        let ctx = ProjectionContext::new(ApiVersion::new(2, 1), &[]);
        assert!(ctx.includes(SINCE_CREATED_AT));
    }
}
