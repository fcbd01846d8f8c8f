use serde::{Deserialize, Serialize};

/// 管理员角色，具有班级创建权限与写操作超链接
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
/// 普通已认证用户角色
pub const ROLE_USER: &str = "ROLE_USER";

/// 经过认证的调用者
///
/// 身份与角色由外部身份提供方签发的令牌携带，本服务不存储用户。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }

    /// 排序后的角色列表，用于构造按角色分区的缓存键
    pub fn sorted_roles(&self) -> Vec<String> {
        let mut roles = self.roles.clone();
        roles.sort();
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let user = AuthUser {
            sub: "1".to_string(),
            roles: vec![ROLE_USER.to_string(), ROLE_ADMIN.to_string()],
        };
        assert!(user.is_admin());

        let user = AuthUser {
            sub: "2".to_string(),
            roles: vec![ROLE_USER.to_string()],
        };
        assert!(!user.is_admin());
    }

    #[test]
    fn test_sorted_roles() {
        let user = AuthUser {
            sub: "1".to_string(),
            roles: vec![ROLE_USER.to_string(), ROLE_ADMIN.to_string()],
        };
        assert_eq!(user.sorted_roles(), vec!["ROLE_ADMIN", "ROLE_USER"]);
    }
}
