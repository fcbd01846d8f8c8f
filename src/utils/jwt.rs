//! JWT 校验工具
//!
//! 令牌由外部身份提供方以 HS256 签发，双方共享 `jwt.secret`。
//! 本服务只校验签名与有效期，并读取 sub 与 roles 声明。

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,         // Subject (调用者标识)
    pub roles: Vec<String>,  // 权限角色列表
    pub exp: usize,          // Expiration time (时间戳)
    pub iat: usize,          // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 签发 Token（供开发与测试使用，线上令牌来自外部身份提供方）
    pub fn generate_token(
        sub: &str,
        roles: &[&str],
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::minutes(config.jwt.access_token_expiry);

        let claims = Claims {
            sub: sub.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 校验并解析 Token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let token = JwtUtils::generate_token("42", &["ROLE_USER", "ROLE_ADMIN"]).unwrap();
        let claims = JwtUtils::verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.roles, vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = JwtUtils::generate_token("42", &["ROLE_USER"]).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(JwtUtils::verify_token(&tampered).is_err());
    }
}
