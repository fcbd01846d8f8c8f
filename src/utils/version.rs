//! API 版本协商
//!
//! 客户端通过 `Accept: application/json; version=2.0` 请求特定版本，
//! 未携带版本参数时回退到配置中的默认版本。

use actix_web::HttpRequest;
use actix_web::http::header::ACCEPT;

use crate::config::AppConfig;

/// 协商出的 API 版本，major.minor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// 解析 "2.0" 或 "2" 形式的版本号
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().splitn(2, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        Some(Self { major, minor })
    }

    /// 配置的默认版本
    pub fn default_version() -> Self {
        Self::parse(&AppConfig::get().api.default_version).unwrap_or(Self::new(1, 0))
    }

    /// 从 Accept 头协商版本
    pub fn from_request(req: &HttpRequest) -> Self {
        req.headers()
            .get(ACCEPT)
            .and_then(|h| h.to_str().ok())
            .and_then(|accept| {
                accept.split(';').find_map(|param| {
                    param
                        .trim()
                        .strip_prefix("version=")
                        .and_then(ApiVersion::parse)
                })
            })
            .unwrap_or_else(Self::default_version)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ApiVersion::parse("1.0"), Some(ApiVersion::new(1, 0)));
        assert_eq!(ApiVersion::parse("2.1"), Some(ApiVersion::new(2, 1)));
        assert_eq!(ApiVersion::parse("3"), Some(ApiVersion::new(3, 0)));
        assert_eq!(ApiVersion::parse(" 2.0 "), Some(ApiVersion::new(2, 0)));
        assert_eq!(ApiVersion::parse("abc"), None);
        assert_eq!(ApiVersion::parse(""), None);
    }

    #[test]
    fn test_ordering() {
        assert!(ApiVersion::new(2, 0) > ApiVersion::new(1, 9));
        assert!(ApiVersion::new(1, 1) > ApiVersion::new(1, 0));
        assert!(ApiVersion::new(2, 0) >= ApiVersion::new(2, 0));
    }

    #[test]
    fn test_from_accept_header() {
        let req = actix_web::test::TestRequest::default()
            .insert_header((ACCEPT, "application/json; version=2.0"))
            .to_http_request();
        assert_eq!(ApiVersion::from_request(&req), ApiVersion::new(2, 0));
    }

    #[test]
    fn test_missing_version_falls_back_to_default() {
        let req = actix_web::test::TestRequest::default()
            .insert_header((ACCEPT, "application/json"))
            .to_http_request();
        assert_eq!(ApiVersion::from_request(&req), ApiVersion::default_version());
    }
}
