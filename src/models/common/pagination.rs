use serde::Deserialize;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

impl PaginationQuery {
    /// 页码，最小为 1
    pub fn page(&self) -> u64 {
        self.page.max(1) as u64
    }

    /// 每页条数，最小为 1
    pub fn limit(&self) -> u64 {
        self.limit.max(1) as u64
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    3
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 3);
    }

    #[test]
    fn test_clamps_non_positive_values() {
        let query = PaginationQuery { page: 0, limit: -5 };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 1);
    }

    #[test]
    fn test_string_values_accepted() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page": "2", "limit": "10"}"#).unwrap();
        assert_eq!(query.page(), 2);
        assert_eq!(query.limit(), 10);
    }
}
