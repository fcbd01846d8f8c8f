pub mod auth;
pub mod classes;
pub mod common;
pub mod eleves;
pub mod professeurs;

pub use common::pagination::PaginationQuery;
pub use common::projection::{Links, ProjectionContext};
pub use common::response::ApiResponse;

/// 统一业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Unauthorized = 40100,
    Forbidden = 40300,
    NotFound = 40400,
    InternalServerError = 50000,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
