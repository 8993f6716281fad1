//! 业务数据模型
//!
//! 与 entity 模块中的数据库实体分离：storage 层负责二者之间的转换。

pub mod analytics;
pub mod auth;
pub mod common;
pub mod courses;
pub mod departments;
pub mod feedbacks;
pub mod results;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::Serialize;

/// 统一业务错误码（HTTP 状态码 × 100 + 序号）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserEmailInvalid = 40002,
    PasswordInvalid = 40003,
    ScoreOutOfRange = 40004,
    RatingOutOfRange = 40005,

    Unauthorized = 40100,
    AuthFailed = 40101,
    TokenExpired = 40102,

    Forbidden = 40300,

    NotFound = 40400,
    UserNotFound = 40401,
    DepartmentNotFound = 40402,
    CourseNotFound = 40403,
    ResultNotFound = 40404,

    Conflict = 40900,
    UserAlreadyExists = 40901,
    DepartmentCodeExists = 40902,
    CourseCodeExists = 40903,
    ResultAlreadyExists = 40904,
    FeedbackAlreadyExists = 40905,
    LecturerAlreadyAssigned = 40906,
    DepartmentHasCourses = 40907,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
    UserCreationFailed = 50001,
    PredictionFailed = 50002,
}

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
