use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub title: String,
    pub unit: i32,
    pub department_id: i64,
    pub description: Option<String>,
}

// 课程更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub unit: Option<i32>,
    pub department_id: Option<i64>,
    pub description: Option<String>,
}

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department_id: Option<i64>,
    pub search: Option<String>,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            department_id: params.department_id,
            search: params.search,
        }
    }
}

// 讲师授课指派请求
#[derive(Debug, Deserialize)]
pub struct AssignLecturerRequest {
    pub lecturer_id: i64,
}
