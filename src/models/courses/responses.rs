use serde::Serialize;

use super::entities::{Course, CourseWithDepartment};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<CourseWithDepartment>,
    pub pagination: PaginationInfo,
}

// 可供反馈的课程（课程 + 授课讲师）
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackCourse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub lecturer_id: i64,
    pub lecturer_name: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackCourseListResponse {
    pub courses: Vec<FeedbackCourse>,
}

// 讲师自己的课程（含选课人数与平均评分）
#[derive(Debug, Clone, Serialize)]
pub struct LecturerCourse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub unit: i32,
    pub department_name: String,
    pub student_count: i64,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct LecturerCourseListResponse {
    pub courses: Vec<LecturerCourse>,
}
