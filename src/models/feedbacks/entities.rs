use serde::{Deserialize, Serialize};

// 课程反馈实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub lecturer_id: i64,
    pub rating: i32, // 1-5
    pub comment: Option<String>,
    pub semester: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 带课程信息的反馈行（讲师视角，不暴露学生身份）
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRow {
    pub id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub unit: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub semester: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 带全部名称的反馈行（管理员视角）
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackDetailRow {
    pub id: i64,
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub lecturer_name: String,
    pub student_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub semester: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
